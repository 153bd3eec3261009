use std::fmt::Display;

pub const WARNING_THRESHOLD: f64 = 70.0;
pub const DANGER_THRESHOLD: f64 = 90.0;

/// Style tier of a usage bar. Lower bounds are exclusive: exactly 70 is
/// `Normal`, exactly 90 is `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarLevel {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl BarLevel {
    pub fn from_percent(percent: f64) -> Self {
        if percent > DANGER_THRESHOLD {
            BarLevel::Danger
        } else if percent > WARNING_THRESHOLD {
            BarLevel::Warning
        } else {
            BarLevel::Normal
        }
    }

    /// Warning and danger bars are highlighted; normal bars use the theme default.
    pub fn glows(self) -> bool {
        !matches!(self, BarLevel::Normal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bar {
    pub percent: f64,
    pub level: BarLevel,
}

impl Bar {
    /// Fill ratio for painting, 100 percent being full width.
    pub fn ratio(&self) -> f64 {
        (self.percent / 100.0).clamp(0.0, 1.0)
    }
}

pub fn update_metric(slot: &mut String, value: impl Display) {
    *slot = value.to_string();
}

pub fn update_bar(bar: &mut Bar, percent: f64) {
    bar.percent = percent;
    bar.level = BarLevel::from_percent(percent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_have_exclusive_lower_bounds() {
        assert_eq!(BarLevel::from_percent(0.0), BarLevel::Normal);
        assert_eq!(BarLevel::from_percent(70.0), BarLevel::Normal);
        assert_eq!(BarLevel::from_percent(70.01), BarLevel::Warning);
        assert_eq!(BarLevel::from_percent(90.0), BarLevel::Warning);
        assert_eq!(BarLevel::from_percent(90.5), BarLevel::Danger);
        assert_eq!(BarLevel::from_percent(100.0), BarLevel::Danger);
    }

    #[test]
    fn update_bar_resets_to_normal() {
        let mut bar = Bar::default();
        update_bar(&mut bar, 95.0);
        assert_eq!(bar.level, BarLevel::Danger);
        assert!(bar.level.glows());

        update_bar(&mut bar, 12.0);
        assert_eq!(bar.level, BarLevel::Normal);
        assert!(!bar.level.glows());
        assert!((bar.ratio() - 0.12).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_is_clamped() {
        let bar = Bar {
            percent: 140.0,
            level: BarLevel::Danger,
        };
        assert_eq!(bar.ratio(), 1.0);
    }

    #[test]
    fn update_metric_prints_value() {
        let mut slot = String::from("--");
        update_metric(&mut slot, 95.0);
        assert_eq!(slot, "95");
        update_metric(&mut slot, 12.34);
        assert_eq!(slot, "12.34");
    }
}
