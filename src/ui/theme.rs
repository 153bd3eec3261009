use ratatui::style::{Color, Modifier, Style};

use crate::view::metric::BarLevel;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub header_accent_bg: Color,
    pub header_accent_fg: Color,
    pub statusbar_bg: Color,
    pub overlay_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub surface_bg: Color,
    pub gauge_filled: Color,
    pub gauge_unfilled: Color,
    pub warning: Color,
    pub danger: Color,
    pub table_header_fg: Color,
    pub fetching: Color,
}

impl Theme {
    pub fn from_config(theme_name: &str) -> Self {
        match theme_name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Gauge style for a usage tier. Warning and danger bars are bold.
    pub fn bar_style(&self, level: BarLevel) -> Style {
        let fill = match level {
            BarLevel::Normal => self.gauge_filled,
            BarLevel::Warning => self.warning,
            BarLevel::Danger => self.danger,
        };
        let style = Style::default().fg(fill).bg(self.gauge_unfilled);
        if level.glows() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            header_accent_bg: Color::Rgb(56, 189, 248),
            header_accent_fg: Color::Black,
            statusbar_bg: Color::DarkGray,
            overlay_border: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            accent: Color::Rgb(129, 140, 248),
            pill_key_bg: Color::Yellow,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            surface_bg: Color::DarkGray,
            gauge_filled: Color::Rgb(103, 232, 249),
            gauge_unfilled: Color::Rgb(30, 41, 59),
            warning: Color::Rgb(251, 191, 36),
            danger: Color::Rgb(248, 113, 113),
            table_header_fg: Color::Rgb(148, 163, 184),
            fetching: Color::Rgb(52, 211, 153),
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            header_accent_bg: Color::Blue,
            header_accent_fg: Color::White,
            statusbar_bg: Color::Rgb(220, 220, 220),
            overlay_border: Color::Rgb(150, 150, 150),
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            accent: Color::Blue,
            pill_key_bg: Color::Blue,
            pill_key_fg: Color::White,
            pill_desc_fg: Color::Black,
            surface_bg: Color::Rgb(200, 200, 200),
            gauge_filled: Color::Rgb(70, 130, 180),
            gauge_unfilled: Color::Rgb(200, 200, 200),
            warning: Color::Rgb(217, 119, 6),
            danger: Color::Rgb(220, 38, 38),
            table_header_fg: Color::Rgb(71, 85, 105),
            fetching: Color::Rgb(0, 120, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_from_config_falls_back_to_dark() {
        assert_eq!(Theme::from_config("LIGHT").name, "light");
        assert_eq!(Theme::from_config("solarized").name, "dark");
    }

    #[test]
    fn theme_cycles() {
        let theme = Theme::dark();
        assert_eq!(theme.next().name, "light");
        assert_eq!(theme.next().next().name, "dark");
    }

    #[test]
    fn bar_style_follows_tier() {
        let theme = Theme::dark();

        let normal = theme.bar_style(BarLevel::Normal);
        assert_eq!(normal.fg, Some(theme.gauge_filled));
        assert!(!normal.add_modifier.contains(Modifier::BOLD));

        let warning = theme.bar_style(BarLevel::Warning);
        assert_eq!(warning.fg, Some(theme.warning));
        assert!(warning.add_modifier.contains(Modifier::BOLD));

        let danger = theme.bar_style(BarLevel::Danger);
        assert_eq!(danger.fg, Some(theme.danger));
        assert!(danger.add_modifier.contains(Modifier::BOLD));
    }
}
