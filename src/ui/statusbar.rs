use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{ResolvedKeybinds, key_label};
use crate::process_table::SortColumn;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, keybinds: &ResolvedKeybinds, theme: &Theme) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    let sort_keys = SortColumn::ALL
        .iter()
        .map(|&column| key_label(keybinds.sort_key(column)))
        .collect::<Vec<_>>()
        .join("/");

    let mut spans = Vec::new();
    spans.extend(pill_spans(key_label(keybinds.quit), "Quit", theme));
    spans.extend(pill_spans(sort_keys, "Sort", theme));
    spans.extend(pill_spans(key_label(keybinds.refresh), "Refresh", theme));
    spans.extend(pill_spans(key_label(keybinds.cycle_theme), "Theme", theme));
    spans.extend(pill_spans(key_label(keybinds.help), "Help", theme));
    spans.extend(pill_spans("\u{2191}\u{2193}".to_string(), "Scroll", theme));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
}

fn pill_spans<'a>(key: String, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
