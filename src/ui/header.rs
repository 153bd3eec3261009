use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::metrics::poller::PollPhase;
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    endpoint: &str,
    phase: PollPhase,
    process_count: usize,
    theme: &Theme,
) {
    let indicator = match phase {
        PollPhase::Fetching => Span::styled(" \u{25cf}", Style::default().fg(theme.fetching)),
        PollPhase::Idle => Span::styled(" \u{25cb}", Style::default().fg(theme.text_secondary)),
    };

    let line = Line::from(vec![
        Span::styled(
            " vmdash ",
            Style::default()
                .fg(theme.header_accent_fg)
                .bg(theme.header_accent_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(endpoint, Style::default().fg(theme.text_secondary)),
        indicator,
        Span::raw("  "),
        Span::styled(
            format!("Procs: {process_count}"),
            Style::default().fg(theme.text_secondary),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
