use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

use crate::ui::theme::Theme;
use crate::view::metric::Bar;
use crate::view::{DashboardView, PLACEHOLDER};

/// Border, gauge row and two text rows.
pub const PANEL_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let [cpu_area, memory_area, disk_area, network_area] =
        Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area);

    let cpu = &view.cpu;
    render_gauge_panel(
        frame,
        cpu_area,
        " CPU ",
        &cpu.value,
        cpu.bar,
        [cpu.model.clone(), cpu.cores.clone()],
        theme,
    );

    let memory = &view.memory;
    render_gauge_panel(
        frame,
        memory_area,
        " Memory ",
        &memory.value,
        memory.bar,
        [
            format!("{} / {}", memory.used, memory.total),
            memory.memory_type.clone(),
        ],
        theme,
    );

    let disk = &view.disk;
    render_gauge_panel(
        frame,
        disk_area,
        " Disk ",
        &disk.value,
        disk.bar,
        [format!("{} / {}", disk.used, disk.total), disk.fstype.clone()],
        theme,
    );

    render_network_panel(frame, network_area, view, theme);
}

fn panel_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_gauge_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    bar: Bar,
    lines: [String; 2],
    theme: &Theme,
) {
    let block = panel_block(title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [gauge_area, text_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let gauge = Gauge::default()
        .gauge_style(theme.bar_style(bar.level))
        .ratio(bar.ratio())
        .use_unicode(true)
        .label(gauge_label(value));
    frame.render_widget(gauge, gauge_area);

    let text: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.text_secondary))))
        .collect();
    frame.render_widget(Paragraph::new(text), text_area);
}

fn render_network_panel(frame: &mut Frame, area: Rect, view: &DashboardView, theme: &Theme) {
    let block = panel_block(" Network ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(theme.text_secondary);
    let value = Style::default()
        .fg(theme.text_primary)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("\u{2193} In   ", label),
            Span::styled(view.network.inbound.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled("\u{2191} Out  ", label),
            Span::styled(view.network.outbound.as_str(), value),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn gauge_label(value: &str) -> String {
    if value == PLACEHOLDER {
        PLACEHOLDER.to_string()
    } else {
        format!("{value}%")
    }
}
