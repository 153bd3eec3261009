use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::format::truncate_unicode;
use crate::process_table::{ProcessRow, SortColumn};
use crate::ui::theme::Theme;

const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Length(8),
    Constraint::Min(12),
    Constraint::Length(10),
    Constraint::Length(24),
];

/// Geometry of the last drawn table.
#[derive(Debug, Clone, Default)]
pub struct TableLayout {
    pub header_hitboxes: Vec<(Rect, SortColumn)>,
    pub page_size: usize,
}

fn column_areas(area: Rect) -> [Rect; 4] {
    Layout::horizontal(COLUMN_WIDTHS).spacing(1).areas(area)
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[ProcessRow],
    labels: &[(SortColumn, String); 4],
    active: SortColumn,
    scroll: usize,
    theme: &Theme,
) -> TableLayout {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            format!(" Processes ({}) ", rows.len()),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_row, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    let header_cells = column_areas(header_row);
    let body_cells = column_areas(body);

    let page_size = body.height as usize;
    let start = scroll.min(rows.len().saturating_sub(page_size));
    let end = (start + page_size).min(rows.len());
    let visible = &rows[start..end];

    let mut header_hitboxes = Vec::with_capacity(labels.len());
    for (i, (column, label)) in labels.iter().enumerate() {
        let header_fg = if *column == active {
            theme.accent
        } else {
            theme.table_header_fg
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                label.as_str(),
                Style::default().fg(header_fg).add_modifier(Modifier::BOLD),
            )),
            header_cells[i],
        );
        header_hitboxes.push((header_cells[i], *column));

        let width = body_cells[i].width as usize;
        let lines: Vec<Line> = visible
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    truncate_unicode(row.cell(*column), width),
                    Style::default().fg(theme.text_primary),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), body_cells[i]);
    }

    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Waiting for data\u{2026}",
                Style::default().fg(theme.text_secondary),
            )),
            body,
        );
    }

    TableLayout {
        header_hitboxes,
        page_size,
    }
}
