pub mod header;
pub mod help;
pub mod panels;
pub mod process_list;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [header_area, panels_area, table_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(panels::PANEL_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    header::render(
        frame,
        header_area,
        &app.endpoint,
        app.poll_phase,
        app.dashboard.table.len(),
        &app.theme,
    );
    panels::render(frame, panels_area, &app.dashboard.view, &app.theme);

    let table = &app.dashboard.table;
    let layout = process_list::render(
        frame,
        table_area,
        &app.dashboard.view.process_rows,
        &table.header_labels(),
        table.sort_state().column,
        app.scroll,
        &app.theme,
    );
    // Mouse hit-testing happens against what was actually drawn.
    app.header_hitboxes = layout.header_hitboxes;
    app.page_size = layout.page_size;

    statusbar::render(frame, status_area, &app.keybinds, &app.theme);

    // Help overlay goes last so it draws on top.
    if app.show_help() {
        help::render(frame, frame.area(), &app.help_entries(), &app.theme);
    }
}
