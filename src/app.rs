use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::action::{Action, Scroll};
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::metrics::poller::{PollPhase, PollUpdate, Poller};
use crate::process_table::{SortColumn, SortState};
use crate::ui::theme::Theme;
use crate::view::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub help: KeyCode,
    pub refresh: KeyCode,
    pub cycle_theme: KeyCode,
    pub sort_pid: KeyCode,
    pub sort_name: KeyCode,
    pub sort_cpu: KeyCode,
    pub sort_mem: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            cycle_theme: parse_key(&kb.cycle_theme).unwrap_or(KeyCode::Char('t')),
            sort_pid: parse_key(&kb.sort_pid).unwrap_or(KeyCode::Char('p')),
            sort_name: parse_key(&kb.sort_name).unwrap_or(KeyCode::Char('n')),
            sort_cpu: parse_key(&kb.sort_cpu).unwrap_or(KeyCode::Char('c')),
            sort_mem: parse_key(&kb.sort_mem).unwrap_or(KeyCode::Char('m')),
        }
    }

    /// Returns (key_label, description) pairs for all configurable keybinds.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        let mut entries = vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.help), "Toggle help"),
            (key_label(self.refresh), "Poll now"),
            (key_label(self.cycle_theme), "Cycle theme"),
            (key_label(self.sort_pid), "Sort by PID"),
            (key_label(self.sort_name), "Sort by name"),
            (key_label(self.sort_cpu), "Sort by CPU"),
            (key_label(self.sort_mem), "Sort by memory"),
        ];
        entries.push(("↑↓ PgUp PgDn".to_string(), "Scroll"));
        entries.push(("Click".to_string(), "Sort by column"));
        entries.push(("Ctrl+C".to_string(), "Quit (always)"));
        entries
    }

    pub fn sort_key(&self, column: SortColumn) -> KeyCode {
        match column {
            SortColumn::Pid => self.sort_pid,
            SortColumn::Name => self.sort_name,
            SortColumn::Cpu => self.sort_cpu,
            SortColumn::Mem => self.sort_mem,
        }
    }
}

pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => "?".to_string(),
    }
}

pub struct App {
    pub running: bool,
    pub dashboard: Dashboard,
    pub endpoint: String,
    pub input_mode: InputMode,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
    pub poll_phase: PollPhase,
    /// Index of the first visible process row.
    pub scroll: usize,
    /// Rows that fit in the table body at the last draw.
    pub page_size: usize,
    /// Header cell areas from the last draw, used for click-to-sort.
    pub header_hitboxes: Vec<(Rect, SortColumn)>,
    poller: Option<Poller>,
}

impl App {
    pub fn new(config: &Config, endpoint: String) -> Self {
        let sort = SortState::new(SortColumn::from_str_config(&config.general.default_sort));

        App {
            running: true,
            dashboard: Dashboard::new(sort),
            endpoint,
            input_mode: InputMode::Normal,
            theme: Theme::from_config(&config.general.theme),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            poll_phase: PollPhase::Idle,
            scroll: 0,
            page_size: 0,
            header_hitboxes: Vec::new(),
            poller: None,
        }
    }

    /// The poller lives as long as the app; dropping the app stops polling.
    pub fn attach_poller(&mut self, poller: Poller) {
        self.poller = Some(poller);
    }

    pub fn on_poll(&mut self, update: PollUpdate) {
        self.poll_phase = self.poll_phase.on_update(&update);
        // Failures were logged by the poller; the view keeps its last values.
        if let PollUpdate::Finished(Ok(snapshot)) = update {
            self.dashboard.apply_snapshot(snapshot);
            self.clamp_scroll();
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Help => self.map_key_help(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        // Scrolling is hardwired (not configurable)
        match code {
            KeyCode::Up => return Action::Scroll(Scroll::Up),
            KeyCode::Down => return Action::Scroll(Scroll::Down),
            KeyCode::PageUp => return Action::Scroll(Scroll::PageUp),
            KeyCode::PageDown => return Action::Scroll(Scroll::PageDown),
            KeyCode::Home => return Action::Scroll(Scroll::Top),
            _ => {}
        }

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }
        if code == kb.cycle_theme {
            return Action::CycleTheme;
        }
        if let Some(column) = SortColumn::ALL
            .into_iter()
            .find(|&column| code == kb.sort_key(column))
        {
            return Action::SortBy(column);
        }

        Action::None
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        let code = key.code;
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if code == self.keybinds.help || code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::SortBy(column) => {
                self.dashboard.sort_by(column);
                tracing::debug!(sort = ?self.dashboard.table.sort_state(), "sort changed");
            }
            Action::Scroll(scroll) => self.scroll(scroll),
            Action::Refresh => {
                if let Some(poller) = &self.poller {
                    poller.refresh();
                }
            }
            Action::CycleTheme => {
                self.theme = self.theme.next();
            }
            Action::ToggleHelp => {
                self.input_mode = if self.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::ClickAt(col, row) => {
                // The help overlay covers the table.
                if self.input_mode == InputMode::Normal
                    && let Some(column) = self.header_at(col, row)
                {
                    self.dispatch(Action::SortBy(column));
                }
            }
            Action::None => {}
        }
    }

    pub fn header_at(&self, col: u16, row: u16) -> Option<SortColumn> {
        self.header_hitboxes
            .iter()
            .find(|(area, _)| {
                col >= area.x
                    && col < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|&(_, column)| column)
    }

    fn scroll(&mut self, scroll: Scroll) {
        let page = self.page_size.max(1);
        self.scroll = match scroll {
            Scroll::Up => self.scroll.saturating_sub(1),
            Scroll::Down => self.scroll + 1,
            Scroll::PageUp => self.scroll.saturating_sub(page),
            Scroll::PageDown => self.scroll + page,
            Scroll::Top => 0,
        };
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let rows = self.dashboard.view.process_rows.len();
        let max = rows.saturating_sub(self.page_size.max(1));
        self.scroll = self.scroll.min(max);
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }
}
