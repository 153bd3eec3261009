use crate::process_table::SortColumn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SortBy(SortColumn),
    Scroll(Scroll),
    Refresh,
    CycleTheme,
    ToggleHelp,
    ClickAt(u16, u16),
    None,
}
