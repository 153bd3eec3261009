use std::cmp::Ordering;

use crate::format::format_bytes;
use crate::metrics::snapshot::Process;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Pid,
    Name,
    Cpu,
    Mem,
}

impl SortColumn {
    /// Table column order, left to right.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Pid,
        SortColumn::Name,
        SortColumn::Cpu,
        SortColumn::Mem,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Pid => "PID",
            SortColumn::Name => "Name",
            SortColumn::Cpu => "CPU",
            SortColumn::Mem => "Memory",
        }
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pid" => SortColumn::Pid,
            "name" => SortColumn::Name,
            "mem" | "memory" => SortColumn::Mem,
            _ => SortColumn::Cpu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub descending: bool,
}

impl SortState {
    pub fn new(column: SortColumn) -> Self {
        SortState {
            column,
            descending: true,
        }
    }

    /// Same column flips the direction; a new column starts descending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.descending = !self.descending;
        } else {
            self.column = column;
            self.descending = true;
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        SortState::new(SortColumn::Cpu)
    }
}

/// Display text for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRow {
    pub pid: String,
    pub name: String,
    pub cpu: String,
    pub memory: String,
}

impl ProcessRow {
    fn from_process(process: &Process) -> Self {
        ProcessRow {
            pid: process.pid.to_string(),
            name: process.name.clone(),
            cpu: format!("{}%", process.cpu_percent),
            memory: format!(
                "{}% ({})",
                process.memory_percent,
                format_bytes(process.memory_rss, false)
            ),
        }
    }

    pub fn cell(&self, column: SortColumn) -> &str {
        match column {
            SortColumn::Pid => &self.pid,
            SortColumn::Name => &self.name,
            SortColumn::Cpu => &self.cpu,
            SortColumn::Mem => &self.memory,
        }
    }
}

/// The last received process list plus the session's sort state.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    processes: Vec<Process>,
    sort: SortState,
}

impl ProcessTable {
    pub fn new(sort: SortState) -> Self {
        ProcessTable {
            processes: Vec::new(),
            sort,
        }
    }

    pub fn set_processes(&mut self, processes: Vec<Process>) {
        self.processes = processes;
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort.toggle(column);
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Stable ordering of the held list under the current sort state.
    /// Equal keys keep their input order in both directions.
    pub fn sorted_view(&self) -> Vec<&Process> {
        let SortState { column, descending } = self.sort;
        let mut sorted: Vec<&Process> = self.processes.iter().collect();
        sorted.sort_by(|a, b| {
            let ord = compare(a, b, column);
            if descending { ord.reverse() } else { ord }
        });
        sorted
    }

    pub fn render_rows(&self) -> Vec<ProcessRow> {
        self.sorted_view()
            .into_iter()
            .map(ProcessRow::from_process)
            .collect()
    }

    /// Header labels with an arrow on the active column.
    pub fn header_labels(&self) -> [(SortColumn, String); 4] {
        SortColumn::ALL.map(|column| {
            let label = if column == self.sort.column {
                let arrow = if self.sort.descending { '\u{25bc}' } else { '\u{25b2}' };
                format!("{} {arrow}", column.label())
            } else {
                column.label().to_string()
            };
            (column, label)
        })
    }
}

fn compare(a: &Process, b: &Process, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Pid => a.pid.cmp(&b.pid),
        SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortColumn::Cpu => percent_key(a.cpu_percent).total_cmp(&percent_key(b.cpu_percent)),
        SortColumn::Mem => {
            percent_key(a.memory_percent).total_cmp(&percent_key(b.memory_percent))
        }
    }
}

/// `-0.0` and `0.0` are the same value and must tie.
fn percent_key(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(pid: u32, name: &str, cpu: f64, mem: f64) -> Process {
        Process {
            pid,
            name: name.to_string(),
            cpu_percent: cpu,
            memory_percent: mem,
            memory_rss: 1024,
        }
    }

    fn pids(table: &ProcessTable) -> Vec<u32> {
        table.sorted_view().iter().map(|p| p.pid).collect()
    }

    #[test]
    fn default_sort_is_cpu_descending() {
        let state = SortState::default();
        assert_eq!(state.column, SortColumn::Cpu);
        assert!(state.descending);
    }

    #[test]
    fn toggle_same_column_flips_direction() {
        let mut state = SortState::default();
        state.toggle(SortColumn::Cpu);
        assert_eq!(state, SortState { column: SortColumn::Cpu, descending: false });
        state.toggle(SortColumn::Cpu);
        assert!(state.descending);
    }

    #[test]
    fn toggle_new_column_resets_to_descending() {
        let mut state = SortState {
            column: SortColumn::Cpu,
            descending: false,
        };
        state.toggle(SortColumn::Name);
        assert_eq!(state, SortState::new(SortColumn::Name));
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut table = ProcessTable::new(SortState {
            column: SortColumn::Name,
            descending: false,
        });
        table.set_processes(vec![
            proc(1, "Zebra", 0.0, 0.0),
            proc(2, "alpha", 0.0, 0.0),
            proc(3, "Beta", 0.0, 0.0),
        ]);
        assert_eq!(pids(&table), vec![2, 3, 1]);
    }

    #[test]
    fn numeric_columns_sort_by_value() {
        let mut table = ProcessTable::default();
        table.set_processes(vec![
            proc(10, "a", 5.0, 30.0),
            proc(2, "b", 90.0, 10.0),
            proc(7, "c", 50.0, 20.0),
        ]);
        assert_eq!(pids(&table), vec![2, 7, 10]);

        table.sort_by(SortColumn::Mem);
        assert_eq!(pids(&table), vec![10, 7, 2]);

        table.sort_by(SortColumn::Pid);
        table.sort_by(SortColumn::Pid);
        assert_eq!(pids(&table), vec![2, 7, 10]);
    }

    #[test]
    fn equal_keys_keep_input_order_both_directions() {
        let mut table = ProcessTable::default();
        table.set_processes(vec![
            proc(1, "a", 10.0, 0.0),
            proc(2, "b", 20.0, 0.0),
            proc(3, "c", 10.0, 0.0),
            proc(4, "d", 20.0, 0.0),
        ]);
        assert_eq!(pids(&table), vec![2, 4, 1, 3]);

        table.sort_by(SortColumn::Cpu);
        assert_eq!(pids(&table), vec![1, 3, 2, 4]);
    }

    #[test]
    fn signed_zero_ties_keep_input_order() {
        let mut table = ProcessTable::default();
        table.set_processes(vec![proc(1, "a", -0.0, 0.0), proc(2, "b", 0.0, -0.0)]);
        assert_eq!(pids(&table), vec![1, 2]);

        table.sort_by(SortColumn::Cpu);
        assert_eq!(pids(&table), vec![1, 2]);

        table.sort_by(SortColumn::Mem);
        assert_eq!(pids(&table), vec![1, 2]);
    }

    #[test]
    fn sorted_view_leaves_held_list_untouched() {
        let mut table = ProcessTable::default();
        table.set_processes(vec![proc(1, "a", 1.0, 0.0), proc(2, "b", 2.0, 0.0)]);
        let _ = table.sorted_view();
        let held: Vec<u32> = table.processes().iter().map(|p| p.pid).collect();
        assert_eq!(held, vec![1, 2]);
    }

    #[test]
    fn rows_format_percentages_and_rss() {
        let mut table = ProcessTable::default();
        table.set_processes(vec![Process {
            pid: 42,
            name: "postgres".to_string(),
            cpu_percent: 12.5,
            memory_percent: 3.0,
            memory_rss: 1536,
        }]);
        let rows = table.render_rows();
        assert_eq!(
            rows,
            vec![ProcessRow {
                pid: "42".to_string(),
                name: "postgres".to_string(),
                cpu: "12.5%".to_string(),
                memory: "3% (1.5 KB)".to_string(),
            }]
        );
    }

    #[test]
    fn header_marks_active_column() {
        let mut table = ProcessTable::default();
        let labels = table.header_labels();
        assert_eq!(labels[2].1, "CPU \u{25bc}");
        assert_eq!(labels[0].1, "PID");

        table.sort_by(SortColumn::Cpu);
        assert_eq!(table.header_labels()[2].1, "CPU \u{25b2}");
    }

    #[test]
    fn config_strings_map_to_columns() {
        assert_eq!(SortColumn::from_str_config("PID"), SortColumn::Pid);
        assert_eq!(SortColumn::from_str_config("memory"), SortColumn::Mem);
        assert_eq!(SortColumn::from_str_config("bogus"), SortColumn::Cpu);
    }
}
