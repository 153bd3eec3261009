//! Display model of the dashboard.
//!
//! Every region the renderer paints is a typed field here, holding text that
//! is already formatted. The terminal layer only reads it.

pub mod metric;
pub mod update;

use crate::metrics::snapshot::Snapshot;
use crate::process_table::{ProcessRow, ProcessTable, SortColumn, SortState};
use metric::Bar;

/// Shown in every slot until the first successful poll.
pub const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, PartialEq)]
pub struct CpuPanel {
    pub value: String,
    pub bar: Bar,
    pub model: String,
    pub cores: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPanel {
    pub value: String,
    pub bar: Bar,
    pub used: String,
    pub total: String,
    pub memory_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskPanel {
    pub value: String,
    pub bar: Bar,
    pub used: String,
    pub total: String,
    pub fstype: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkPanel {
    pub inbound: String,
    pub outbound: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub cpu: CpuPanel,
    pub memory: MemoryPanel,
    pub disk: DiskPanel,
    pub network: NetworkPanel,
    pub process_rows: Vec<ProcessRow>,
}

impl Default for DashboardView {
    fn default() -> Self {
        let text = || PLACEHOLDER.to_string();
        DashboardView {
            cpu: CpuPanel {
                value: text(),
                bar: Bar::default(),
                model: text(),
                cores: text(),
            },
            memory: MemoryPanel {
                value: text(),
                bar: Bar::default(),
                used: text(),
                total: text(),
                memory_type: text(),
            },
            disk: DiskPanel {
                value: text(),
                bar: Bar::default(),
                used: text(),
                total: text(),
                fstype: text(),
            },
            network: NetworkPanel {
                inbound: text(),
                outbound: text(),
            },
            process_rows: Vec::new(),
        }
    }
}

impl DashboardView {
    /// Rebuilds the whole table body from the model.
    pub fn render_processes(&mut self, table: &ProcessTable) {
        self.process_rows = table.render_rows();
    }
}

/// Session state: the view plus the process table it renders.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub view: DashboardView,
    pub table: ProcessTable,
}

impl Dashboard {
    pub fn new(sort: SortState) -> Self {
        Dashboard {
            view: DashboardView::default(),
            table: ProcessTable::new(sort),
        }
    }

    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        update::apply_snapshot(&mut self.view, &mut self.table, snapshot);
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        self.table.sort_by(column);
        self.view.render_processes(&self.table);
    }
}
