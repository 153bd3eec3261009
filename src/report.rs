//! Plain-text rendering of a dashboard view, used by `--once`.

use crate::format::truncate_unicode;
use crate::process_table::{ProcessRow, SortState};
use crate::view::metric::{Bar, BarLevel};
use crate::view::{DashboardView, PLACEHOLDER};

const NAME_WIDTH: usize = 24;

pub fn render_report(endpoint: &str, view: &DashboardView, sort: SortState) -> String {
    let mut lines = vec![format!("vmdash @ {endpoint}"), String::new()];

    lines.push(gauge_line("CPU", &view.cpu.value, view.cpu.bar));
    lines.push(detail_line("model", &view.cpu.model));
    lines.push(detail_line("cores", &view.cpu.cores));

    lines.push(gauge_line("Memory", &view.memory.value, view.memory.bar));
    lines.push(detail_line(
        "used",
        &format!("{} / {}", view.memory.used, view.memory.total),
    ));
    lines.push(detail_line("type", &view.memory.memory_type));

    lines.push(gauge_line("Disk", &view.disk.value, view.disk.bar));
    lines.push(detail_line(
        "used",
        &format!("{} / {}", view.disk.used, view.disk.total),
    ));
    lines.push(detail_line("fs", &view.disk.fstype));

    lines.push("Network".to_string());
    lines.push(detail_line("in", &view.network.inbound));
    lines.push(detail_line("out", &view.network.outbound));

    lines.push(String::new());
    lines.push(format!(
        "Processes ({}, sorted by {} {})",
        view.process_rows.len(),
        sort.column.label(),
        if sort.descending { "desc" } else { "asc" }
    ));
    lines.push(table_line("PID", "NAME", "CPU", "MEMORY"));
    lines.extend(view.process_rows.iter().map(row_line));

    lines.join("\n")
}

fn gauge_line(title: &str, value: &str, bar: Bar) -> String {
    let tag = match bar.level {
        BarLevel::Normal => "",
        BarLevel::Warning => "  warning",
        BarLevel::Danger => "  danger",
    };
    if value == PLACEHOLDER {
        format!("{title:<8} {value}")
    } else {
        format!("{title:<8} {value}%{tag}")
    }
}

fn detail_line(label: &str, value: &str) -> String {
    format!("  {label:<6} {value}")
}

fn table_line(pid: &str, name: &str, cpu: &str, memory: &str) -> String {
    format!("{pid:<8} {name:<NAME_WIDTH$} {cpu:<9} {memory}")
}

fn row_line(row: &ProcessRow) -> String {
    let name = truncate_unicode(&row.name, NAME_WIDTH);
    table_line(&row.pid, &name, &row.cpu, &row.memory)
}
