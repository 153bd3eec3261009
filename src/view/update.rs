use crate::format::format_bytes;
use crate::metrics::snapshot::Snapshot;
use crate::process_table::ProcessTable;

use super::DashboardView;
use super::metric::{update_bar, update_metric};

/// Maps one snapshot onto the view.
///
/// Gauges, sizes and network rates are always written. Descriptive text is
/// written only when the snapshot carries it, so earlier text survives a
/// sparse payload. A snapshot without `processes` leaves the table alone.
pub fn apply_snapshot(view: &mut DashboardView, table: &mut ProcessTable, snapshot: Snapshot) {
    let cpu = &mut view.cpu;
    update_metric(&mut cpu.value, snapshot.cpu_usage);
    update_bar(&mut cpu.bar, snapshot.cpu_usage);
    if let Some(model) = snapshot.cpu_model() {
        update_metric(&mut cpu.model, model);
    }
    if let Some((cores, threads)) = snapshot.cores_and_threads() {
        update_metric(&mut cpu.cores, format!("{cores} cores / {threads} threads"));
    }

    let memory = &mut view.memory;
    update_metric(&mut memory.value, snapshot.memory_usage);
    update_bar(&mut memory.bar, snapshot.memory_usage);
    update_metric(&mut memory.used, format_bytes(snapshot.memory_used, false));
    update_metric(&mut memory.total, format_bytes(snapshot.memory_total, false));
    if let Some(memory_type) = snapshot.memory_type() {
        update_metric(&mut memory.memory_type, memory_type);
    }

    let disk = &mut view.disk;
    update_metric(&mut disk.value, snapshot.disk_usage);
    update_bar(&mut disk.bar, snapshot.disk_usage);
    update_metric(&mut disk.used, format_bytes(snapshot.disk_used, false));
    update_metric(&mut disk.total, format_bytes(snapshot.disk_total, false));
    if let Some(fstype) = snapshot.disk_fstype() {
        update_metric(&mut disk.fstype, fstype);
    }

    update_metric(&mut view.network.inbound, format_bytes(snapshot.net_in_rate, true));
    update_metric(&mut view.network.outbound, format_bytes(snapshot.net_out_rate, true));

    if let Some(processes) = snapshot.processes {
        table.set_processes(processes);
        view.render_processes(table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::snapshot::Process;
    use crate::view::metric::BarLevel;
    use crate::view::{Dashboard, PLACEHOLDER};

    fn process(pid: u32, name: &str, cpu: f64, mem: f64, rss: u64) -> Process {
        Process {
            pid,
            name: name.to_string(),
            cpu_percent: cpu,
            memory_percent: mem,
            memory_rss: rss,
        }
    }

    fn sample() -> Snapshot {
        Snapshot {
            cpu_usage: 95.0,
            cpu_model: None,
            cpu_cores: None,
            cpu_threads: None,
            memory_usage: 50.0,
            memory_used: 500_000_000,
            memory_total: 1_000_000_000,
            memory_type: None,
            disk_usage: 40.0,
            disk_used: 1,
            disk_total: 2,
            disk_fstype: None,
            net_in_rate: 2048,
            net_out_rate: 0,
            processes: Some(vec![
                process(1, "a", 10.0, 5.0, 1024),
                process(2, "b", 20.0, 1.0, 2048),
            ]),
        }
    }

    #[test]
    fn end_to_end_sample() {
        let mut dashboard = Dashboard::default();
        dashboard.apply_snapshot(sample());

        let view = &dashboard.view;
        assert_eq!(view.cpu.value, "95");
        assert_eq!(view.cpu.bar.level, BarLevel::Danger);
        assert_eq!(view.memory.bar.level, BarLevel::Normal);
        assert_eq!(view.memory.used, "476.84 MB");
        assert_eq!(view.memory.total, "953.67 MB");
        assert_eq!(view.disk.used, "1 B");
        assert_eq!(view.network.inbound, "2 KB/s");
        assert_eq!(view.network.outbound, "0 B");

        let order: Vec<&str> = view.process_rows.iter().map(|r| r.pid.as_str()).collect();
        assert_eq!(order, vec!["2", "1"]);
        assert_eq!(view.process_rows[1].memory, "5% (1 KB)");
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut dashboard = Dashboard::default();
        dashboard.apply_snapshot(sample());
        let first = dashboard.view.clone();
        dashboard.apply_snapshot(sample());
        assert_eq!(dashboard.view, first);
    }

    #[test]
    fn missing_processes_keep_previous_table() {
        let mut dashboard = Dashboard::default();
        dashboard.apply_snapshot(sample());
        let rows = dashboard.view.process_rows.clone();

        let mut sparse = sample();
        sparse.processes = None;
        sparse.cpu_usage = 10.0;
        dashboard.apply_snapshot(sparse);

        assert_eq!(dashboard.view.process_rows, rows);
        assert_eq!(dashboard.table.len(), 2);
        assert_eq!(dashboard.view.cpu.value, "10");
    }

    #[test]
    fn empty_process_list_clears_table() {
        let mut dashboard = Dashboard::default();
        dashboard.apply_snapshot(sample());

        let mut empty = sample();
        empty.processes = Some(Vec::new());
        dashboard.apply_snapshot(empty);

        assert!(dashboard.view.process_rows.is_empty());
    }

    #[test]
    fn descriptive_text_survives_sparse_snapshot() {
        let mut dashboard = Dashboard::default();
        assert_eq!(dashboard.view.cpu.model, PLACEHOLDER);

        let mut full = sample();
        full.cpu_model = Some("Xeon E5".to_string());
        full.cpu_cores = Some(4);
        full.cpu_threads = Some(8);
        full.memory_type = Some("DDR4".to_string());
        full.disk_fstype = Some("xfs".to_string());
        dashboard.apply_snapshot(full);

        assert_eq!(dashboard.view.cpu.model, "Xeon E5");
        assert_eq!(dashboard.view.cpu.cores, "4 cores / 8 threads");

        let mut sparse = sample();
        sparse.cpu_model = Some(String::new());
        dashboard.apply_snapshot(sparse);

        assert_eq!(dashboard.view.cpu.model, "Xeon E5");
        assert_eq!(dashboard.view.cpu.cores, "4 cores / 8 threads");
        assert_eq!(dashboard.view.memory.memory_type, "DDR4");
        assert_eq!(dashboard.view.disk.fstype, "xfs");
    }

    #[test]
    fn sort_rerenders_rows_from_held_list() {
        let mut dashboard = Dashboard::default();
        dashboard.apply_snapshot(sample());

        dashboard.sort_by(crate::process_table::SortColumn::Name);
        let order: Vec<&str> = dashboard
            .view
            .process_rows
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(order, vec!["b", "a"]);
    }
}
