use serde::Deserialize;

/// One polled payload from the metrics endpoint.
///
/// Percentages are on a 0-100 scale, sizes in bytes and network rates in
/// bytes per second. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    pub cpu_usage: f64,
    #[serde(default)]
    pub cpu_model: Option<String>,
    #[serde(default)]
    pub cpu_cores: Option<u32>,
    #[serde(default)]
    pub cpu_threads: Option<u32>,
    pub memory_usage: f64,
    pub memory_used: u64,
    pub memory_total: u64,
    #[serde(default)]
    pub memory_type: Option<String>,
    pub disk_usage: f64,
    pub disk_used: u64,
    pub disk_total: u64,
    #[serde(default)]
    pub disk_fstype: Option<String>,
    pub net_in_rate: u64,
    pub net_out_rate: u64,
    /// `None` (absent or `null`) keeps the previously received list.
    #[serde(default)]
    pub processes: Option<Vec<Process>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Process {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub memory_rss: u64,
}

impl Snapshot {
    /// The backend reports an empty model string when it could not read one.
    pub fn cpu_model(&self) -> Option<&str> {
        non_empty(self.cpu_model.as_deref())
    }

    pub fn memory_type(&self) -> Option<&str> {
        non_empty(self.memory_type.as_deref())
    }

    pub fn disk_fstype(&self) -> Option<&str> {
        non_empty(self.disk_fstype.as_deref())
    }

    /// Both counts must be known and non-zero.
    pub fn cores_and_threads(&self) -> Option<(u32, u32)> {
        match (self.cpu_cores, self.cpu_threads) {
            (Some(cores), Some(threads)) if cores > 0 && threads > 0 => Some((cores, threads)),
            _ => None,
        }
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "cpu_usage": 12.5,
        "cpu_model": "AMD Ryzen 7 5800X",
        "cpu_cores": 8,
        "cpu_threads": 16,
        "memory_total": 34359738368,
        "memory_type": "DDR4",
        "memory_used": 8589934592,
        "memory_usage": 25,
        "disk_total": 1000000000000,
        "disk_used": 250000000000,
        "disk_usage": 25,
        "disk_fstype": "ext4",
        "net_in_rate": 2048,
        "net_out_rate": 0,
        "processes": [
            {"pid": 1, "name": "init", "cpu_percent": 0.1, "memory_percent": 0.05, "memory_rss": 4096}
        ]
    }"#;

    #[test]
    fn parses_full_payload() {
        let snapshot: Snapshot = serde_json::from_str(FULL).unwrap();
        assert_eq!(snapshot.cpu_model(), Some("AMD Ryzen 7 5800X"));
        assert_eq!(snapshot.cores_and_threads(), Some((8, 16)));
        assert_eq!(snapshot.memory_used, 8_589_934_592);
        assert_eq!(snapshot.processes.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn null_processes_means_absent() {
        let body = r#"{"cpu_usage":1,"memory_usage":2,"memory_used":3,"memory_total":4,
            "disk_usage":5,"disk_used":6,"disk_total":7,"net_in_rate":8,"net_out_rate":9,
            "processes":null}"#;
        let snapshot: Snapshot = serde_json::from_str(body).unwrap();
        assert!(snapshot.processes.is_none());
        assert!(snapshot.cpu_model().is_none());
    }

    #[test]
    fn empty_descriptions_and_zero_counts_are_absent() {
        let body = r#"{"cpu_usage":1,"cpu_model":"","cpu_cores":0,"cpu_threads":4,
            "memory_usage":2,"memory_used":3,"memory_total":4,"memory_type":"",
            "disk_usage":5,"disk_used":6,"disk_total":7,"disk_fstype":"",
            "net_in_rate":8,"net_out_rate":9}"#;
        let snapshot: Snapshot = serde_json::from_str(body).unwrap();
        assert!(snapshot.cpu_model().is_none());
        assert!(snapshot.memory_type().is_none());
        assert!(snapshot.disk_fstype().is_none());
        assert!(snapshot.cores_and_threads().is_none());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let body = r#"{"cpu_usage":1}"#;
        assert!(serde_json::from_str::<Snapshot>(body).is_err());
    }
}
