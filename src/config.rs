use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::KeyCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub endpoint: String,
    pub stats_path: String,
    pub poll_interval_ms: u64,
    /// 0 leaves requests without a timeout.
    pub request_timeout_ms: u64,
    pub default_sort: String,
    pub theme: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            endpoint: "http://localhost:8993".to_string(),
            stats_path: "/api/stats".to_string(),
            poll_interval_ms: 3000,
            request_timeout_ms: 0,
            default_sort: "cpu".to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl GeneralConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Defaults to `<cache dir>/vmdash/vmdash.log`.
    pub file: Option<PathBuf>,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: None,
            filter: "vmdash=info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| dirs::cache_dir().map(|p| p.join("vmdash").join("vmdash.log")))
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub help: String,
    pub refresh: String,
    pub cycle_theme: String,
    pub sort_pid: String,
    pub sort_name: String,
    pub sort_cpu: String,
    pub sort_mem: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            help: "?".to_string(),
            refresh: "r".to_string(),
            cycle_theme: "t".to_string(),
            sort_pid: "p".to_string(),
            sort_name: "n".to_string(),
            sort_cpu: "c".to_string(),
            sort_mem: "m".to_string(),
        }
    }
}

/// Parses a keybind string: a single character or a named key.
pub fn parse_key(s: &str) -> Option<KeyCode> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    match s.to_lowercase().as_str() {
        "enter" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" => Some(KeyCode::Char(' ')),
        "backspace" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        s if s.starts_with('f') => s[1..].parse::<u8>().ok().map(KeyCode::F),
        _ => None,
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("vmdash").join("config.toml"))
}

/// A config file that exists but could not be parsed.
#[derive(Debug, Error)]
#[error("invalid config {}: {source}", .path.display())]
pub struct InvalidConfig {
    pub path: PathBuf,
    #[source]
    pub source: toml::de::Error,
}

/// Loads the default config file. Falls back to defaults when the file is
/// missing or invalid; an invalid file is returned alongside so the caller
/// can log it once logging is up.
pub fn load_config() -> (Config, Option<InvalidConfig>) {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => (Config::default(), None),
    }
}

pub fn load_config_from_path(path: &Path) -> (Config, Option<InvalidConfig>) {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return (Config::default(), None);
    };
    match toml::from_str(&contents) {
        Ok(config) => (config, None),
        Err(source) => (
            Config::default(),
            Some(InvalidConfig {
                path: path.to_path_buf(),
                source,
            }),
        ),
    }
}
