use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

/// Installs a file-backed subscriber. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr. `RUST_LOG` overrides `filter`.
pub fn init_file_logging(path: &Path, filter: &str) -> Result<()> {
    let file = open_log_file(path)?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .map_err(|e| eyre!("invalid log filter `{filter}`: {e}"))?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
