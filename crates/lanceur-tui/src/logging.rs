//! Log file setup.
//!
//! The UI owns the terminal, so diagnostics go to a file. `RUST_LOG`
//! overrides the default `info` filter.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{TuiError, TuiResult};

/// Log file used when none is given on the command line.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("lanceur.log")
}

/// Install the global subscriber, appending to `path`.
pub fn init(path: &Path) -> TuiResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))
}
