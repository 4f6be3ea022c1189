//! Log setup for the terminal runner.
//!
//! The alternate screen owns stdout and stderr, so records only go to a file.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Install the global logger writing to `path`. `RUST_LOG` sets the filter,
/// defaulting to `info`.
pub fn init_file_logger(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(())
}

/// Install the logger when a path is configured; otherwise leave logging off.
pub fn init(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => init_file_logger(path),
        None => Ok(()),
    }
}
