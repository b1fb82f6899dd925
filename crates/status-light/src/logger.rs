//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/status-light/ on Linux)
//!
//! The debug console reads from this file when opened.

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        status_light_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;

/// Map a RUST_LOG value onto a level; unknown values use the default
fn parse_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => DEFAULT_LEVEL,
    }
}

/// Level from an optional RUST_LOG value
fn level_from_env(value: Option<&str>) -> LevelFilter {
    value.map(parse_level).unwrap_or(DEFAULT_LEVEL)
}

/// Initialize file-based logging
///
/// Returns the path to the log file for use by the debug console.
pub fn init() -> Result<PathBuf> {
    let log_file = log_file_path();

    let level = level_from_env(std::env::var("RUST_LOG").ok().as_deref());

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    WriteLogger::init(level, config, file).context("Failed to initialize logger")?;

    Ok(log_file)
}
