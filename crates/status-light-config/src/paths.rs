//! Data directory paths
//!
//! Uses platform directories via `dirs` crate. The cache directory holds
//! release-build log files:
//! - Linux: `~/.cache/status-light/`
//! - macOS: `~/Library/Caches/status-light/`
//! - Windows: `%LOCALAPPDATA%\status-light\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "status-light";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }
}
