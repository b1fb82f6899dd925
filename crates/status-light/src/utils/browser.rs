//! Browser utilities
//!
//! Functions for opening URLs in the system's default browser.

use tokio::process::Command;

/// Build the platform opener command for `url`
///
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `explorer`, which takes the URL as one argument; `cmd /C start`
///   would split it at `&`
fn opener(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    let program = "open";

    #[cfg(target_os = "windows")]
    let program = "explorer";

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let program = "xdg-open";

    let mut command = Command::new(program);
    command.arg(url);
    command
}

/// Open a URL in the system's default browser
pub async fn open_url(url: String) -> std::io::Result<()> {
    opener(&url)
        .spawn()
        .map(|_| log::info!("Opened {} in browser", url))
}
