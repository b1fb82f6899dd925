//! Debug Console screen actions

/// Actions for the Debug Console overlay
#[derive(Debug, Clone)]
pub enum DebugConsoleAction {
    /// Scroll towards newer logs
    ScrollDown,
    /// Scroll towards older logs
    ScrollUp,
    /// Jump to oldest logs
    ScrollToTop,
    /// Jump to newest logs
    ScrollToBottom,
    /// Clear all logs from view
    Clear,
    /// Update visible height (for proper scroll bounds)
    SetVisibleHeight(usize),
    /// Batch update of lines from middleware
    LinesUpdated(Vec<String>),
}
