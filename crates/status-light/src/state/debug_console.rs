//! Debug Console State

/// Debug console state
#[derive(Debug, Clone, Default)]
pub struct DebugConsoleState {
    /// Current log lines (updated by middleware when console is visible)
    pub lines: Vec<String>,
    /// Scroll offset (0 = bottom/newest)
    pub scroll_offset: usize,
    /// Visible height for scroll bounds
    pub visible_height: usize,
}

impl DebugConsoleState {
    /// Largest valid scroll offset for the current content
    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.visible_height)
    }
}
