//! Status Checker State

use status_core::Session;

/// State of the status checker screen
#[derive(Debug, Clone, Default)]
pub struct CheckerState {
    /// Text currently in the input field
    pub input: String,
    /// Current classification and lookup history
    pub session: Session,
    /// Number of checks still waiting for a result
    pub in_flight: usize,
    /// Input of the most recently started check
    pub pending_input: Option<String>,
}

impl CheckerState {
    /// Whether any check is still running
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
