//! Status checker actions

use status_core::Resolution;

/// Actions for the status checker screen
#[derive(Debug, Clone)]
pub enum CheckerAction {
    // Input editing (translated from TextInputAction)
    Char(char),
    Backspace,
    ClearInput,

    /// Check the current input (Enter)
    Submit,
    /// A check was handed to the resolver
    Started { id: u64, input: String },
    /// A check finished; applied in completion order
    Completed {
        id: u64,
        input: String,
        resolution: Resolution,
        /// Completion time, milliseconds since the Unix epoch
        timestamp_ms: i64,
    },
    /// Back to the neutral light (empty input submitted)
    Reset,
    /// Open the last checked URL in the system browser
    OpenInBrowser,
}
