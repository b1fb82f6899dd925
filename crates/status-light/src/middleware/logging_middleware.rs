use crate::actions::{Action, DebugConsoleAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Log lines would feed back into the console and log themselves again
        if !matches!(
            action,
            Action::DebugConsole(DebugConsoleAction::LinesUpdated(_))
        ) {
            log::debug!("Action: {:?}", action);
        }

        true
    }
}
