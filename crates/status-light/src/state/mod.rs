//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod checker;
mod debug_console;
mod status_bar;

pub use app::AppState;
pub use checker::CheckerState;
pub use debug_console::DebugConsoleState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
