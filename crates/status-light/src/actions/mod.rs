//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - Generic text input actions that the active view translates
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular reducer

pub mod checker;
pub mod debug_console;
pub mod global;
pub mod status_bar;
pub mod text_input;

pub use checker::CheckerAction;
pub use debug_console::DebugConsoleAction;
pub use global::GlobalAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    /// Global application actions
    Global(GlobalAction),

    /// Status checker screen actions
    Checker(CheckerAction),
    /// Status Bar actions
    StatusBar(StatusBarAction),
    /// Debug Console actions
    DebugConsole(DebugConsoleAction),
}
