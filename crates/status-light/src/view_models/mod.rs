pub mod checker_view_model;
pub mod debug_console_view_model;
pub mod status_bar;

pub use checker_view_model::{CheckerViewModel, LampViewModel, LayoutMode};
pub use debug_console_view_model::DebugConsoleViewModel;
pub use status_bar::StatusBarViewModel;
