pub mod app_reducer;
pub mod checker_reducer;
pub mod debug_console_reducer;
pub mod status_bar_reducer;
