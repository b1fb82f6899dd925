//! Application State

use crate::views::{CheckerView, View};
use status_light_config::AppConfig;
use status_light_theme::Theme;

use super::{CheckerState, DebugConsoleState, StatusBarState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,
    pub checker: CheckerState,
    pub debug_console: DebugConsoleState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    /// Application configuration
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(CheckerView::new())],
            checker: CheckerState::default(),
            debug_console: DebugConsoleState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            app_config,
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
