use crate::actions::{Action, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{Frame, layout::Rect};

pub mod checker_view;
pub mod debug_console_view;
pub mod status_bar;
pub mod traffic_light;

pub use checker_view::CheckerView;
pub use debug_console_view::DebugConsoleView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Checker,
    DebugConsole,
}

/// View trait - defines the interface that all views must implement
///
/// Views live in the view stack as trait objects (`Box<dyn View>`), so the
/// trait must stay object-safe. Views travel inside actions and sit in the
/// shared state, hence `Send + Sync`.
pub trait View: std::fmt::Debug + Send + Sync {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic text input action to this view's specific action.
    ///
    /// The default implementation returns None, indicating the view doesn't
    /// handle text input.
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views render bottom-up so floating views end up on top.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}
