//! Debug Console Reducer

use crate::actions::DebugConsoleAction;
use crate::state::DebugConsoleState;

/// Reducer for debug console state.
pub fn reduce_debug_console(
    mut state: DebugConsoleState,
    action: &DebugConsoleAction,
) -> DebugConsoleState {
    let max_scroll = state.max_scroll();

    match action {
        DebugConsoleAction::ScrollDown => {
            // Towards newer logs (offset 0 is the bottom)
            state.scroll_offset = state.scroll_offset.min(max_scroll).saturating_sub(1);
        }
        DebugConsoleAction::ScrollUp => {
            if state.scroll_offset < max_scroll {
                state.scroll_offset += 1;
            }
        }
        DebugConsoleAction::ScrollToTop => {
            state.scroll_offset = max_scroll;
        }
        DebugConsoleAction::ScrollToBottom => {
            state.scroll_offset = 0;
        }
        DebugConsoleAction::Clear => {
            state.lines.clear();
            state.scroll_offset = 0;
        }
        DebugConsoleAction::SetVisibleHeight(height) => {
            state.visible_height = *height;
            state.scroll_offset = state.scroll_offset.min(state.max_scroll());
        }
        DebugConsoleAction::LinesUpdated(lines) => {
            state.lines = lines.clone();
            state.scroll_offset = state.scroll_offset.min(state.max_scroll());
        }
    }
    state
}
