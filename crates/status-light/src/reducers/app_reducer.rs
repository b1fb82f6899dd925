use crate::actions::{Action, GlobalAction};
use crate::reducers::{checker_reducer, debug_console_reducer, status_bar_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => reduce_global(&mut state, global),
        Action::Checker(checker_action) => {
            state.checker = checker_reducer::reduce_checker(state.checker, checker_action);
        }
        Action::StatusBar(status_action) => {
            state.status_bar =
                status_bar_reducer::reduce_status_bar(state.status_bar, status_action);
        }
        Action::DebugConsole(console_action) => {
            state.debug_console =
                debug_console_reducer::reduce_debug_console(state.debug_console, console_action);
        }
        // Translated by middleware before reaching here
        Action::TextInput(_) => {}
    }

    state
}

fn reduce_global(state: &mut AppState, action: &GlobalAction) {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(view) => {
            log::debug!("Pushing view onto stack: {:?}", view.view_id());
            state.view_stack.push(view.clone());
        }
        GlobalAction::Close => {
            // The base view always stays
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Cannot close the only view in the stack");
            }
        }
        GlobalAction::KeyPressed(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CheckerAction;
    use crate::views::{DebugConsoleView, ViewId};
    use status_core::{Light, Resolution, ResolutionSource};

    fn completed(id: u64, input: &str, code: Option<u64>) -> Action {
        Action::Checker(CheckerAction::Completed {
            id,
            input: input.to_string(),
            resolution: Resolution {
                code,
                source: if code.is_some() {
                    ResolutionSource::Numeric
                } else {
                    ResolutionSource::Unresolved
                },
                was_url: false,
                url: None,
            },
            timestamp_ms: id as i64,
        })
    }

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_close_keeps_base_view() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Close));
        assert_eq!(state.view_stack.len(), 1);
        assert_eq!(state.active_view().map(|v| v.view_id()), Some(ViewId::Checker));
    }

    #[test]
    fn test_push_and_close_console() {
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::PushView(Box::new(DebugConsoleView::new()))),
        );
        assert_eq!(
            state.active_view().map(|v| v.view_id()),
            Some(ViewId::DebugConsole)
        );

        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert_eq!(state.active_view().map(|v| v.view_id()), Some(ViewId::Checker));
    }

    #[test]
    fn test_history_is_capped_through_the_app() {
        let mut state = AppState::default();
        for i in 0..15u64 {
            state = reduce(state, &completed(i, "200", Some(200 + i)));
        }

        let history = state.checker.session.history();
        assert_eq!(history.len(), 10);
        assert_eq!(history.latest().map(|e| e.code()), Some(214));
        assert_eq!(state.checker.session.light(), Light::Green);
    }
}
