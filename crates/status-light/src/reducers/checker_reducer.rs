//! Status Checker Reducer

use crate::actions::CheckerAction;
use crate::state::CheckerState;

/// Reduce status checker state
pub fn reduce_checker(mut state: CheckerState, action: &CheckerAction) -> CheckerState {
    match action {
        CheckerAction::Char(c) => {
            state.input.push(*c);
        }
        CheckerAction::Backspace => {
            state.input.pop();
        }
        CheckerAction::ClearInput => {
            state.input.clear();
        }
        CheckerAction::Started { id, input } => {
            log::debug!("Check #{} started for {:?}", id, input);
            state.in_flight += 1;
            state.pending_input = Some(input.clone());
        }
        CheckerAction::Completed {
            id,
            input,
            resolution,
            timestamp_ms,
        } => {
            log::debug!("Applying check #{} for {:?}: {:?}", id, input, resolution);
            state.session = state
                .session
                .apply(input, resolution.clone(), *timestamp_ms);
            state.in_flight = state.in_flight.saturating_sub(1);
            if state.in_flight == 0 {
                state.pending_input = None;
            }
        }
        CheckerAction::Reset => {
            state.session = state.session.reset();
        }
        // Handled by CheckMiddleware
        CheckerAction::Submit | CheckerAction::OpenInBrowser => {}
    }
    state
}
