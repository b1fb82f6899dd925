//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! ## Layer 1: Priority Keys
//! Keys that work regardless of context (Ctrl+C, Ctrl+L, Ctrl+O, Esc).
//!
//! ## Layer 2: Text input
//! Views with the TEXT_INPUT capability receive printable characters,
//! Backspace, Ctrl+U and Enter as generic text input actions.
//!
//! ## Layer 3: Scrolling
//! Views with the SCROLL_VERTICAL capability (the debug console) get
//! vim-style and arrow-key scrolling.

use crate::actions::{Action, CheckerAction, DebugConsoleAction, GlobalAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::{DebugConsoleView, ViewId};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key event into zero or one action
    fn translate(key: KeyEvent, state: &AppState) -> Option<Action> {
        let view = state.active_view();
        let view_id = view.map(|v| v.view_id());
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // LAYER 1: Priority keys
        if ctrl {
            match key.code {
                KeyCode::Char('c') => return Some(Action::Global(GlobalAction::Quit)),
                KeyCode::Char('l') => {
                    return Some(if view_id == Some(ViewId::DebugConsole) {
                        Action::Global(GlobalAction::Close)
                    } else {
                        Action::Global(GlobalAction::PushView(Box::new(DebugConsoleView::new())))
                    });
                }
                KeyCode::Char('o') => return Some(Action::Checker(CheckerAction::OpenInBrowser)),
                _ => {}
            }
        }

        if key.code == KeyCode::Esc {
            return Some(if capabilities.accepts_text_input() {
                Action::TextInput(TextInputAction::Escape)
            } else {
                Action::Global(GlobalAction::Close)
            });
        }

        // LAYER 2: Text input
        if capabilities.accepts_text_input() {
            let input = match key.code {
                KeyCode::Char('u') if ctrl => Some(TextInputAction::ClearLine),
                KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    Some(TextInputAction::Char(c))
                }
                KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
                    Some(TextInputAction::ClearLine)
                }
                KeyCode::Backspace => Some(TextInputAction::Backspace),
                KeyCode::Enter => Some(TextInputAction::Confirm),
                _ => None,
            };
            return input.map(Action::TextInput);
        }

        // LAYER 3: Scrolling
        if capabilities.supports_vertical_scroll() {
            let scroll = match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(DebugConsoleAction::ScrollUp),
                KeyCode::Down | KeyCode::Char('j') => Some(DebugConsoleAction::ScrollDown),
                KeyCode::Home | KeyCode::Char('g') => Some(DebugConsoleAction::ScrollToTop),
                KeyCode::End | KeyCode::Char('G') => Some(DebugConsoleAction::ScrollToBottom),
                KeyCode::Char('c') => Some(DebugConsoleAction::Clear),
                KeyCode::Char('q') => return Some(Action::Global(GlobalAction::Close)),
                _ => None,
            };
            return scroll.map(Action::DebugConsole);
        }

        None
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            match Self::translate(*key, state) {
                Some(translated) => dispatcher.dispatch(translated),
                None => log::debug!("KeyboardMiddleware: unhandled key {:?}", key.code),
            }
            // Raw key events never reach the reducer
            return false;
        }

        true
    }
}
