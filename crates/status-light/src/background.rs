//! Background worker thread that processes actions
//!
//! - Main thread handles rendering and user input only
//! - Background thread runs the middleware chain (probes, browser, log tailing)
//!   and then the root reducer, writing the new state into [`SharedState`]
//!
//! Reducing on the worker keeps every action ordered behind the ones before
//! it, so middleware always observes the state produced by earlier actions.
//! Actions dispatched by middleware via Dispatcher re-enter the middleware chain.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// State shared between the render loop (reads) and the worker (writes)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create Dispatcher for middleware
/// - `state`: shared state, read by middleware and replaced by the reducer
/// - `middleware`: the middleware chain
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    while let Ok(action) = action_rx.recv() {
        let quit = matches!(action, Action::Global(GlobalAction::Quit));

        // Snapshot so middleware never holds the lock across its work
        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        if run_chain(&mut middleware, &action, &current_state, &dispatcher) {
            match state.write() {
                Ok(mut guard) => {
                    let previous = std::mem::take(&mut *guard);
                    *guard = reduce(previous, &action);
                }
                Err(e) => log::error!("Failed to write shared state: {}", e),
            }
        }

        if quit {
            log::info!("Background worker received shutdown signal");
            break;
        }
    }

    log::info!("Background worker stopped");
}

/// Run an action through the chain; false if some middleware consumed it
fn run_chain(
    middleware: &mut [Box<dyn Middleware>],
    action: &Action,
    state: &AppState,
    dispatcher: &Dispatcher,
) -> bool {
    middleware
        .iter_mut()
        .all(|mw| mw.handle(action, state, dispatcher))
}
