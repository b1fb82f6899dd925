//! Debug Console Middleware
//!
//! Manages the FileLogReader lifecycle with its own polling thread:
//! - Initialize reader and start polling thread when debug console is opened
//! - Polling thread dispatches line updates at regular intervals
//! - Stop polling thread when console is closed

use crate::actions::{Action, DebugConsoleAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::log_reader::FileLogReader;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::ViewId;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const MAX_LINES: usize = 10_000;

/// Middleware for managing debug console log reading
pub struct DebugConsoleMiddleware {
    log_file: PathBuf,
    /// Shared reader - accessed by both middleware and polling thread
    reader: Arc<Mutex<Option<FileLogReader>>>,
    /// Cleared to ask the polling thread to exit
    polling_active: Arc<AtomicBool>,
    /// Handle to the polling thread
    poll_thread: Option<JoinHandle<()>>,
}

impl DebugConsoleMiddleware {
    pub fn new(log_file: PathBuf) -> Self {
        Self {
            log_file,
            reader: Arc::new(Mutex::new(None)),
            polling_active: Arc::new(AtomicBool::new(false)),
            poll_thread: None,
        }
    }

    fn is_console_visible(state: &AppState) -> bool {
        state
            .active_view()
            .is_some_and(|view| view.view_id() == ViewId::DebugConsole)
    }

    /// Start the polling thread (no-op if it is already running)
    fn start_polling(&mut self, dispatcher: &Dispatcher) {
        // Claim the flag; someone else already started polling
        if self.polling_active.swap(true, Ordering::SeqCst) {
            return;
        }

        // Open the reader once and push what is already in the file
        if let Ok(mut reader_guard) = self.reader.lock() {
            if reader_guard.is_none() {
                let mut reader = FileLogReader::new(self.log_file.clone(), MAX_LINES);
                if let Err(e) = reader.read_initial() {
                    log::warn!("Failed to read log file: {}", e);
                }
                *reader_guard = Some(reader);
            }
            if let Some(reader) = reader_guard.as_ref() {
                dispatcher.dispatch(Action::DebugConsole(DebugConsoleAction::LinesUpdated(
                    reader.lines().to_vec(),
                )));
            }
        }

        // Spawn polling thread
        let reader = Arc::clone(&self.reader);
        let polling_active = Arc::clone(&self.polling_active);
        let dispatcher = dispatcher.clone();

        self.poll_thread = Some(thread::spawn(move || {
            let poll_interval = Duration::from_millis(100);

            while polling_active.load(Ordering::SeqCst) {
                // Only dispatch when the file grew
                let lines = reader.lock().ok().and_then(|mut guard| {
                    let reader = guard.as_mut()?;
                    match reader.poll_new_lines() {
                        Ok(new_count) if new_count > 0 => Some(reader.lines().to_vec()),
                        _ => None,
                    }
                });

                if let Some(lines) = lines {
                    dispatcher.dispatch(Action::DebugConsole(DebugConsoleAction::LinesUpdated(
                        lines,
                    )));
                }

                thread::sleep(poll_interval);
            }
        }));
    }

    /// Stop the polling thread and wait for it to exit
    fn stop_polling(&mut self) {
        self.polling_active.store(false, Ordering::SeqCst);

        // The thread notices the flag within one poll interval
        if let Some(handle) = self.poll_thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for DebugConsoleMiddleware {
    fn drop(&mut self) {
        self.stop_polling();
    }
}

impl Middleware for DebugConsoleMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            // Console opened: start tailing the log
            Action::Global(GlobalAction::PushView(view))
                if view.view_id() == ViewId::DebugConsole =>
            {
                self.start_polling(dispatcher);
                true
            }

            // Console closed: stop tailing
            Action::Global(GlobalAction::Close) if Self::is_console_visible(state) => {
                self.stop_polling();
                true
            }

            Action::DebugConsole(DebugConsoleAction::Clear) => {
                if let Ok(mut reader_guard) = self.reader.lock() {
                    if let Some(reader) = reader_guard.as_mut() {
                        reader.clear();
                    }
                }
                // Reducer clears the visible lines
                true
            }

            _ => true,
        }
    }
}
