use anyhow::Context;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use status_light_config::AppConfig;
use std::io;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod dispatcher;
mod log_reader;
mod logger;
mod middleware;
mod reducers;
mod state;
mod utils;
mod view_models;
mod views;

use actions::{Action, DebugConsoleAction, GlobalAction};
use background::SharedState;
use middleware::{
    Middleware, check_middleware::CheckMiddleware,
    debug_console_middleware::DebugConsoleMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging_middleware::LoggingMiddleware, text_input_middleware::TextInputMiddleware,
};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting status-light, logging to {}", log_file.display());

    let app_config = AppConfig::load();
    log::debug!("Loaded app config: {:?}", app_config);

    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let shared_state: SharedState = Arc::new(RwLock::new(AppState::new(app_config.clone())));

    // Middleware runs in this order on the background worker
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(CheckMiddleware::new(&app_config)?),
        Box::new(DebugConsoleMiddleware::new(log_file)),
    ];

    let worker = background::spawn_background_worker(
        action_rx,
        action_tx.clone(),
        Arc::clone(&shared_state),
        middleware,
    );

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &shared_state, &action_tx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Make sure the worker stops even if the loop ended with an error
    if result.is_err() {
        let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    }
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    log::info!("Exiting status-light");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared_state: &SharedState,
    action_tx: &Sender<Action>,
) -> anyhow::Result<()> {
    let mut last_height = None;

    loop {
        let running = {
            let state = shared_state
                .read()
                .map_err(|e| anyhow::anyhow!("State lock poisoned: {}", e))?;
            terminal.draw(|frame| views::render(&state, frame.area(), frame))?;
            state.running
        };

        if !running {
            break;
        }

        // Keep the console's scroll bounds in sync with the terminal size
        let height = terminal.size()?.height;
        if last_height != Some(height) {
            last_height = Some(height);
            send(
                action_tx,
                Action::DebugConsole(DebugConsoleAction::SetVisibleHeight(
                    views::debug_console_view::visible_height(height),
                )),
            )?;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    send(action_tx, Action::Global(GlobalAction::KeyPressed(key)))?;
                }
            }
        }
    }

    Ok(())
}

fn send(action_tx: &Sender<Action>, action: Action) -> anyhow::Result<()> {
    action_tx
        .send(action)
        .map_err(|_| anyhow::anyhow!("Background worker is no longer running"))
}
