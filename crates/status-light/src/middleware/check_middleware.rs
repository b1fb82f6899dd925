//! Status Check Middleware
//!
//! Runs the resolver for submitted input and handles browser integration:
//! - Submit with empty input resets the light, otherwise starts a check
//! - Each check is an independent tokio task; completions are dispatched in
//!   the order they finish and nothing is cancelled
//! - OpenInBrowser opens the URL of the last successful probe, even when a
//!   later lookup was numeric or a phrase

use crate::actions::{Action, CheckerAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::open_url;
use anyhow::Context;
use status_client::HttpProbe;
use status_core::{Resolution, ResolutionSource, Resolver, StatusProbe, classify};
use status_light_config::AppConfig;
use std::sync::Arc;
use tokio::runtime::Runtime;

const SOURCE: &str = "check";

/// Middleware that resolves and classifies user input
pub struct CheckMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    resolver: Arc<Resolver<Arc<dyn StatusProbe>>>,
    next_id: u64,
}

impl CheckMiddleware {
    /// Create the middleware with an HTTP probe configured from `config`
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let probe = HttpProbe::new(config.probe_timeout(), &config.user_agent)?;
        Self::with_probe(Arc::new(probe))
    }

    /// Create the middleware with any probe implementation
    pub fn with_probe(probe: Arc<dyn StatusProbe>) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self {
            runtime,
            resolver: Arc::new(Resolver::new(probe)),
            next_id: 1,
        })
    }

    fn start_check(&mut self, input: String, dispatcher: &Dispatcher) {
        let id = self.next_id;
        self.next_id += 1;

        log::info!("CheckMiddleware: starting check #{} for {:?}", id, input);
        dispatcher.dispatch(Action::Checker(CheckerAction::Started {
            id,
            input: input.clone(),
        }));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Checking {}", input),
            SOURCE,
        )));

        let resolver = Arc::clone(&self.resolver);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let resolution = resolver.resolve(&input).await;
            let timestamp_ms = chrono::Utc::now().timestamp_millis();

            dispatcher.dispatch(Action::StatusBar(status_message(&input, &resolution)));
            dispatcher.dispatch(Action::Checker(CheckerAction::Completed {
                id,
                input,
                resolution,
                timestamp_ms,
            }));
        });
    }

    fn open_in_browser(&self, url: String, dispatcher: &Dispatcher) {
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            if let Err(e) = open_url(url.clone()).await {
                log::error!("Failed to open URL in browser: {}", e);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    format!("Could not open {}", url),
                    "browser",
                )));
            }
        });
    }
}

/// Status bar feedback for a finished check
fn status_message(input: &str, resolution: &Resolution) -> StatusBarAction {
    let category = classify(resolution.code).category;
    match (resolution.code, resolution.source) {
        (Some(code), ResolutionSource::Url) => {
            StatusBarAction::success(format!("{} responded {} ({})", input, code, category.label()), SOURCE)
        }
        (Some(code), _) => {
            StatusBarAction::success(format!("{} → {} ({})", input, code, category.label()), SOURCE)
        }
        (None, _) => StatusBarAction::warning(format!("Could not resolve {}", input), SOURCE),
    }
}

impl Middleware for CheckMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Checker(CheckerAction::Submit) => {
                let input = state.checker.input.trim().to_string();
                if input.is_empty() {
                    log::debug!("CheckMiddleware: empty input, resetting");
                    dispatcher.dispatch(Action::Checker(CheckerAction::Reset));
                } else {
                    self.start_check(input, dispatcher);
                }
                false
            }

            Action::Checker(CheckerAction::Completed { resolution, .. }) => {
                if let Some(url) = &resolution.url {
                    if state.app_config.open_browser_on_url {
                        self.open_in_browser(url.to_string(), dispatcher);
                    }
                }
                true
            }

            Action::Checker(CheckerAction::OpenInBrowser) => {
                let url = state.checker.session.browser_url().map(str::to_string);
                match url {
                    Some(url) => self.open_in_browser(url, dispatcher),
                    None => dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                        "No checked URL to open",
                        "browser",
                    ))),
                }
                false
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use status_core::ProbeError;
    use status_core::url::Url;
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    struct FixedProbe(Result<u16, ProbeError>);

    #[async_trait]
    impl StatusProbe for FixedProbe {
        async fn probe(&self, _url: &Url) -> Result<u16, ProbeError> {
            self.0.clone()
        }
    }

    fn setup(result: Result<u16, ProbeError>) -> (CheckMiddleware, Dispatcher, Receiver<Action>) {
        let middleware = CheckMiddleware::with_probe(Arc::new(FixedProbe(result))).unwrap();
        let (tx, rx) = mpsc::channel();
        (middleware, Dispatcher::new(tx), rx)
    }

    fn state_with_input(input: &str) -> AppState {
        let mut state = AppState::default();
        state.checker.input = input.to_string();
        state
    }

    /// Collect dispatched actions until a completion arrives
    fn wait_for_completion(rx: &Receiver<Action>) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = rx.recv_timeout(Duration::from_secs(5)) {
            let done = matches!(action, Action::Checker(CheckerAction::Completed { .. }));
            actions.push(action);
            if done {
                break;
            }
        }
        actions
    }

    #[test]
    fn test_empty_submit_resets_without_checking() {
        let (mut mw, dispatcher, rx) = setup(Ok(200));

        let forwarded = mw.handle(
            &Action::Checker(CheckerAction::Submit),
            &state_with_input("   "),
            &dispatcher,
        );

        assert!(!forwarded);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Checker(CheckerAction::Reset))
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_submit_starts_and_completes_check() {
        let (mut mw, dispatcher, rx) = setup(Ok(503));

        mw.handle(
            &Action::Checker(CheckerAction::Submit),
            &state_with_input(" https://example.com "),
            &dispatcher,
        );

        let actions = wait_for_completion(&rx);
        assert!(matches!(
            actions.first(),
            Some(Action::Checker(CheckerAction::Started { id: 1, input })) if input == "https://example.com"
        ));
        match actions.last() {
            Some(Action::Checker(CheckerAction::Completed {
                id, resolution, ..
            })) => {
                assert_eq!(*id, 1);
                assert_eq!(resolution.code, Some(503));
                assert!(resolution.was_url);
                assert_eq!(
                    resolution.url.as_ref().map(|url| url.as_str()),
                    Some("https://example.com/")
                );
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_check_ids_increase() {
        let (mut mw, dispatcher, rx) = setup(Ok(200));
        let state = state_with_input("404");

        mw.handle(&Action::Checker(CheckerAction::Submit), &state, &dispatcher);
        wait_for_completion(&rx);
        mw.handle(&Action::Checker(CheckerAction::Submit), &state, &dispatcher);
        let actions = wait_for_completion(&rx);

        assert!(matches!(
            actions.last(),
            Some(Action::Checker(CheckerAction::Completed { id: 2, .. }))
        ));
    }

    #[test]
    fn test_open_without_probed_url_reports_info() {
        let (mut mw, dispatcher, rx) = setup(Ok(200));

        let forwarded = mw.handle(
            &Action::Checker(CheckerAction::OpenInBrowser),
            &AppState::default(),
            &dispatcher,
        );

        assert!(!forwarded);
        assert!(matches!(rx.try_recv(), Ok(Action::StatusBar(_))));
    }

    #[test]
    fn test_status_message_kinds() {
        use crate::state::StatusKind;

        let unresolved = status_message("teapot", &Resolution::unresolved());
        assert!(matches!(
            unresolved,
            StatusBarAction::Push {
                kind: StatusKind::Warning,
                ..
            }
        ));
    }
}
