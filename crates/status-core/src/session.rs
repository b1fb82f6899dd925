//! Lookup session
//!
//! Holds the current classification and the rolling history for one UI
//! session. Updates consume the session and return the new one.

use crate::category::{Classification, Light, classify};
use crate::history::{History, StatusEntry};
use crate::resolver::{Resolution, ResolutionSource};
use url::Url;

/// The most recent completed lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Input as typed by the user (trimmed)
    pub input: String,
    pub code: Option<u64>,
    pub classification: Classification,
    pub source: ResolutionSource,
    pub was_url: bool,
    /// Parsed URL that answered the probe
    pub url: Option<Url>,
}

impl Lookup {
    /// Normalized URL of a successful probe, never the raw input
    pub fn browser_url(&self) -> Option<&str> {
        self.url.as_ref().map(Url::as_str)
    }
}

/// Session state: current lookup plus history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<Lookup>,
    history: History,
    /// URL of the most recent successful check; survives later lookups and reset
    last_url: Option<Url>,
}

impl Session {
    /// Record a completed resolution
    ///
    /// Only resolved codes are appended to the history; an unresolved input
    /// still becomes the current (invalid) lookup.
    #[must_use]
    pub fn apply(self, input: &str, resolution: Resolution, timestamp_ms: i64) -> Self {
        let classification = classify(resolution.code);
        let history = match resolution.code {
            Some(code) => self.history.append(StatusEntry::new(code, timestamp_ms)),
            None => self.history,
        };
        let last_url = resolution.url.clone().or(self.last_url);

        Self {
            current: Some(Lookup {
                input: input.trim().to_string(),
                code: resolution.code,
                classification,
                source: resolution.source,
                was_url: resolution.was_url,
                url: resolution.url,
            }),
            history,
            last_url,
        }
    }

    /// Back to the neutral state; history is kept
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            current: None,
            ..self
        }
    }

    pub fn current(&self) -> Option<&Lookup> {
        self.current.as_ref()
    }

    /// URL for the "open in browser" action: the last successful probe
    pub fn browser_url(&self) -> Option<&str> {
        self.last_url.as_ref().map(Url::as_str)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Light to display; off when nothing is classified
    pub fn light(&self) -> Light {
        self.current
            .as_ref()
            .map(|lookup| lookup.classification.light)
            .unwrap_or(Light::Off)
    }
}
