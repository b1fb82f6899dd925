//! Input resolver
//!
//! Turns an arbitrary string into an optional status code. Strategies are
//! tried in order and the first success wins:
//!
//! 1. pure digits -> base-10 parse
//! 2. absolute http(s) URL -> one probe through [`StatusProbe`]
//! 3. reason phrase -> [`lookup_phrase`]

use crate::phrases::lookup_phrase;
use crate::probe::StatusProbe;
use url::Url;

/// Which strategy produced the code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Numeric,
    Url,
    Phrase,
    /// No strategy matched
    Unresolved,
}

/// Outcome of resolving one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub code: Option<u64>,
    pub source: ResolutionSource,
    /// True only when a URL probe succeeded
    pub was_url: bool,
    /// The parsed URL that answered, set together with `was_url`
    pub url: Option<Url>,
}

impl Resolution {
    pub fn numeric(code: u64) -> Self {
        Self {
            code: Some(code),
            source: ResolutionSource::Numeric,
            was_url: false,
            url: None,
        }
    }

    pub fn from_url(code: u16, url: Url) -> Self {
        Self {
            code: Some(u64::from(code)),
            source: ResolutionSource::Url,
            was_url: true,
            url: Some(url),
        }
    }

    pub fn phrase(code: u64) -> Self {
        Self {
            code: Some(code),
            source: ResolutionSource::Phrase,
            was_url: false,
            url: None,
        }
    }

    /// Nothing matched
    pub fn unresolved() -> Self {
        Self {
            code: None,
            source: ResolutionSource::Unresolved,
            was_url: false,
            url: None,
        }
    }
}

/// Parse a trimmed, digits-only input
///
/// Any such input succeeds. Values that do not fit a `u64` saturate to
/// `u64::MAX`, which classifies as invalid like any other out-of-range code.
pub fn parse_numeric(input: &str) -> Option<u64> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// Parse an absolute URL that can be probed over HTTP
pub fn parse_probe_url(input: &str) -> Option<Url> {
    let url = Url::parse(input.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        other => {
            log::debug!("Resolver: not probing URL with scheme {}", other);
            None
        }
    }
}

/// Resolves user input using the numeric, URL and phrase strategies
pub struct Resolver<P> {
    probe: P,
}

impl<P: StatusProbe> Resolver<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Resolve a single input
    ///
    /// Issues at most one probe. Probe failures are logged and never
    /// returned to the caller.
    pub async fn resolve(&self, input: &str) -> Resolution {
        if let Some(code) = parse_numeric(input) {
            log::debug!("Resolver: {:?} parsed as numeric code {}", input, code);
            return Resolution::numeric(code);
        }

        if let Some(url) = parse_probe_url(input) {
            match self.probe.probe(&url).await {
                Ok(status) => {
                    log::info!("Resolver: probe of {} returned {}", url, status);
                    return Resolution::from_url(status, url);
                }
                Err(e) => {
                    log::warn!("Resolver: probe of {} failed: {}", url, e);
                }
            }
        }

        match lookup_phrase(input) {
            Some(code) => {
                log::debug!("Resolver: {:?} matched phrase code {}", input, code);
                Resolution::phrase(code)
            }
            None => {
                log::debug!("Resolver: {:?} could not be resolved", input);
                Resolution::unresolved()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    /// Mock probe that counts calls and returns a fixed result
    #[derive(Clone)]
    struct MockProbe {
        result: Result<u16, ProbeError>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockProbe {
        fn new(result: Result<u16, ProbeError>) -> Self {
            Self {
                result,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl StatusProbe for MockProbe {
        async fn probe(&self, url: &Url) -> Result<u16, ProbeError> {
            self.calls.lock().unwrap().push(url.to_string());
            self.result.clone()
        }
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("200"), Some(200));
        assert_eq!(parse_numeric("  404 "), Some(404));
        assert_eq!(parse_numeric("0"), Some(0));
        assert_eq!(parse_numeric("9999"), Some(9999));
        assert_eq!(parse_numeric("99999999999999999999999"), Some(u64::MAX));
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("-1"), None);
        assert_eq!(parse_numeric("20 0"), None);
        assert_eq!(parse_numeric("404a"), None);
        assert_eq!(parse_numeric("٤٠٤"), None);
    }

    #[test]
    fn test_parse_probe_url() {
        assert!(parse_probe_url("https://example.com").is_some());
        assert!(parse_probe_url(" http://example.com/path ").is_some());
        assert!(parse_probe_url("200").is_none());
        assert!(parse_probe_url("example.com").is_none());
        assert!(parse_probe_url("not found").is_none());
        assert!(parse_probe_url("mailto:someone@example.com").is_none());
    }

    #[tokio::test]
    async fn test_numeric_input_never_probes() {
        let probe = MockProbe::new(Ok(500));
        let resolver = Resolver::new(probe.clone());

        let resolution = resolver.resolve("200").await;

        assert_eq!(resolution.code, Some(200));
        assert_eq!(resolution.source, ResolutionSource::Numeric);
        assert!(!resolution.was_url);
        assert_eq!(probe.call_count(), 0);
    }

    #[tokio::test]
    async fn test_phrase_lookup_is_case_insensitive() {
        let probe = MockProbe::new(Ok(200));
        let resolver = Resolver::new(probe.clone());

        for input in ["Not Found", " not found ", "NOT FOUND"] {
            let resolution = resolver.resolve(input).await;
            assert_eq!(resolution.code, Some(404));
            assert_eq!(resolution.source, ResolutionSource::Phrase);
        }
        assert_eq!(probe.call_count(), 0);
    }

    #[tokio::test]
    async fn test_url_probe_success_sets_flag() {
        let probe = MockProbe::new(Ok(200));
        let resolver = Resolver::new(probe.clone());

        let resolution = resolver.resolve("https://example.com").await;

        assert_eq!(resolution.code, Some(200));
        assert_eq!(resolution.source, ResolutionSource::Url);
        assert!(resolution.was_url);
        assert_eq!(probe.call_count(), 1);
    }

    #[tokio::test]
    async fn test_checked_url_is_the_normalized_one() {
        let probe = MockProbe::new(Ok(200));
        let resolver = Resolver::new(probe.clone());

        let resolution = resolver.resolve(" https://Example.com/a b?x=1&y=2 ").await;

        let url = resolution.url.expect("url kept");
        assert_eq!(url.as_str(), "https://example.com/a%20b?x=1&y=2");
        assert_eq!(probe.calls.lock().unwrap().as_slice(), [url.to_string()]);
    }

    #[tokio::test]
    async fn test_url_probe_failure_degrades_to_unresolved() {
        let probe = MockProbe::new(Err(ProbeError::Transport("connection refused".into())));
        let resolver = Resolver::new(probe.clone());

        let resolution = resolver.resolve("https://example.com").await;

        assert_eq!(resolution, Resolution::unresolved());
        assert_eq!(probe.call_count(), 1);
    }

    #[tokio::test]
    async fn test_timeout_degrades_to_unresolved() {
        let resolver = Resolver::new(MockProbe::new(Err(ProbeError::Timeout)));

        let resolution = resolver.resolve("http://slow.example.com").await;

        assert_eq!(resolution.code, None);
        assert!(!resolution.was_url);
    }

    #[tokio::test]
    async fn test_unknown_input_is_unresolved() {
        let probe = MockProbe::new(Ok(200));
        let resolver = Resolver::new(probe.clone());

        let resolution = resolver.resolve("teapot").await;

        assert_eq!(resolution, Resolution::unresolved());
        assert_eq!(probe.call_count(), 0);
    }

    #[tokio::test]
    async fn test_probe_reports_error_statuses() {
        let resolver = Resolver::new(MockProbe::new(Ok(404)));

        let resolution = resolver.resolve("https://example.com/missing").await;

        assert_eq!(resolution.code, Some(404));
        assert!(resolution.was_url);
    }
}
