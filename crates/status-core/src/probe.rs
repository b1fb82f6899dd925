//! Transport collaborator used to probe URLs
//!
//! Implementations perform a single existence check (HEAD semantics) and
//! report the status code of whatever response came back.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Errors reported by a [`StatusProbe`]
///
/// The resolver never propagates these; they are logged and turned into
/// "no code".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Status probing trait
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single probe can be shared by
/// concurrently running checks.
///
/// # Example
///
/// ```rust,ignore
/// async fn status_of(probe: &dyn StatusProbe, url: &Url) -> Option<u16> {
///     probe.probe(url).await.ok()
/// }
/// ```
#[async_trait]
pub trait StatusProbe: Send + Sync {
    /// Probe an absolute URL and return the response status code
    async fn probe(&self, url: &Url) -> Result<u16, ProbeError>;
}

#[async_trait]
impl<P: StatusProbe + ?Sized> StatusProbe for std::sync::Arc<P> {
    async fn probe(&self, url: &Url) -> Result<u16, ProbeError> {
        (**self).probe(url).await
    }
}
