//! HTTP status lookup core
//!
//! This crate turns free-form user input into a classified HTTP status and
//! keeps a short rolling history of lookups for charting.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   Option<code>   ┌──────────────┐   Classification
//! │   Resolver   │ ───────────────► │   classify   │ ─────────────────┐
//! │ numeric      │                  └──────────────┘                  ▼
//! │ url probe ◄──┼── StatusProbe trait                       ┌──────────────┐
//! │ phrase       │                                           │   Session    │
//! └──────────────┘                                           │  + History   │
//!                                                            └──────────────┘
//! ```
//!
//! The probe is the only collaborator with side effects. It is injected
//! through the [`StatusProbe`] trait so the resolver can be driven by a real
//! HTTP client or by a test double.
//!
//! # Example
//!
//! ```rust,no_run
//! use status_core::{Resolver, Session, StatusProbe, ProbeError};
//! use async_trait::async_trait;
//! use url::Url;
//!
//! struct Offline;
//!
//! #[async_trait]
//! impl StatusProbe for Offline {
//!     async fn probe(&self, _url: &Url) -> Result<u16, ProbeError> {
//!         Err(ProbeError::Transport("offline".to_string()))
//!     }
//! }
//!
//! # async fn example() {
//! let resolver = Resolver::new(Offline);
//! let resolution = resolver.resolve("not found").await;
//! let session = Session::default().apply("not found", resolution, 0);
//! assert_eq!(session.history().len(), 1);
//! # }
//! ```

pub mod category;
pub mod history;
pub mod phrases;
pub mod probe;
pub mod resolver;
pub mod session;

pub use category::{Category, Classification, Light, classify};
pub use history::{HISTORY_CAPACITY, History, StatusEntry};
pub use phrases::{STATUS_PHRASES, lookup_phrase, normalize_phrase};
pub use probe::{ProbeError, StatusProbe};
pub use resolver::{Resolution, ResolutionSource, Resolver, parse_numeric, parse_probe_url};
pub use session::{Lookup, Session};

// Re-export url so consumers don't need to depend on it directly
pub use url;
