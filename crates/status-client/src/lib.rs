//! HTTP probe client
//!
//! Implements [`status_core::StatusProbe`] on top of `reqwest`:
//!
//! ```text
//! ┌───────────────────────┐
//! │   StatusProbe trait   │  (status-core)
//! └───────────────────────┘
//!             ▲
//!             │
//! ┌───────────────────────┐
//! │      HttpProbe        │  HEAD request, redirects not followed
//! └───────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use status_client::HttpProbe;
//! use status_core::Resolver;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let probe = HttpProbe::new(Duration::from_secs(10), "status-light")?;
//! let resolution = Resolver::new(probe).resolve("https://example.com").await;
//! println!("{:?}", resolution.code);
//! # Ok(())
//! # }
//! ```

pub mod http_probe;

pub use http_probe::HttpProbe;
