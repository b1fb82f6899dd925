//! reqwest-based status probe
//!
//! Sends a single HEAD request and reports the status of the response,
//! whatever it is. Redirects are not followed so 3xx codes stay visible.

use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use status_core::url::Url;
use status_core::{ProbeError, StatusProbe};
use std::time::Duration;

/// Probe that performs a real HEAD request
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Create a probe with the given request timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusProbe for HttpProbe {
    async fn probe(&self, url: &Url) -> Result<u16, ProbeError> {
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ProbeError::UnsupportedScheme(other.to_string())),
        }

        debug!("HEAD {}", url);
        let response = self
            .client
            .head(url.as_str())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProbeError::Timeout
                } else {
                    ProbeError::Transport(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        debug!("HEAD {} -> {}", url, status);
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a local port
    async fn serve_once(status_line: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status_line
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        Url::parse(&format!("http://{}/", addr)).unwrap()
    }

    fn probe() -> HttpProbe {
        HttpProbe::new(Duration::from_secs(5), "status-light-test").unwrap()
    }

    #[tokio::test]
    async fn test_reports_success_status() {
        let url = serve_once("200 OK").await;
        assert_eq!(probe().probe(&url).await, Ok(200));
    }

    #[tokio::test]
    async fn test_reports_error_status_without_failing() {
        let url = serve_once("404 Not Found").await;
        assert_eq!(probe().probe(&url).await, Ok(404));
    }

    #[tokio::test]
    async fn test_does_not_follow_redirects() {
        let url = serve_once("301 Moved Permanently").await;
        assert_eq!(probe().probe(&url).await, Ok(301));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{}/", addr)).unwrap();
        let result = probe().probe(&url).await;

        assert!(matches!(result, Err(ProbeError::Transport(_))), "{:?}", result);
    }

    #[tokio::test]
    async fn test_rejects_non_http_scheme() {
        let url = Url::parse("ftp://example.com/file").unwrap();
        assert_eq!(
            probe().probe(&url).await,
            Err(ProbeError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[tokio::test]
    async fn test_wrapped_client_is_used() {
        let probe = HttpProbe::with_client(Client::new());
        let url = serve_once("503 Service Unavailable").await;
        assert_eq!(probe.probe(&url).await, Ok(503));
    }
}
