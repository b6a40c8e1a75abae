//! Single-URL reachability probe: `HEAD` first, `GET` as a fallback, one shared deadline.

use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Client, StatusCode};
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

use crate::db::enums::ItemStatus;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(5000);
pub const DEFAULT_USER_AGENT: &str = "ChecklistMonitor/1.0";

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Request timed out")]
    DeadlineExceeded,
}

#[async_trait]
pub trait Prober: Send + Sync {
    /// Classifies `url` as `Ok` or `Error`. Never returns `Unknown`.
    async fn probe(&self, url: &str) -> ItemStatus;
}

#[derive(Clone)]
pub struct HttpProber {
    client: Client,
    timeout: Duration,
    user_agent: String,
}

impl HttpProber {
    /// The client follows redirects with reqwest's default policy, so only the
    /// final status is judged.
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            timeout,
            user_agent: user_agent.into(),
        })
    }

    /// Runs the HEAD attempt and, if needed, the GET fallback against one
    /// deadline. The fallback gets whatever time the HEAD attempt left over.
    pub async fn final_status(&self, url: &str) -> Result<StatusCode, ProbeError> {
        let deadline = Instant::now() + self.timeout;

        let head = self
            .client
            .head(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send();
        match timeout_at(deadline, head).await {
            Ok(Ok(response)) if !rejects_head(response.status()) => return Ok(response.status()),
            Ok(Ok(response)) => {
                debug!(url, status = %response.status(), "HEAD rejected, retrying with GET.");
            }
            Ok(Err(e)) => {
                debug!(url, error = %e, "HEAD probe failed, retrying with GET.");
            }
            Err(_) => {
                debug!(url, "HEAD probe hit the deadline, retrying with GET.");
            }
        }

        match timeout_at(deadline, self.client.get(url).send()).await {
            Ok(result) => Ok(result?.status()),
            Err(_) => Err(ProbeError::DeadlineExceeded),
        }
    }
}

/// Servers that do not implement `HEAD` answer with one of these.
fn rejects_head(status: StatusCode) -> bool {
    status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ItemStatus {
        match self.final_status(url).await {
            Ok(status) if status.is_success() => ItemStatus::Ok,
            Ok(status) => {
                debug!(url, status = %status, "Probe answered with a failure status.");
                ItemStatus::Error
            }
            Err(e) => {
                debug!(url, error = %e, "Probe failed.");
                ItemStatus::Error
            }
        }
    }
}
