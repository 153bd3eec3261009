use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use super::snapshot::Snapshot;

#[derive(Debug, Error)]
pub enum PollError {
    #[error("invalid endpoint `{url}`: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: Url, status: StatusCode },

    #[error("could not decode snapshot from {url}: {source}")]
    Parse {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a failed poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Parse,
}

impl PollError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PollError::Parse { .. } => FailureKind::Parse,
            PollError::InvalidEndpoint { .. }
            | PollError::Client(_)
            | PollError::Transport { .. }
            | PollError::Status { .. } => FailureKind::Transport,
        }
    }
}

/// Anything the poller can pull a snapshot from.
pub trait SnapshotSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot, PollError>> + Send;
}

/// HTTP source for `GET <endpoint><stats_path>`.
pub struct MetricsClient {
    http: reqwest::Client,
    url: Url,
}

impl MetricsClient {
    pub fn new(
        endpoint: &str,
        stats_path: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, PollError> {
        let url = stats_url(endpoint, stats_path)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("vmdash/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(PollError::Client)?;

        Ok(MetricsClient { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl SnapshotSource for MetricsClient {
    async fn fetch(&self) -> Result<Snapshot, PollError> {
        let transport = |source| PollError::Transport {
            url: self.url.clone(),
            source,
        };

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        decode_snapshot(&body).map_err(|source| PollError::Parse {
            url: self.url.clone(),
            source,
        })
    }
}

pub fn decode_snapshot(body: &[u8]) -> Result<Snapshot, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Appends the stats path to the endpoint, keeping any path prefix the
/// endpoint carries (`http://h/vm` + `/api/stats` is `http://h/vm/api/stats`).
/// Only http(s) is accepted.
pub fn stats_url(endpoint: &str, stats_path: &str) -> Result<Url, PollError> {
    let invalid = |reason: String| PollError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason,
    };

    let mut base = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", base.scheme())));
    }
    if !base.path().ends_with('/') {
        let prefix = format!("{}/", base.path());
        base.set_path(&prefix);
    }
    base.join(stats_path.trim_start_matches('/'))
        .map_err(|e| invalid(e.to_string()))
}
