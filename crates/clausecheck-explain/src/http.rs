//! HTTP client for the explanation service's `dict-error` endpoint.

use std::time::Duration;

use clausecheck_core::{ExplainReply, ExplainRequest, Explanation};
use futures::future::join_all;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/dict-error/";

#[derive(Error, Debug)]
pub enum ExplainError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reply contained no explanation")]
    EmptyReply,
}

/// Client for the explanation endpoint. One request per call; no retries.
pub struct ExplainClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ExplainClient {
    /// Create a client posting to `endpoint`, e.g. `http://127.0.0.1:8000/dict-error/`.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Same as [`ExplainClient::new`] but every request gives up after `timeout`.
    pub fn with_timeout(endpoint: String, timeout: Duration) -> Result<Self, ExplainError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `{clause, error, rule}` and return the first explanation in the reply.
    pub async fn explain(&self, request: &ExplainRequest) -> Result<Explanation, ExplainError> {
        info!(
            url = %self.endpoint,
            rule = %request.rule,
            error = %request.error,
            "requesting explanation"
        );
        let resp = self.client.post(&self.endpoint).json(request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ExplainError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let reply: ExplainReply = serde_json::from_str(&body)?;
        reply.into_first().ok_or(ExplainError::EmptyReply)
    }

    /// Like [`ExplainClient::explain`], but any failure is logged and collapsed to `None`.
    pub async fn explain_or_none(&self, request: &ExplainRequest) -> Option<Explanation> {
        match self.explain(request).await {
            Ok(explanation) => Some(explanation),
            Err(e) => {
                warn!(error = %e, rule = %request.rule, "failed to fetch explanation");
                None
            }
        }
    }
}

/// Fire every request concurrently. Results keep the caller's keys and order;
/// each request succeeds or fails on its own.
pub async fn fetch_all<K>(
    client: &ExplainClient,
    requests: Vec<(K, ExplainRequest)>,
) -> Vec<(K, Option<Explanation>)> {
    let count = requests.len();
    let fetches = requests.into_iter().map(|(key, request)| async move {
        let outcome = client.explain_or_none(&request).await;
        (key, outcome)
    });
    let results = join_all(fetches).await;
    let fetched = results.iter().filter(|(_, o)| o.is_some()).count();
    info!(requested = count, fetched, "explanations complete");
    results
}
