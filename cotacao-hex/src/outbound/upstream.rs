//! Upstream quote API adapter.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use cotacao_types::{Deadline, FetchError, Quote, QuoteFetcher};

/// Production endpoint of the upstream quote API. No query parameters.
pub const AWESOMEAPI_ENDPOINT: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Budget for one upstream call, enforced on every fetch regardless of how
/// much time the caller has left.
pub const UPSTREAM_BUDGET: Duration = Duration::from_millis(200);

/// Envelope the upstream wraps its quote in. Private to this adapter - the
/// rest of the system only ever sees the inner [`Quote`].
#[derive(Deserialize)]
struct UsdBrlEnvelope {
    #[serde(rename = "USDBRL")]
    usdbrl: Quote,
}

/// Quote fetcher backed by the AwesomeAPI currency endpoint.
///
/// The upstream schema is trusted: decoding is structural only, with no
/// field-level validation.
pub struct AwesomeApiFetcher {
    http: reqwest::Client,
    endpoint: String,
}

impl AwesomeApiFetcher {
    /// Creates a fetcher pointed at the production endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(AWESOMEAPI_ENDPOINT)
    }

    /// Creates a fetcher pointed at a custom endpoint (tests, staging).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for AwesomeApiFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteFetcher for AwesomeApiFetcher {
    async fn fetch(&self, parent: Deadline) -> Result<Quote, FetchError> {
        let deadline = parent.cap(UPSTREAM_BUDGET);

        let request = self
            .http
            .get(&self.endpoint)
            .build()
            .map_err(|e| FetchError::RequestConstruction(e.to_string()))?;

        let attempt = async {
            let response = self.http.execute(request).await.map_err(|e| {
                if e.is_timeout() {
                    FetchError::DeadlineExceeded
                } else {
                    FetchError::Transport(e.to_string())
                }
            })?;

            // Read the whole body, then decode the envelope.
            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let envelope: UsdBrlEnvelope =
                serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

            Ok(envelope.usdbrl)
        };

        // cap() always yields a bounded deadline. The elapsed timer drops the
        // in-flight call rather than awaiting it further.
        let budget = deadline.remaining().unwrap_or(Duration::ZERO);
        let result = tokio::time::timeout(budget, attempt)
            .await
            .unwrap_or(Err(FetchError::DeadlineExceeded));

        if let Err(FetchError::DeadlineExceeded) = &result {
            tracing::warn!(
                budget_ms = UPSTREAM_BUDGET.as_millis() as u64,
                "upstream quote call abandoned after overrunning its budget"
            );
        }

        result
    }
}
