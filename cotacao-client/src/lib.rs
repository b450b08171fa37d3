//! # Cotacao Client SDK
//!
//! A typed Rust client for the quote relay API.

use reqwest::Client;

use cotacao_types::{BidResponse, Deadline};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("quote request exceeded the client deadline")]
    DeadlineExceeded,

    #[error("API error: status {status}")]
    Api { status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Quote relay API client.
pub struct CotacaoClient {
    base_url: String,
    http: Client,
}

impl CotacaoClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches the current bid, bounded by `deadline`.
    ///
    /// The whole exchange - request, response, decode - must finish before
    /// the deadline; an overrun abandons the in-flight call and reports
    /// [`ClientError::DeadlineExceeded`], distinct from transport failures.
    pub async fn fetch_bid(&self, deadline: Deadline) -> Result<BidResponse, ClientError> {
        let attempt = async {
            let resp = self
                .http
                .get(format!("{}/cotacao", self.base_url))
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                return Err(ClientError::Api {
                    status: status.as_u16(),
                });
            }

            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        };

        match deadline.remaining() {
            Some(budget) => tokio::time::timeout(budget, attempt)
                .await
                .map_err(|_| ClientError::DeadlineExceeded)?,
            None => attempt.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use axum::{Router, routing::get};

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_client_creation() {
        let client = CotacaoClient::new("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = CotacaoClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_fetch_bid_decodes_the_payload() {
        let app = Router::new().route("/cotacao", get(|| async { r#"{"bid":"5.43"}"# }));
        let url = spawn_server(app).await;

        let client = CotacaoClient::new(url);
        let response = client
            .fetch_bid(Deadline::within(Duration::from_millis(300)))
            .await
            .unwrap();

        assert_eq!(response.bid, "5.43");
    }

    #[tokio::test]
    async fn test_server_error_surfaces_the_status() {
        let app = Router::new().route(
            "/cotacao",
            get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let url = spawn_server(app).await;

        let client = CotacaoClient::new(url);
        let result = client
            .fetch_bid(Deadline::within(Duration::from_millis(300)))
            .await;

        assert!(matches!(result, Err(ClientError::Api { status: 500 })));
    }

    #[tokio::test]
    async fn test_slow_server_overruns_the_deadline() {
        let app = Router::new().route(
            "/cotacao",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                r#"{"bid":"5.43"}"#
            }),
        );
        let url = spawn_server(app).await;

        let client = CotacaoClient::new(url);
        let result = client
            .fetch_bid(Deadline::within(Duration::from_millis(50)))
            .await;

        assert!(matches!(result, Err(ClientError::DeadlineExceeded)));
    }
}
