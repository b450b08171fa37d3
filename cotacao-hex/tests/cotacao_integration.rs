//! End-to-end tests for the quote relay HTTP surface.
//!
//! These drive the full router through `tower::ServiceExt::oneshot` and
//! assert the wire contract: 200 with a JSON bid on success, bodiless 500 on
//! any internal failure.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cotacao_hex::QuoteService;
use cotacao_hex::inbound::HttpServer;
use cotacao_types::{
    Deadline, FetchError, PersistError, Quote, QuoteFetcher, QuoteStore,
};

fn usd_brl(bid: &str) -> Quote {
    Quote {
        code: "USD".to_string(),
        codein: "BRL".to_string(),
        name: "Dólar Americano/Real Brasileiro".to_string(),
        high: "5.50".to_string(),
        low: "5.40".to_string(),
        var_bid: "0.01".to_string(),
        pct_change: "0.18".to_string(),
        bid: bid.to_string(),
        ask: "5.44".to_string(),
        timestamp: "1700000000".to_string(),
        create_date: "2023-11-14 14:00:00".to_string(),
    }
}

/// Fetcher that always returns the same quote.
struct StaticFetcher(Quote);

#[async_trait]
impl QuoteFetcher for StaticFetcher {
    async fn fetch(&self, _parent: Deadline) -> Result<Quote, FetchError> {
        Ok(self.0.clone())
    }
}

/// Fetcher that always reports a deadline overrun.
struct TimedOutFetcher;

#[async_trait]
impl QuoteFetcher for TimedOutFetcher {
    async fn fetch(&self, _parent: Deadline) -> Result<Quote, FetchError> {
        Err(FetchError::DeadlineExceeded)
    }
}

/// Store whose writes always overrun their budget.
struct TimedOutStore;

#[async_trait]
impl QuoteStore for TimedOutStore {
    async fn upsert(&self, _parent: Deadline, _quote: &Quote) -> Result<(), PersistError> {
        Err(PersistError::DeadlineExceeded)
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Quote>, PersistError> {
        Ok(None)
    }
}

fn cotacao_request() -> Request<Body> {
    Request::builder()
        .uri("/cotacao")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_get_cotacao_returns_bid_json() {
    let server = HttpServer::new(QuoteService::new(StaticFetcher(usd_brl("5.43"))));
    let app = server.router();

    let response = app.oneshot(cotacao_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().contains("application/json"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"bid":"5.43"}"#);
}

#[tokio::test]
async fn test_fetch_failure_maps_to_bodiless_500() {
    let server = HttpServer::new(QuoteService::new(TimedOutFetcher));
    let app = server.router();

    let response = app.oneshot(cotacao_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_persist_failure_maps_to_bodiless_500() {
    // The fetch succeeds, yet the persisting variant still answers 500 when
    // the write overruns its budget.
    let service =
        QuoteService::new(StaticFetcher(usd_brl("5.43"))).with_store(Arc::new(TimedOutStore));
    let server = HttpServer::new(service);
    let app = server.router();

    let response = app.oneshot(cotacao_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = HttpServer::new(QuoteService::new(StaticFetcher(usd_brl("5.43"))));
    let app = server.router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}
