//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use cotacao_types::{AppError, QuoteFetcher};

use crate::QuoteService;

/// Application state shared across handlers.
pub struct AppState<F: QuoteFetcher> {
    pub service: QuoteService<F>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Failure detail stays in the logs; the wire only ever sees a
        // bodiless 500.
        tracing::error!(error = %self.0, "quote request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Serves the current quote's bid.
#[tracing::instrument(skip(state))]
pub async fn cotacao<F: QuoteFetcher>(
    State(state): State<Arc<AppState<F>>>,
) -> Result<impl IntoResponse, ApiError> {
    let bid = state.service.current_bid().await?;
    Ok(Json(bid))
}
