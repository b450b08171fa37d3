//! # Cotacao Hex
//!
//! Application service layer and HTTP adapters for the quote relay service.
//!
//! ## Architecture
//!
//! - `service` - Application service (orchestrates fetch and persist)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `outbound/` - Upstream quote API adapter (reqwest)
//!
//! The service is generic over `F: QuoteFetcher` and carries an optional
//! `QuoteStore`, so the persisting and relay-only deployment variants share
//! one implementation.

pub mod inbound;
pub mod outbound;
pub mod service;


pub use service::QuoteService;
