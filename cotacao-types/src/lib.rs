//! # Cotacao Types
//!
//! Domain types and port traits for the USD-BRL quote relay service.
//! This crate has ZERO external IO dependencies - only data structures,
//! the deadline model, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Quote, Deadline)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto` - Data Transfer Objects for the wire surface
//! - `error` - Error taxonomy shared by all adapters

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Deadline, Quote};
pub use dto::BidResponse;
pub use error::{AppError, FetchError, PersistError};
pub use ports::{QuoteFetcher, QuoteStore};
