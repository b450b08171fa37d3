//! # Cotacao Repo
//!
//! Concrete store adapters for the quote relay service.
//! This crate provides the SQLite adapter that implements the `QuoteStore`
//! port, with its schema auto-created at startup.

pub mod sqlite;

mod types;


pub use sqlite::{SqliteStore, WRITE_BUDGET};
