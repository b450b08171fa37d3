//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` is optional: when present the server runs the
    /// persisting variant, when absent it relays quotes without storing them.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL").ok();

        Ok(Self { port, database_url })
    }
}
