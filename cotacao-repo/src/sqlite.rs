//! SQLite store adapter.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use cotacao_types::{Deadline, PersistError, Quote, QuoteStore};

use crate::types::DbQuote;

/// Budget for a single quote write. Persistence is a best-effort fast path:
/// a write that cannot finish inside this window is abandoned, not awaited.
pub const WRITE_BUDGET: Duration = Duration::from_millis(10);

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Store
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite store implementation.
///
/// One pool for the process lifetime, shared across concurrent requests.
/// Upsert atomicity comes from SQLite's single-statement
/// `INSERT ... ON CONFLICT`; no additional locking is layered on top.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SQLite store with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_cotacoes.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Store implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl QuoteStore for SqliteStore {
    async fn upsert(&self, parent: Deadline, quote: &Quote) -> Result<(), PersistError> {
        let deadline = parent.cap(WRITE_BUDGET);
        if deadline.is_elapsed() {
            tracing::warn!(code = %quote.code, "quote write abandoned: deadline already elapsed");
            return Err(PersistError::DeadlineExceeded);
        }

        let write = sqlx::query(
            r#"INSERT INTO cotacoes
                   (code, codein, name, high, low, var_bid, pct_change, bid, ask, timestamp, create_date)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(code) DO UPDATE SET
                   codein = excluded.codein,
                   name = excluded.name,
                   high = excluded.high,
                   low = excluded.low,
                   var_bid = excluded.var_bid,
                   pct_change = excluded.pct_change,
                   bid = excluded.bid,
                   ask = excluded.ask,
                   timestamp = excluded.timestamp,
                   create_date = excluded.create_date"#,
        )
        .bind(&quote.code)
        .bind(&quote.codein)
        .bind(&quote.name)
        .bind(&quote.high)
        .bind(&quote.low)
        .bind(&quote.var_bid)
        .bind(&quote.pct_change)
        .bind(&quote.bid)
        .bind(&quote.ask)
        .bind(&quote.timestamp)
        .bind(&quote.create_date)
        .execute(&self.pool);

        // cap() always yields a bounded deadline.
        let budget = deadline.remaining().unwrap_or(Duration::ZERO);
        match tokio::time::timeout(budget, write).await {
            Ok(result) => {
                result.map_err(|e| PersistError::Database(e.to_string()))?;
                Ok(())
            }
            Err(_) => {
                tracing::warn!(
                    code = %quote.code,
                    budget_ms = WRITE_BUDGET.as_millis() as u64,
                    "quote write abandoned after overrunning its budget"
                );
                Err(PersistError::DeadlineExceeded)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Quote>, PersistError> {
        let row: Option<DbQuote> = sqlx::query_as(
            r#"SELECT code, codein, name, high, low, var_bid, pct_change, bid, ask, timestamp, create_date
               FROM cotacoes WHERE code = ?"#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PersistError::Database(e.to_string()))?;

        Ok(row.map(DbQuote::into_domain))
    }
}
