//! Quote persistence port.

use crate::domain::{Deadline, Quote};
use crate::error::PersistError;

/// Port trait for quote stores.
///
/// The store connection lives for the whole process and is shared across
/// concurrent requests; the storage engine's own row-level atomicity is the
/// only concurrency control.
#[async_trait::async_trait]
pub trait QuoteStore: Send + Sync + 'static {
    /// Writes `quote` keyed by its `code`, fully overwriting any previous
    /// row with the same code. The write must be abandoned once the derived
    /// deadline expires, reported distinctly as
    /// [`PersistError::DeadlineExceeded`].
    async fn upsert(&self, parent: Deadline, quote: &Quote) -> Result<(), PersistError>;

    /// Reads the stored quote for `code`, if any.
    async fn find_by_code(&self, code: &str) -> Result<Option<Quote>, PersistError>;
}
