//! Upstream quote source port.

use crate::domain::{Deadline, Quote};
use crate::error::FetchError;

/// Port trait for upstream quote sources.
///
/// Implementations enforce their own call budget by deriving a child
/// deadline from `parent` with [`Deadline::cap`]; the hop stays bounded even
/// when the caller is not.
#[async_trait::async_trait]
pub trait QuoteFetcher: Send + Sync + 'static {
    /// Fetches one fresh quote. A single attempt: deadline overruns and
    /// transport failures are terminal.
    async fn fetch(&self, parent: Deadline) -> Result<Quote, FetchError>;
}
