//! Quote Application Service
//!
//! Orchestrates the fetch-then-persist chain through the port traits.
//! Contains NO infrastructure logic - each adapter enforces its own budget.

use std::sync::Arc;

use cotacao_types::{AppError, BidResponse, Deadline, QuoteFetcher, QuoteStore};

/// Application service for quote requests.
///
/// Generic over `F: QuoteFetcher` - the upstream adapter is injected at
/// compile time. Persistence is an optional, pluggable collaborator: with a
/// store attached this is the persisting deployment variant, without one it
/// is the plain relay. Both variants treat any failure in the chain as fatal
/// to the request.
pub struct QuoteService<F: QuoteFetcher> {
    fetcher: F,
    store: Option<Arc<dyn QuoteStore>>,
}

impl<F: QuoteFetcher> QuoteService<F> {
    /// Creates a relay-only service with the given fetcher.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            store: None,
        }
    }

    /// Attaches a quote store, turning this into the persisting variant.
    pub fn with_store(mut self, store: Arc<dyn QuoteStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Whether this deployment persists fetched quotes.
    pub fn persists(&self) -> bool {
        self.store.is_some()
    }

    /// Handles one quote request: fetch, persist (when configured), respond.
    ///
    /// The chain starts from a fresh unbounded root deadline rather than the
    /// inbound request's own - the service imposes its budgets through the
    /// adapters regardless of how the request arrived. Fetch strictly
    /// precedes persist; persist strictly precedes responding.
    pub async fn current_bid(&self) -> Result<BidResponse, AppError> {
        let root = Deadline::none();

        let quote = self.fetcher.fetch(root).await?;

        // Persistence failure is fatal even though the quote is already in
        // hand: a persisting deployment does not consider the request served
        // until the row is written.
        if let Some(store) = &self.store {
            store.upsert(root, &quote).await?;
        }

        Ok(BidResponse::from(&quote))
    }
}
