//! Port traits implemented by outbound adapters.

mod fetcher;
mod store;

pub use fetcher::QuoteFetcher;
pub use store::QuoteStore;
