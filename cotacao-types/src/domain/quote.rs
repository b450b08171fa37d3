//! The quote domain type.

use serde::{Deserialize, Serialize};

/// One USD-BRL exchange-rate observation as reported by the upstream API.
///
/// Every field carries the exact text the upstream produced. The upstream
/// schema is trusted: nothing here parses or validates the numeric content,
/// so prices survive relaying byte-for-byte.
///
/// A quote is created fresh per request, never mutated, and discarded once
/// the request completes (apart from the derived [`crate::BidResponse`] and
/// the optional stored row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}
