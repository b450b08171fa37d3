//! Data Transfer Objects for the wire surface.

use serde::{Deserialize, Serialize};

use crate::domain::Quote;

/// The only payload exposed to end clients: the buy price of a quote.
///
/// Always derived from a successfully fetched [`Quote`]; never constructed
/// independently on the server side. The client SDK also uses it as its
/// narrow decode schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidResponse {
    pub bid: String,
}

impl From<&Quote> for BidResponse {
    fn from(quote: &Quote) -> Self {
        Self {
            bid: quote.bid.clone(),
        }
    }
}
