//! Outbound adapters driven by the application layer.

mod upstream;

pub use upstream::{AWESOMEAPI_ENDPOINT, AwesomeApiFetcher, UPSTREAM_BUDGET};
