//! Pure domain types.

mod deadline;
mod quote;

pub use deadline::Deadline;
pub use quote::Quote;
