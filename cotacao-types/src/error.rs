//! Error types for the quote relay.

/// Failures while fetching a quote from the upstream API.
///
/// Every variant is terminal for the attempt - there are no retries
/// anywhere in the system.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build upstream request: {0}")]
    RequestConstruction(String),

    #[error("upstream transport failure: {0}")]
    Transport(String),

    #[error("upstream call exceeded its deadline")]
    DeadlineExceeded,

    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

/// Failures while writing a quote to the store.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("database error: {0}")]
    Database(String),

    #[error("quote write exceeded its deadline")]
    DeadlineExceeded,
}

/// Application-level error at the service boundary.
///
/// Whatever the cause, the wire response collapses to a bodiless 500; the
/// detail carried here is for local logs only and must never leak to
/// callers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_convert_to_app_errors() {
        let err: AppError = FetchError::DeadlineExceeded.into();
        assert!(matches!(err, AppError::Fetch(FetchError::DeadlineExceeded)));
    }

    #[test]
    fn persist_errors_convert_to_app_errors() {
        let err: AppError = PersistError::Database("locked".into()).into();
        assert!(matches!(err, AppError::Persist(PersistError::Database(_))));
    }
}
