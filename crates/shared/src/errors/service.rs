use thiserror::Error;

/// Failure classes surfaced by the reward services.
///
/// Each variant maps to exactly one HTTP status in [`super::AppErrorHttp`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    StoreUnavailable(String),

    #[error("{0}")]
    Internal(String),
}
