use thiserror::Error;

/// Typed failure for a scoring request. The engine never retries or caches;
/// callers decide how each kind is presented.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The store has no record for the requested id.
    #[error("client {0} not found")]
    ClientNotFound(u64),

    /// The client has no debts or no client-authored messages, so the
    /// oldest-debt / latest-message day counts are undefined.
    #[error("insufficient data: {0}")]
    InsufficientData(&'static str),

    /// Negative or non-finite salary, savings, or debt amount.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The client store could not be read or parsed.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
