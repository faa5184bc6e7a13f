//! Error types for the bulk loaders.

use thiserror::Error;

/// Errors that can occur while bulk-loading a batch.
#[derive(Error, Debug)]
pub enum LoadError {
    /// PostgreSQL connection, protocol, or constraint error.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// Connection-level error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The load was aborted by the run's cancellation token.
    #[error("bulk load cancelled")]
    Cancelled,
}

impl LoadError {
    /// Cancellation is an operator request, not a store failure; callers
    /// use this to keep the two apart in logs and run status.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_is_distinguishable() {
        assert!(LoadError::Cancelled.is_cancelled());
        assert!(!LoadError::Connection("refused".to_string()).is_cancelled());
    }
}
