//! Error types for the Strata provider

use thiserror::Error;

/// Result type alias using the provider Error
pub type Result<T> = std::result::Result<T, Error>;

/// Provider error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("credentials for account API (client_id, client_secret) are missing")]
    MissingCredentials,

    #[error("invalid action mode {0:?}: expected all-operations, read-only or write-only")]
    InvalidActionMode(String),

    #[error("permission has no bucket scope: set all_buckets, bucket_prefix or bucket_names")]
    MissingBucketScope,

    #[error("error {operation}: {source}")]
    Remote {
        operation: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("account API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a client failure with the operation that triggered it.
    pub fn remote(operation: &'static str, source: Error) -> Self {
        Error::Remote {
            operation,
            source: Box::new(source),
        }
    }
}
