use std::fmt;

/// Unified error type for the rankit-browse crate.
#[derive(Debug, Clone)]
pub enum BrowseError {
    /// A page fetch did not succeed. The underlying cause (network, server,
    /// deserialization) is not distinguished.
    FetchFailed(String),
    /// Invalid input provided by the caller.
    InvalidInput(String),
    /// Internal error.
    Internal(String),
}

impl fmt::Display for BrowseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowseError::FetchFailed(msg) => write!(f, "fetch failed: {msg}"),
            BrowseError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            BrowseError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for BrowseError {}

/// Result type alias using [`BrowseError`].
pub type BrowseResult<T> = Result<T, BrowseError>;
