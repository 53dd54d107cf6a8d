/// Error returned when a logical request cannot be translated.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The caller handed over a request the backend cannot act on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl AdapterError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        AdapterError::InvalidArgument(reason.into())
    }
}

/// Convenience alias for adapter results.
pub type Result<T> = std::result::Result<T, AdapterError>;
