use thiserror::Error;

/// Errors related to the core types of the URL shortener.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid fragment: {0}")]
    InvalidFragment(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid alias: {0}")]
    InvalidAlias(String),
}

/// Failures of the storage collaborator itself.
///
/// A fragment or URL that is already taken is not a failure; stores report
/// it through [`InsertOutcome`](crate::store::InsertOutcome).
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    /// Malformed or empty URL/alias. Raised before any store access.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No unique fragment could be inserted within the attempt bound.
    #[error("no unique fragment after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        Self::InvalidArgument(value.to_string())
    }
}
