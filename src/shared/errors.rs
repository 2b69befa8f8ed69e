use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please enter a keyword to search")]
    KeywordRequired,

    #[error("A search is already in progress")]
    SearchInFlight,

    // The simulated fetch cannot fail; this variant is reserved for a real
    // retrieval integration behind the same controller contract.
    #[error("Failed to fetch posts. Please try again.")]
    FetchFailed,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
