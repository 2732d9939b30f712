use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Invalid book: {0}")]
    Validation(String),

    #[error("A book with id {0} already exists")]
    Duplicate(i64),

    #[error("Book not found: {0}")]
    NotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl LibrisError {
    /// True for failures of the backing file rather than of the data.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            LibrisError::Io(_) | LibrisError::Serialization(_) | LibrisError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LibrisError>;
