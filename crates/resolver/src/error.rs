use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Error, Debug)]
pub enum ResolveError {
    /// A required request field was empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The fragment could not be tokenized as XML.
    #[error("Malformed XML at byte {position}: {detail}")]
    MalformedInput { position: u64, detail: String },

    /// The target element never appears in the fragment.
    #[error("Tag '{0}' not found in the provided XML")]
    NotFound(String),

    #[error("Registry lookup failed: {0}")]
    StoreFailure(#[from] StoreError),
}

/// Opaque failure reported by a [`crate::TagRegistry`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
