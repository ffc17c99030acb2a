//! Error type for URL ID generation.

/// Error returned by [`crate::UrlIdGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlIdError {
    /// The input was empty after trimming whitespace.
    #[error("{0}")]
    InvalidArgument(&'static str),
}

pub(crate) const EMPTY_URL: &str = "URL string must not be empty!";
