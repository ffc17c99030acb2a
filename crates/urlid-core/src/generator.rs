//! Public entry point: trim, validate, normalize, then delegate to the ID stage.

use crate::error::{UrlIdError, EMPTY_URL};
use crate::id::{IdFormat, IdGenerator, Sha256IdGenerator};
use crate::normalize::normalize_url;

/// Generates stable IDs for URLs. Variants of the same URL (default port,
/// missing protocol, percent-encoding case) map to the same ID.
#[derive(Debug, Clone)]
pub struct UrlIdGenerator<G = Sha256IdGenerator> {
    id_generator: G,
}

impl Default for UrlIdGenerator<Sha256IdGenerator> {
    fn default() -> Self {
        Self::with_format(IdFormat::default())
    }
}

impl UrlIdGenerator<Sha256IdGenerator> {
    /// Generator using the default SHA-256 ID stage in the given format.
    pub fn with_format(format: IdFormat) -> Self {
        Self::new(Sha256IdGenerator::new(format))
    }
}

impl<G: IdGenerator> UrlIdGenerator<G> {
    pub fn new(id_generator: G) -> Self {
        Self { id_generator }
    }

    /// Generates the ID of `url`.
    ///
    /// Fails with [`UrlIdError::InvalidArgument`] when `url` is empty or only
    /// whitespace; every other input is normalized best-effort.
    pub fn generate(&self, url: &str) -> Result<String, UrlIdError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(UrlIdError::InvalidArgument(EMPTY_URL));
        }

        Ok(self.id_generator.generate_id(&normalize_url(url)))
    }
}
