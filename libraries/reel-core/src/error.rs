/// Core error types for Reel
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building or loading a video catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A catalog line could not be parsed
    #[error("Invalid catalog entry on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Two videos share the same id
    ///
    /// `line` is the 1-based catalog line, or the entry position when the
    /// catalog is built from videos directly.
    #[error("Duplicate video id {id} on line {line}")]
    DuplicateId { id: String, line: usize },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}
