//! Core error types for lexis-util crate

use thiserror::Error;

/// Error type for source location lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceMapError {
    /// Byte offset lies past the end of the source
    #[error("Offset out of bounds: offset {offset}, source has {len} bytes")]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// Byte offset falls inside a multi-byte character
    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Result type alias for source location lookups
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
