//! Error types for lexis-lex.
//!
//! Every scan error is fatal to the `scan` call that raised it: the engine
//! never emits sentinel tokens and never returns partial results.

use lexis_util::Span;
use thiserror::Error;

use crate::token::Category;

/// Error raised while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No classifier in the chain for `category` claimed the lexeme.
    ///
    /// This signals a mismatch between the input and the registered grammar,
    /// not an "unknown token" to be skipped.
    #[error("unknown {category}: {lexeme:?}")]
    UnrecognizedToken {
        /// Chain that was exhausted
        category: Category,
        /// The unclaimed lexeme
        lexeme: String,
        /// Where the lexeme sits in the source
        span: Span,
    },

    /// A character that no scanner claims.
    #[error("unexpected character {ch:?} at byte {position}")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Its byte offset
        position: usize,
    },

    /// Input ended inside a string literal.
    #[error("unterminated string literal starting at byte {start}")]
    UnterminatedString {
        /// Byte offset of the opening quote
        start: usize,
    },

    /// A number literal does not fit in 64 bits.
    #[error("integer literal {lexeme:?} is too large")]
    IntegerOverflow {
        /// The literal as written
        lexeme: String,
        /// Where the literal sits in the source
        span: Span,
    },
}

impl LexError {
    /// Byte offset the error points at.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnrecognizedToken { span, .. } | LexError::IntegerOverflow { span, .. } => {
                span.start
            },
            LexError::UnexpectedCharacter { position, .. } => *position,
            LexError::UnterminatedString { start } => *start,
        }
    }
}

/// Error raised while loading a [`LexerConfig`](crate::config::LexerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The comment marker is not exactly two usable characters.
    #[error("invalid line comment marker {0:?}: expected two non-word, non-space characters")]
    InvalidCommentMarker(String),

    /// Reading the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for scanning.
pub type Result<T> = std::result::Result<T, LexError>;

/// Result type alias for configuration.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
