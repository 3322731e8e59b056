//! lexis-lex - Extensible, classifier-driven lexer engine
//!
//! This crate turns source text into a flat list of tokens, but it does not
//! know any language. The engine only knows four lexeme *shapes*; everything
//! a token means comes from classifiers that grammars register at runtime.
//!
//! # Overview
//!
//! Scanning happens in two steps:
//!
//! 1. **Shape recognition.** The engine skips whitespace and comments, looks
//!    at the next character, and extracts the longest lexeme of one of four
//!    categories: identifier, number, string, or operator.
//! 2. **Classification.** The lexeme is handed to the classifier chain of its
//!    category. Classifiers are consulted newest first; the first one that
//!    returns a [`Verdict`] decides the token type, or drops the lexeme with
//!    [`Verdict::Skip`]. Nothing claiming a lexeme is an error.
//!
//! Because later classifiers shadow earlier ones, a grammar can be extended
//! by registering more classifiers: a dialect adds keywords on top of a base
//! grammar without touching it.
//!
//! # Example Usage
//!
//! ```
//! use lexis_lex::{Category, LexemeTable, Lexer, StateHandle, Verdict};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Tt { Name, Let, Num, Eq }
//!
//! let mut lexer = Lexer::new("let x = 42");
//! lexer.register(Category::Identifier, |_: &str, _: &mut StateHandle| Some(Verdict::Emit(Tt::Name)));
//! lexer.register_classifier(Category::Identifier, LexemeTable::new().entry("let", Tt::Let));
//! lexer.register(Category::Number, |_: &str, _: &mut StateHandle| Some(Verdict::Emit(Tt::Num)));
//! lexer.register_classifier(Category::Operator, LexemeTable::new().entry("=", Tt::Eq));
//!
//! let tokens = lexer.scan().unwrap();
//! let types: Vec<Tt> = tokens.iter().map(|t| *t.ty()).collect();
//! assert_eq!(types, [Tt::Let, Tt::Name, Tt::Eq, Tt::Num]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Categories, verdicts, decoded values, and tokens
//! - [`registry`] - Classifier trait, chains, token sets, and lexeme tables
//! - [`state`] - Lexer state shared with classifiers
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes that decide lexeme shapes
//! - [`config`] - Engine-level configuration
//! - [`error`] - Error types
//!
//! # Lexeme Shapes
//!
//! - **Identifier**: starts with a letter, `_` or `'`; continues with letters,
//!   digits, `_` or `'`.
//! - **Number**: an ASCII digit followed by digits and `_`/`'` separators.
//!   Decoded to [`Value::Int`].
//! - **String**: `"` to the next unescaped `"`. Decoded to [`Value::Str`].
//! - **Operator**: the longest run of anything else. A newline is always a
//!   single operator lexeme of its own, so grammars decide whether line
//!   breaks matter.
//!
//! Line comments start with a two-character marker (`--` by default, see
//! [`LexerConfig`]) and run to the end of the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod registry;
pub mod state;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{ConfigError, LexError, Result};
pub use lexer::Lexer;
pub use lexis_util::Span;
pub use registry::{Classifier, ClassifierChain, LexemeTable, Registry, TokenSet};
pub use state::{LexerState, StateHandle};
pub use token::{Category, Token, Value, Verdict};
