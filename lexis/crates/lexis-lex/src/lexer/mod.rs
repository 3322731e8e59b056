//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, classification, emission, and the driver loop
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing with escape decoding
//! - `operator` - Operator run and newline lexing
//! - `comment` - Whitespace and line comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
