//! Number literal lexing.
//!
//! Only integer literals exist at this level. Digits may be grouped with `_`
//! or `'`, which are dropped when the value is decoded: `1_000` and `1'000`
//! both decode to 1000.

use std::fmt;

use crate::error::{LexError, Result};
use crate::token::{Category, Token, Value};
use crate::unicode::{is_number_continue, is_number_separator};
use crate::Lexer;

impl<T: fmt::Debug> Lexer<T> {
    /// Lexes an integer literal.
    ///
    /// The lexeme is classified before it is decoded, so an unrecognized
    /// literal reports as such even when it would also overflow.
    pub(crate) fn lex_number(&mut self) -> Result<Option<Token<T>>> {
        self.cursor.advance_while(is_number_continue);
        let (lexeme, span) = self.cursor.consume();
        let verdict = self.classify(Category::Number, &lexeme, span)?;

        let Some(value) = decode_integer(&lexeme) else {
            return Err(LexError::IntegerOverflow { lexeme, span });
        };
        Ok(self.emit(verdict, lexeme, span, Some(Value::Int(value))))
    }
}

/// Decodes a digit run, skipping separators.
///
/// Returns `None` if the value does not fit in a `u64`.
fn decode_integer(lexeme: &str) -> Option<u64> {
    lexeme
        .chars()
        .filter(|&c| !is_number_separator(c))
        .try_fold(0u64, |acc, c| {
            let digit = u64::from(c.to_digit(10)?);
            acc.checked_mul(10)?.checked_add(digit)
        })
}
