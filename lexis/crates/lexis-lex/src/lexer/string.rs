//! String literal lexing.
//!
//! A string runs from an opening `"` to the next unescaped `"`. The lexeme
//! keeps both quotes and every backslash as written; the decoded value drops
//! the quotes and resolves escapes. Raw newlines are allowed inside a string.
//!
//! Escape decoding goes through the lexer state: a backslash switches to
//! [`LexerState::EscapeInProgress`], the next character is decoded as one unit,
//! and the state returns to whatever it was before the backslash.
//!
//! | Escape | Decoded              |
//! |--------|----------------------|
//! | `\n`   | line feed            |
//! | `\r`   | carriage return      |
//! | `\c`   | `c`, for any other c |

use std::fmt;

use crate::error::{LexError, Result};
use crate::state::LexerState;
use crate::token::{Category, Token, Value};
use crate::Lexer;

impl<T: fmt::Debug> Lexer<T> {
    /// Lexes a string literal starting at the opening quote.
    pub(crate) fn lex_string(&mut self) -> Result<Option<Token<T>>> {
        let start = self.cursor.position();
        let entered = self.state.get();
        let mut value = String::new();

        // Skip opening quote
        let mut current = self.cursor.advance();

        loop {
            let Some(c) = current else {
                self.state.restore(entered);
                return Err(LexError::UnterminatedString { start });
            };

            if self.state.is(LexerState::EscapeInProgress) {
                value.push(decode_escape(c));
                self.state.end_escape();
            } else if c == '"' {
                self.cursor.advance();
                break;
            } else if c == '\\' {
                self.state.begin_escape();
            } else {
                value.push(c);
            }

            current = self.cursor.advance();
        }

        let (lexeme, span) = self.cursor.consume();
        let verdict = self.classify(Category::String, &lexeme, span)?;
        Ok(self.emit(verdict, lexeme, span, Some(Value::Str(value))))
    }
}

/// Decodes the character following a backslash.
fn decode_escape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        other => other,
    }
}
