//! Operator lexing.
//!
//! An operator lexeme is the maximal run of characters that cannot start or
//! continue anything else, so `>=` is one lexeme and `((` is one lexeme too.
//! Grammars that want single-character brackets register classifiers that
//! accept the runs they expect.

use std::fmt;

use crate::error::{LexError, Result};
use crate::token::{Category, Token};
use crate::unicode::is_operator_char;
use crate::Lexer;

impl<T: fmt::Debug> Lexer<T> {
    /// Lexes an operator run, or a single newline.
    ///
    /// The run stops before the line comment marker, so `+--` is `+`
    /// followed by a comment.
    pub(crate) fn lex_operator(&mut self) -> Result<Option<Token<T>>> {
        if self.cursor.current() == Some('\n') {
            self.cursor.advance();
        } else {
            while let Some(c) = self.cursor.current() {
                if !is_operator_char(c) || self.cursor.starts_with(&self.config.line_comment) {
                    break;
                }
                self.cursor.advance();
            }
        }

        let (lexeme, span) = self.cursor.consume();
        if lexeme.is_empty() {
            let position = self.cursor.position();
            let ch = self.cursor.current().unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { ch, position });
        }

        let verdict = self.classify(Category::Operator, &lexeme, span)?;
        Ok(self.emit(verdict, lexeme, span, None))
    }
}
