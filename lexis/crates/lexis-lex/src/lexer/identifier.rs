//! Identifier and keyword lexing.

use std::fmt;

use crate::error::Result;
use crate::token::{Category, Token};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<T: fmt::Debug> Lexer<T> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of identifier characters and hands it to the
    /// identifier chain. Whether it is a keyword, a contextual keyword, or a
    /// plain name is entirely up to the registered classifiers.
    pub(crate) fn lex_identifier(&mut self) -> Result<Option<Token<T>>> {
        self.cursor.advance_while(is_ident_continue);
        let (lexeme, span) = self.cursor.consume();
        let verdict = self.classify(Category::Identifier, &lexeme, span)?;
        Ok(self.emit(verdict, lexeme, span, None))
    }
}
