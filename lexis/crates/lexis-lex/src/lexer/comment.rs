//! Whitespace and comment skipping.

use std::fmt;

use crate::unicode::is_whitespace;
use crate::Lexer;

/// Byte order mark, skipped at the very start of the source.
const BOM: char = '\u{FEFF}';

impl<T: fmt::Debug> Lexer<T> {
    /// Skips whitespace and line comments up to the next token.
    ///
    /// Newlines are not whitespace here: they end a comment and are left for
    /// the operator scanner.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        if self.cursor.position() == 0 && self.cursor.current() == Some(BOM) {
            self.cursor.advance();
        }

        loop {
            self.cursor.advance_while(is_whitespace);

            if self.cursor.starts_with(&self.config.line_comment) {
                self.cursor.advance_while(|c| c != '\n');
                continue;
            }

            break;
        }

        self.cursor.skip();
    }
}
