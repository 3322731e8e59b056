//! Character cursor for traversing source code.
//!
//! The `Cursor` owns the source buffer and tracks two byte offsets: the
//! current position and the start of the token being scanned. The text
//! between them is the pending lexeme.

use lexis_util::Span;

/// A cursor over an owned source buffer.
///
/// Positions are byte offsets and always sit on character boundaries.
///
/// # Example
///
/// ```
/// use lexis_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.current(), Some('l'));
/// cursor.advance();
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.lexeme(), "let");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    /// The source text being traversed.
    source: String,

    /// Current byte position in the source.
    position: usize,

    /// Byte position where the pending lexeme starts.
    start: usize,
}

impl Cursor {
    /// Creates a new cursor for the given source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            position: 0,
            start: 0,
        }
    }

    /// Replaces the source and rewinds both offsets.
    pub fn reset(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.position = 0;
        self.start = 0;
    }

    /// Moves back to the start of the current source.
    pub fn rewind(&mut self) {
        self.position = 0;
        self.start = 0;
    }

    /// Returns the character at the cursor, or `None` once exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis_lex::cursor::Cursor;
    ///
    /// assert_eq!(Cursor::new("a").current(), Some('a'));
    /// assert_eq!(Cursor::new("").current(), None);
    /// ```
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Returns the character after the current one without moving.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(), Some('b'));
    /// assert_eq!(Cursor::new("a").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.position..].chars();
        chars.next()?;
        chars.next()
    }

    /// Moves one character forward and returns the new current character.
    ///
    /// Stepping off the last character moves the position to the end of the
    /// buffer, so that character still belongs to the pending lexeme.
    /// Does nothing once exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.advance(), Some('b'));
    /// assert_eq!(cursor.advance(), None);
    /// assert!(cursor.is_exhausted());
    /// assert_eq!(cursor.lexeme(), "ab");
    /// ```
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        self.current()
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the remaining input begins with `pattern`.
    #[inline]
    pub fn starts_with(&self, pattern: &str) -> bool {
        self.source[self.position..].starts_with(pattern)
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte position where the pending lexeme starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the pending lexeme: the text from start to current.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.source[self.start..self.position]
    }

    /// Returns the span of the pending lexeme.
    #[inline]
    pub fn span(&self) -> Span {
        Span::point(self.start).merge(Span::point(self.position))
    }

    /// Takes the pending lexeme and its span, starting a new one at the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis_lex::cursor::Cursor;
    /// use lexis_util::Span;
    ///
    /// let mut cursor = Cursor::new(">= x");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.consume(), (">=".to_string(), Span::new(0, 2)));
    /// assert_eq!(cursor.lexeme(), "");
    /// ```
    pub fn consume(&mut self) -> (String, Span) {
        let lexeme = self.lexeme().to_owned();
        let span = self.span();
        self.start = self.position;
        (lexeme, span)
    }

    /// Drops the pending lexeme without producing anything.
    #[inline]
    pub fn skip(&mut self) {
        self.start = self.position;
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }
}
