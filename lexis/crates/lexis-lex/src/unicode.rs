//! Character classes used by the scanners.
//!
//! The classes are fixed by the engine: grammars decide what a lexeme means,
//! never where it ends.

/// Checks if a character is skippable whitespace.
///
/// Newline is deliberately excluded: it reaches the operator chain so a
/// grammar can decide whether it is significant.
///
/// # Example
///
/// ```
/// use lexis_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\r'));
/// assert!(!is_whitespace('\n'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() && c != '\n'
}

/// Checks if a character is valid as the start of an identifier.
///
/// Valid identifier start characters:
/// - Unicode letters
/// - Underscore: _
/// - Apostrophe: '
///
/// # Example
///
/// ```
/// use lexis_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('\''));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c == '\'' || c.is_alphabetic()
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// All start characters plus any Unicode numeric character.
///
/// # Example
///
/// ```
/// use lexis_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('x'));
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('\''));
/// assert!(!is_ident_continue('-'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '\'' || c.is_alphanumeric()
}

/// Checks if a character can start a number literal.
#[inline]
pub fn is_number_start(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can continue a number literal.
///
/// Digits plus the separators `_` and `'`, which are dropped when the
/// literal is decoded.
///
/// # Example
///
/// ```
/// use lexis_lex::unicode::is_number_continue;
///
/// assert!(is_number_continue('7'));
/// assert!(is_number_continue('_'));
/// assert!(is_number_continue('\''));
/// assert!(!is_number_continue('a'));
/// ```
#[inline]
pub fn is_number_continue(c: char) -> bool {
    c.is_ascii_digit() || is_number_separator(c)
}

/// Checks if a character is a digit separator inside a number literal.
#[inline]
pub fn is_number_separator(c: char) -> bool {
    c == '_' || c == '\''
}

/// Checks if a character may appear inside an operator run.
///
/// Anything that is not whitespace (newline included), an identifier
/// character, a digit, or a string quote.
///
/// # Example
///
/// ```
/// use lexis_lex::unicode::is_operator_char;
///
/// assert!(is_operator_char('>'));
/// assert!(is_operator_char('('));
/// assert!(!is_operator_char('\n'));
/// assert!(!is_operator_char('"'));
/// assert!(!is_operator_char('_'));
/// ```
#[inline]
pub fn is_operator_char(c: char) -> bool {
    !(c.is_whitespace() || is_ident_continue(c) || c.is_ascii_digit() || c == '"')
}
