//! Token definitions.
//!
//! The engine does not define a token-type enumeration of its own. Every
//! grammar brings its own type `T`, and the engine only ever compares,
//! clones, and stores it.

use std::fmt;

use lexis_util::Span;

/// The four lexeme categories, each backed by its own classifier chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Names and keywords
    Identifier,
    /// Integer literals
    Number,
    /// Quoted string literals
    String,
    /// Punctuation runs and newlines
    Operator,
}

impl Category {
    /// All categories in dispatch order
    pub const ALL: [Category; 4] = [
        Category::Identifier,
        Category::Number,
        Category::String,
        Category::Operator,
    ];

    /// Human-readable category name used in error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Identifier => "identifier",
            Category::Number => "number",
            Category::String => "string",
            Category::Operator => "operator",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict<T> {
    /// Emit a token of the given type
    Emit(T),
    /// Consume the lexeme without producing a token
    Skip,
}

/// A decoded literal value carried by number and string tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Integer literal with separators stripped
    Int(u64),
    /// String literal with escapes applied and quotes removed
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A classified, positioned unit of lexical output.
///
/// Tokens are immutable once emitted; fields are exposed through accessors.
///
/// # Example
///
/// ```
/// use lexis_lex::{Category, Lexer, Value, Verdict};
///
/// let mut lexer = Lexer::new("\"hi\"");
/// lexer.register(Category::String, |_: &str, _: &mut lexis_lex::StateHandle| {
///     Some(Verdict::Emit("str"))
/// });
///
/// let tokens = lexer.scan().unwrap();
/// assert_eq!(tokens[0].ty(), &"str");
/// assert_eq!(tokens[0].lexeme(), "\"hi\"");
/// assert_eq!(tokens[0].value(), Some(&Value::Str("hi".to_string())));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<T> {
    ty: T,
    lexeme: String,
    span: Span,
    value: Option<Value>,
}

impl<T> Token<T> {
    /// Creates a token. Used by the emitter and by tests that build
    /// expected token streams.
    pub fn new(ty: T, lexeme: impl Into<String>, span: Span, value: Option<Value>) -> Self {
        Self {
            ty,
            lexeme: lexeme.into(),
            span,
            value,
        }
    }

    /// The grammar-defined token type.
    #[inline]
    pub fn ty(&self) -> &T {
        &self.ty
    }

    /// The raw source text of the token.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The byte range the token occupies in the source.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The decoded literal, if any.
    #[inline]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Consumes the token, returning its type.
    #[inline]
    pub fn into_ty(self) -> T {
        self.ty
    }
}

impl<T: fmt::Debug> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?}", self.ty)?;
        if !self.lexeme.is_empty() {
            write!(f, " {:?}", self.lexeme)?;
        }
        if let Some(value) = &self.value {
            write!(f, " {value}")?;
        }
        f.write_str(">")
    }
}
