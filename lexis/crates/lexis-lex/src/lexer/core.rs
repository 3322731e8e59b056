//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the registration surface,
//! classification, token emission, and the driver loop.

use std::fmt;
use std::rc::Rc;

use lexis_util::{LineIndex, SourceMapResult, Span};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{ConfigResult, LexError, Result};
use crate::registry::{Classifier, Registry, TokenSet, TokenSetClassifier};
use crate::state::{LexerState, StateHandle};
use crate::token::{Category, Token, Value, Verdict};
use crate::unicode::{is_ident_start, is_number_start};

/// Classifier-driven lexer.
///
/// A `Lexer` owns its source, its state, and four classifier chains. The
/// chains are configuration: [`reseed`](Lexer::reseed) swaps the input and
/// resets the state but keeps every registered classifier, so one lexer can
/// serve many inputs while more classifiers are added over time.
///
/// # Example
///
/// ```
/// use lexis_lex::{Category, Lexer, StateHandle, Verdict};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Tt { Name, Num, Plus }
///
/// let mut lexer = Lexer::new("x + 1");
/// lexer.register(Category::Identifier, |_: &str, _: &mut StateHandle| Some(Verdict::Emit(Tt::Name)));
/// lexer.register(Category::Number, |_: &str, _: &mut StateHandle| Some(Verdict::Emit(Tt::Num)));
/// lexer.register(Category::Operator, |lexeme: &str, _: &mut StateHandle| {
///     (lexeme == "+").then_some(Verdict::Emit(Tt::Plus))
/// });
///
/// let types: Vec<Tt> = lexer.scan().unwrap().into_iter().map(|t| t.into_ty()).collect();
/// assert_eq!(types, [Tt::Name, Tt::Plus, Tt::Num]);
/// ```
pub struct Lexer<T> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor,

    /// Context shared with classifiers.
    pub(crate) state: StateHandle,

    /// Classifier chains, one per category.
    registry: Registry<T>,

    /// Engine-level settings.
    pub(crate) config: LexerConfig,
}

impl<T: fmt::Debug> Lexer<T> {
    /// Creates a lexer with the default configuration and empty chains.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: StateHandle::new(),
            registry: Registry::new(),
            config: LexerConfig::default(),
        }
    }

    /// Creates a lexer with a validated configuration.
    pub fn with_config(source: impl Into<String>, config: LexerConfig) -> ConfigResult<Self> {
        config.validate()?;
        let mut lexer = Self::new(source);
        lexer.config = config;
        Ok(lexer)
    }

    /// Replaces the input, resetting the cursor and state.
    ///
    /// Registered classifiers are kept.
    pub fn reseed(&mut self, source: impl Into<String>) {
        self.cursor.reset(source);
        self.state = StateHandle::new();
        log::debug!("reseeded lexer with {} bytes", self.cursor.source().len());
    }

    /// Registers a classifier function for `category`.
    ///
    /// The newest registration is consulted first, so it can override what
    /// earlier classifiers say about the same lexeme.
    pub fn register<F>(&mut self, category: Category, classifier: F)
    where
        F: Fn(&str, &mut StateHandle) -> Option<Verdict<T>> + 'static,
    {
        self.registry.register(category, Box::new(classifier));
    }

    /// Registers any [`Classifier`] implementation for `category`.
    pub fn register_classifier<C>(&mut self, category: Category, classifier: C)
    where
        C: Classifier<T> + 'static,
    {
        self.registry.register(category, Box::new(classifier));
    }

    /// Registers every category of a [`TokenSet`] in one step.
    pub fn install<S>(&mut self, set: S)
    where
        S: TokenSet<T> + 'static,
    {
        let set = Rc::new(set);
        for category in Category::ALL {
            let classifier = TokenSetClassifier::new(Rc::clone(&set), category);
            self.registry.register(category, Box::new(classifier));
        }
        log::debug!("installed token set {}", std::any::type_name::<S>());
    }

    /// Returns the classifier registry.
    pub fn registry(&self) -> &Registry<T> {
        &self.registry
    }

    /// Returns the current lexer state.
    pub fn state(&self) -> LexerState {
        self.state.get()
    }

    /// Returns the configuration in effect.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Returns the source being scanned.
    pub fn source(&self) -> &str {
        self.cursor.source()
    }

    /// Converts a byte offset into a 1-based line and column.
    pub fn location(&self, offset: usize) -> SourceMapResult<(u32, u32)> {
        LineIndex::new(self.cursor.source()).line_col(offset)
    }

    /// Scans the remaining input into tokens.
    ///
    /// Whitespace and comments are skipped, then each token is dispatched by
    /// its first character: identifier start, digit, quote, and finally the
    /// operator scanner as a catch-all. The first error aborts the scan and
    /// discards every token produced so far.
    ///
    /// A failed scan rewinds the input and resets the state, so scanning
    /// again reports the same error instead of lexing the tail.
    pub fn scan(&mut self) -> Result<Vec<Token<T>>> {
        let result = self.scan_tokens();
        match &result {
            Ok(tokens) => log::debug!(
                "scanned {} tokens from {} bytes",
                tokens.len(),
                self.cursor.source().len()
            ),
            Err(err) => {
                match self.location(err.offset()) {
                    Ok((line, column)) => log::debug!("scan aborted at {line}:{column}: {err}"),
                    Err(_) => log::debug!("scan aborted: {err}"),
                }
                self.cursor.rewind();
                self.state = StateHandle::new();
            },
        }
        result
    }

    fn scan_tokens(&mut self) -> Result<Vec<Token<T>>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();
            let Some(c) = self.cursor.current() else {
                break;
            };

            let token = if is_ident_start(c) {
                self.lex_identifier()?
            } else if is_number_start(c) {
                self.lex_number()?
            } else if c == '"' {
                self.lex_string()?
            } else {
                self.lex_operator()?
            };

            if let Some(token) = token {
                log::trace!("emitted {token}");
                tokens.push(token);
            }
        }

        Ok(tokens)
    }

    /// Resolves `lexeme` through the chain for `category`.
    ///
    /// An armed contextual qualifier lasts for exactly one identifier: if no
    /// classifier touched the state while resolving that identifier, the
    /// engine returns it to [`LexerState::Default`] itself.
    pub(crate) fn classify(
        &mut self,
        category: Category,
        lexeme: &str,
        span: Span,
    ) -> Result<Verdict<T>> {
        let entered = self.state.begin_resolution();
        let verdict = self.registry.resolve(category, lexeme, &mut self.state);

        if category == Category::Identifier
            && entered == LexerState::ContextualQualifier
            && !self.state.was_written()
        {
            self.state.restore(LexerState::Default);
        }

        verdict.ok_or_else(|| LexError::UnrecognizedToken {
            category,
            lexeme: lexeme.to_owned(),
            span,
        })
    }

    /// Builds the token for a classified lexeme; skipped lexemes yield none.
    pub(crate) fn emit(
        &self,
        verdict: Verdict<T>,
        lexeme: String,
        span: Span,
        value: Option<Value>,
    ) -> Option<Token<T>> {
        match verdict {
            Verdict::Emit(ty) => Some(Token::new(ty, lexeme, span, value)),
            Verdict::Skip => None,
        }
    }
}
