//! Shared fixtures for lexis-lex integration tests.
//!
//! The reference grammar is a small expression language: keywords, a
//! `for all` / `for any` contextual qualifier, integer and string literals,
//! arithmetic and comparison operators, and significant newlines.

#![allow(dead_code)]

use lexis_lex::{Lexer, LexerState, StateHandle, Token, TokenSet, Verdict};

/// Token types of the reference grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tt {
    Name,
    Number,
    String,
    Newline,

    Is,
    Let,
    Val,
    Var,
    Set,
    Type,

    Return,
    Break,
    Continue,
    Then,

    Do,
    End,
    If,
    Else,
    For,
    All,
    Any,
    In,
    While,

    And,
    Or,
    Xor,
    Not,
    Mod,

    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    Plus,
    Minus,
    Star,
    Slash,
    StarStar,

    Equals,
    SlashEquals,
    Greater,
    GreaterEquals,
    Less,
    LessEquals,
}

/// The reference grammar as a token set.
pub struct Reference;

impl TokenSet<Tt> for Reference {
    fn ident(&self, lexeme: &str, state: &mut StateHandle) -> Option<Verdict<Tt>> {
        let ty = match (lexeme, state.get()) {
            ("is", _) => Tt::Is,
            ("let", _) => Tt::Let,
            ("val", _) => Tt::Val,
            ("var", _) => Tt::Var,
            ("set", _) => Tt::Set,
            ("type", _) => Tt::Type,
            ("return", _) => Tt::Return,
            ("break", _) => Tt::Break,
            ("continue", _) => Tt::Continue,
            ("then", _) => Tt::Then,
            ("do", _) => Tt::Do,
            ("end", _) => Tt::End,
            ("if", _) => Tt::If,
            ("else", _) => Tt::Else,
            ("for", _) => {
                state.arm_qualifier();
                Tt::For
            },
            ("all", LexerState::ContextualQualifier) => {
                state.reset();
                Tt::All
            },
            ("any", LexerState::ContextualQualifier) => {
                state.reset();
                Tt::Any
            },
            ("in", _) => Tt::In,
            ("while", _) => Tt::While,
            ("and", _) => Tt::And,
            ("or", _) => Tt::Or,
            ("xor", _) => Tt::Xor,
            ("not", _) => Tt::Not,
            ("mod", _) => Tt::Mod,
            _ => Tt::Name,
        };
        Some(Verdict::Emit(ty))
    }

    fn number(&self, _lexeme: &str, _state: &mut StateHandle) -> Option<Verdict<Tt>> {
        Some(Verdict::Emit(Tt::Number))
    }

    fn string(&self, _lexeme: &str, _state: &mut StateHandle) -> Option<Verdict<Tt>> {
        Some(Verdict::Emit(Tt::String))
    }

    fn operator(&self, lexeme: &str, _state: &mut StateHandle) -> Option<Verdict<Tt>> {
        let ty = match lexeme {
            "\n" => Tt::Newline,
            "(" => Tt::LParen,
            ")" => Tt::RParen,
            "[" => Tt::LBracket,
            "]" => Tt::RBracket,
            "{" => Tt::LBrace,
            "}" => Tt::RBrace,
            "+" => Tt::Plus,
            "-" => Tt::Minus,
            "*" => Tt::Star,
            "**" => Tt::StarStar,
            "/" => Tt::Slash,
            "/=" => Tt::SlashEquals,
            "=" => Tt::Equals,
            ">" => Tt::Greater,
            ">=" => Tt::GreaterEquals,
            "<" => Tt::Less,
            "<=" => Tt::LessEquals,
            _ => return None,
        };
        Some(Verdict::Emit(ty))
    }
}

/// Creates a lexer with the reference grammar installed.
pub fn reference_lexer(source: &str) -> Lexer<Tt> {
    let mut lexer = Lexer::new(source);
    lexer.install(Reference);
    lexer
}

/// Scans `source` with the reference grammar.
pub fn scan(source: &str) -> Vec<Token<Tt>> {
    reference_lexer(source)
        .scan()
        .unwrap_or_else(|err| panic!("scan of {source:?} failed: {err}"))
}

/// Scans `source` and keeps only the token types.
pub fn types(source: &str) -> Vec<Tt> {
    scan(source).into_iter().map(Token::into_ty).collect()
}

/// Asserts that every token's span slices exactly its lexeme out of `source`
/// and that spans are strictly ordered and disjoint.
pub fn assert_spans_reconstruct<T: std::fmt::Debug>(source: &str, tokens: &[Token<T>]) {
    let mut last_end = 0;
    for token in tokens {
        let span = token.span();
        assert!(
            span.start >= last_end,
            "span {span:?} of {token} overlaps the previous token"
        );
        assert_eq!(
            span.slice(source),
            Some(token.lexeme()),
            "span {span:?} does not slice its lexeme"
        );
        last_end = span.end;
    }
}
