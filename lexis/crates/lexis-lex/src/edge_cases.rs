//! Edge case tests for lexis-lex

#[cfg(test)]
mod tests {
    use crate::{Category, LexError, LexemeTable, Lexer, LexerState, StateHandle, Token, Value, Verdict};
    use lexis_util::Span;

    /// Registers a catch-all classifier on every chain that tags tokens with
    /// their category.
    fn lexer(source: &str) -> Lexer<Category> {
        let mut lexer = Lexer::new(source);
        for category in Category::ALL {
            lexer.register(category, move |_: &str, _: &mut StateHandle| {
                Some(Verdict::Emit(category))
            });
        }
        lexer
    }

    fn lex_all(source: &str) -> Vec<Token<Category>> {
        lexer(source).scan().unwrap()
    }

    fn lexemes(source: &str) -> Vec<String> {
        lex_all(source)
            .iter()
            .map(|t| t.lexeme().to_string())
            .collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t, [Token::new(Category::Identifier, "x", Span::new(0, 1), None)]);
    }

    #[test]
    fn test_edge_final_char_of_every_shape() {
        assert_eq!(lexemes("abc"), ["abc"]);
        assert_eq!(lexemes("123"), ["123"]);
        assert_eq!(lexemes("\"s\""), ["\"s\""]);
        assert_eq!(lexemes(">="), [">="]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("let {} = 1", name));
        assert_eq!(t[1].lexeme(), name);
        assert_eq!(t[1].span(), Span::new(4, 10004));
    }

    #[test]
    fn test_edge_unicode_identifiers() {
        assert_eq!(lexemes("café naïve"), ["café", "naïve"]);
    }

    #[test]
    fn test_edge_non_ascii_digit() {
        assert_eq!(
            lexer("x \u{0663}").scan(),
            Err(LexError::UnexpectedCharacter {
                ch: '\u{0663}',
                position: 2,
            })
        );
    }

    #[test]
    fn test_edge_non_ascii_digit_continues_identifier() {
        assert_eq!(lexemes("x\u{0663}"), ["x\u{0663}"]);
    }

    #[test]
    fn test_edge_bom_is_skipped() {
        let t = lex_all("\u{FEFF}x");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].span(), Span::new(3, 4));
    }

    #[test]
    fn test_edge_bom_after_start_is_an_operator() {
        assert_eq!(lexemes("x\u{FEFF}"), ["x", "\u{FEFF}"]);
    }

    #[test]
    fn test_edge_backslash_at_eof() {
        assert_eq!(
            lexer("x \"a\\").scan(),
            Err(LexError::UnterminatedString { start: 2 })
        );
    }

    #[test]
    fn test_edge_integer_bounds() {
        let t = lex_all("18446744073709551615");
        assert_eq!(t[0].value(), Some(&Value::Int(u64::MAX)));

        assert!(matches!(
            lexer("18446744073709551616").scan(),
            Err(LexError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_edge_unclaimed_number_reports_before_overflow() {
        let mut lexer: Lexer<u8> = Lexer::new("99999999999999999999");
        assert!(matches!(
            lexer.scan(),
            Err(LexError::UnrecognizedToken { category: Category::Number, .. })
        ));
    }

    #[test]
    fn test_edge_brackets_munch() {
        assert_eq!(lexemes("f((x))"), ["f", "((", "x", "))"]);
    }

    #[test]
    fn test_edge_number_then_ident() {
        assert_eq!(lexemes("3x"), ["3", "x"]);
    }

    #[test]
    fn test_edge_separator_leading_is_ident() {
        let t = lex_all("_1");
        assert_eq!(*t[0].ty(), Category::Identifier);
    }

    #[test]
    fn test_edge_comment_directly_after_token() {
        assert_eq!(lexemes("x--y\nz"), ["x", "\n", "z"]);
    }

    #[test]
    fn test_edge_triple_dash() {
        assert!(lex_all("---").is_empty());
    }

    #[test]
    fn test_edge_crlf() {
        assert_eq!(lexemes("a\r\nb"), ["a", "\n", "b"]);
    }

    #[test]
    fn test_edge_skip_only_input() {
        let mut lexer: Lexer<u8> = Lexer::new("; ; ;");
        lexer.register_classifier(Category::Operator, LexemeTable::new().skip(";"));
        assert!(lexer.scan().unwrap().is_empty());
    }

    #[test]
    fn test_edge_error_resets_string_state() {
        let mut lexer = lexer("\"\\");
        assert!(lexer.scan().is_err());
        assert_eq!(lexer.state(), LexerState::Default);
    }

    #[test]
    fn test_edge_qualifier_reset_on_any_identifier() {
        let mut lexer = lexer("for x");
        lexer.register_classifier(
            Category::Identifier,
            LexemeTable::new().entry_then("for", Category::Identifier, LexerState::ContextualQualifier),
        );
        lexer.scan().unwrap();
        assert_eq!(lexer.state(), LexerState::Default);
    }

    #[test]
    fn test_edge_qualifier_survives_non_identifiers() {
        let mut lexer = lexer("for (");
        lexer.register_classifier(
            Category::Identifier,
            LexemeTable::new().entry_then("for", Category::Identifier, LexerState::ContextualQualifier),
        );
        lexer.scan().unwrap();
        assert_eq!(lexer.state(), LexerState::ContextualQualifier);
    }

    #[test]
    fn test_edge_classifier_cannot_enter_escape() {
        let mut lexer = lexer("x \"\"");
        lexer.register(Category::Identifier, |_: &str, state: &mut StateHandle| {
            state.set(LexerState::EscapeInProgress);
            Some(Verdict::Emit(Category::Identifier))
        });
        let t = lexer.scan().unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].value(), Some(&Value::Str(String::new())));
    }
}
