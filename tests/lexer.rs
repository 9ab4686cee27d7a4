
#[cfg(test)]
mod lexer {
    use pbrt2prc::pbrtparser::lexer::Lexer;
    use pbrt2prc::pbrtparser::tokens::Tokens;
    use pbrt2prc::core::diagnostic::DiagnosticKind;

    fn word(s: &str) -> Tokens {
        Tokens::Word(s.to_owned())
    }

    #[test]
    fn tokenizes_a_directive() {
        let toks: Vec<Tokens> = Lexer::new("Shape \"sphere\" \"float radius\" [ 2.5 ] # trailing")
            .map(|(_, t)| t)
            .collect();

        assert_eq!(toks, vec![
            word("Shape"),
            Tokens::STR("sphere".to_owned()),
            Tokens::STR("float radius".to_owned()),
            Tokens::LeftBracket,
            word("2.5"),
            Tokens::RightBracket
        ]);
    }

    #[test]
    fn escapes_are_resolved() {
        let toks: Vec<Tokens> = Lexer::new(r#""a\"b\\c\td""#).map(|(_, t)| t).collect();

        assert_eq!(toks, vec![Tokens::STR("a\"b\\c\td".to_owned())]);
    }

    #[test]
    fn invalid_escape_is_reported_and_kept() {
        let mut lexer = Lexer::new(r#""a\qb" WorldBegin"#);
        let toks: Vec<Tokens> = lexer.by_ref().map(|(_, t)| t).collect();
        let diags = lexer.take_diagnostics();

        assert_eq!(toks, vec![Tokens::STR("aqb".to_owned()), word("WorldBegin")]);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::Lexical);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert_eq!(Lexer::new("  # only a comment\n\n").count(), 0);
    }
}
