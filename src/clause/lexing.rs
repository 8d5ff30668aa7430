//! Lexer
//!
//!     Tokenization is done entirely by logos, based on the token definitions in
//!     [tokens](tokens). Whitespace is skipped by logos itself, so the output is only the
//!     structural tokens with the byte range of their source text.
//!
//!     The byte ranges are not needed to build clause trees, but they are carried into
//!     parser errors so a caller can point at the offending input.

pub mod tokens;

pub use tokens::Token;

use std::ops::Range;

use logos::Logos;

use crate::clause::ast::ScriptError;

/// Tokenize a source string, keeping the span of every token.
///
/// Input that matches no token (an unterminated quote, for instance) stops tokenization
/// with [ScriptError::Lex].
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, ScriptError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(ScriptError::Lex {
                    span: lexer.span(),
                    fragment: lexer.slice().to_string(),
                })
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("source to tokenize")
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_simple_assignation() {
        assert_eq!(
            kinds("id = GER_focus"),
            vec![
                Token::Word("id".to_string()),
                Token::Equals,
                Token::Word("GER_focus".to_string()),
            ]
        );
    }

    #[test]
    fn test_block_tokens() {
        assert_eq!(
            kinds("prerequisite = { focus = A }"),
            vec![
                Token::Word("prerequisite".to_string()),
                Token::Equals,
                Token::OpenBrace,
                Token::Word("focus".to_string()),
                Token::Equals,
                Token::Word("A".to_string()),
                Token::CloseBrace,
            ]
        );
    }

    #[test]
    fn test_spans_are_preserved() {
        let tokens = tokenize("x = 12").unwrap();
        assert_eq!(tokens[0].1, 0..1);
        assert_eq!(tokens[1].1, 2..3);
        assert_eq!(tokens[2].1, 4..6);
    }

    #[test]
    fn test_words_need_no_whitespace_around_braces() {
        assert_eq!(
            kinds("a={b}"),
            vec![
                Token::Word("a".to_string()),
                Token::Equals,
                Token::OpenBrace,
                Token::Word("b".to_string()),
                Token::CloseBrace,
            ]
        );
    }

    #[test]
    fn test_unterminated_quote_is_a_lex_error() {
        let error = tokenize("name = \"open").unwrap_err();
        assert!(matches!(error, ScriptError::Lex { ref span, .. } if span.start == 7));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kinds(""), vec![]);
        assert_eq!(kinds(" \t\r\n"), vec![]);
    }
}
