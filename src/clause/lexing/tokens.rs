//! Token definitions for the clause language
//!
//! The tokens are defined using the logos derive macro. Words are deliberately loose: any run
//! of characters that is not whitespace, a brace, an operator, a quote or a comment marker is
//! a word, which covers identifiers, numbers, dates, scoped references (`event_target:foo`)
//! and variables (`@cost`).
use logos::Logos;
use std::fmt;

/// All possible tokens in a clause document
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Operators
    #[token("=")]
    Equals,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,

    /// A quoted string, quotes included
    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice().to_string())]
    Quoted(String),

    /// Comment text without the leading `#`
    #[regex(r"#[^\n]*", |lex| lex.slice()[1..].trim_end_matches('\r').to_string())]
    Comment(String),

    #[regex(r#"[^ \t\r\n\f{}=<>#"]+"#, |lex| lex.slice().to_string())]
    Word(String),
}

impl Token {
    /// Check if this token can be used as a key or a literal value
    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Word(_) | Token::Quoted(_))
    }

    /// Check if this token is a comparison or assignment operator
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Equals
                | Token::Less
                | Token::Greater
                | Token::LessEqual
                | Token::GreaterEqual
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenBrace => write!(f, "'{{'"),
            Token::CloseBrace => write!(f, "'}}'"),
            Token::Equals => write!(f, "'='"),
            Token::Less => write!(f, "'<'"),
            Token::Greater => write!(f, "'>'"),
            Token::LessEqual => write!(f, "'<='"),
            Token::GreaterEqual => write!(f, "'>='"),
            Token::Quoted(text) => write!(f, "{}", text),
            Token::Comment(text) => write!(f, "#{}", text),
            Token::Word(text) => write!(f, "'{}'", text),
        }
    }
}
