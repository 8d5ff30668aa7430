//! Error types for clause analysis

use chumsky::error::Simple;
use std::ops::Range;
use thiserror::Error;

use crate::clause::lexing::Token;

/// Errors raised while turning text into clauses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// Input that matches no token
    #[error("unrecognised input {fragment:?} at bytes {}..{}", span.start, span.end)]
    Lex { span: Range<usize>, fragment: String },

    /// Tokens that do not form clauses
    #[error("syntax error at bytes {}..{}: {message}", span.start, span.end)]
    Syntax { span: Range<usize>, message: String },

    /// Well-formed text whose clauses do not fit the node being re-analysed
    #[error("unexpected clause shape: {0}")]
    Shape(String),
}

impl ScriptError {
    /// Keep the first parser error; later ones are usually consequences of it.
    pub(crate) fn from_parser_errors(errors: Vec<Simple<Token>>) -> Self {
        match errors.into_iter().next() {
            Some(error) => ScriptError::Syntax {
                span: error.span(),
                message: error.to_string(),
            },
            None => ScriptError::Syntax {
                span: 0..0,
                message: "unknown parser failure".to_string(),
            },
        }
    }
}
