//! Parser
//!
//!     A recursive chumsky parser over the token stream. The grammar is small enough to fit
//!     in a single combinator:
//!
//!         clauses := clause*
//!         clause  := comment
//!                  | literal operator '{' clauses '}'
//!                  | literal operator literal
//!                  | '{' clauses '}'
//!                  | literal
//!
//!     `key = { ... }` becomes a tagged [Block]. A block introduced by any other operator
//!     (`limit < { ... }` is legal, if unusual) becomes an [Assignation] holding an anonymous
//!     block so that the operator survives rendering.

use chumsky::prelude::*;
use chumsky::Stream;
use std::ops::Range;

use crate::clause::ast::{Assignation, Block, CodeStruct, Comment, Operator, ScriptError, Value};
use crate::clause::lexing::Token;

/// Type alias for parser error
type ParserError = Simple<Token>;

fn literal() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! {
        Token::Word(word) => word,
        Token::Quoted(text) => text,
    }
}

fn operator() -> impl Parser<Token, Operator, Error = ParserError> + Clone {
    select! {
        Token::Equals => Operator::Equals,
        Token::Less => Operator::Less,
        Token::Greater => Operator::Greater,
        Token::LessEqual => Operator::LessEqual,
        Token::GreaterEqual => Operator::GreaterEqual,
    }
}

/// Build the clause list parser
pub(crate) fn clauses() -> impl Parser<Token, Vec<CodeStruct>, Error = ParserError> + Clone {
    recursive(|clauses| {
        let body = clauses.delimited_by(just(Token::OpenBrace), just(Token::CloseBrace));

        let comment = select! {
            Token::Comment(text) => CodeStruct::Comment(Comment::new(text)),
        };

        let keyed_block = literal()
            .then(operator())
            .then(body.clone())
            .map(|((key, operator), children)| match operator {
                Operator::Equals => CodeStruct::Block(Block::tagged(key, children)),
                other => CodeStruct::Assignation(Assignation::with_operator(
                    key,
                    other,
                    CodeStruct::Block(Block::new(children)),
                )),
            });

        let keyed_value = literal()
            .then(operator())
            .then(literal())
            .map(|((key, operator), value)| {
                CodeStruct::Assignation(Assignation::with_operator(
                    key,
                    operator,
                    CodeStruct::Value(Value::new(value)),
                ))
            });

        let anonymous_block = body.map(|children| CodeStruct::Block(Block::new(children)));

        let bare_value = literal().map(|text| CodeStruct::Value(Value::new(text)));

        choice((
            comment,
            keyed_block,
            keyed_value,
            anonymous_block,
            bare_value,
        ))
        .repeated()
    })
}

/// Parse a token stream into top-level clauses.
///
/// `source_len` positions the end-of-input span so errors at the end of the document point
/// just past the last byte.
pub fn parse(
    tokens: Vec<(Token, Range<usize>)>,
    source_len: usize,
) -> Result<Vec<CodeStruct>, ScriptError> {
    let eoi = source_len..source_len + 1;
    clauses()
        .then_ignore(end())
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(ScriptError::from_parser_errors)
}
