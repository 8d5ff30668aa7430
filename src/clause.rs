//! Clause language
//!
//!     The clausal scripting language is a sequence of clauses. A clause is either a bare
//!     literal, a `key = value` assignation, a `key = { ... }` block, an anonymous `{ ... }`
//!     block or a `#` comment. Nothing else is structural: whitespace and line breaks only
//!     separate tokens.
//!
//! The Pipeline
//!
//!         1. Tokenization with logos. See [lexing](lexing).
//!         2. Parsing with chumsky into a flat list of [CodeStruct](ast::CodeStruct) nodes.
//!            See [parsing](parsing).
//!         3. The nodes are wrapped into a [Script](ast::Script), which is what callers query
//!            and render.
//!
//!     Rendering is the inverse: every node renders itself at an indentation depth (one tab
//!     per level), and rendering then analysing again yields an equal tree. Comments are
//!     carried along but their placement is best-effort.

pub mod ast;
pub mod lexing;
pub mod parsing;

pub use ast::{
    Assignation, AstNode, Block, CodeStruct, Comment, NodeKind, Operator, Script, ScriptError,
    Value,
};

/// Tokenize and parse a complete document. A leading byte order mark is ignored, and error
/// spans are then offsets past it.
pub fn parse_script(source: &str) -> Result<Script, ScriptError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let tokens = lexing::tokenize(source)?;
    let clauses = parsing::parse(tokens, source.len())?;
    Ok(Script::from_clauses(clauses))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let script = parse_script("\u{feff}focus_tree = { id = t }").unwrap();
        assert_eq!(script.blocks("focus_tree").count(), 1);
        assert_eq!(script, parse_script("focus_tree = { id = t }").unwrap());
    }

    #[test]
    fn test_byte_order_mark_only_at_the_start() {
        let script = parse_script("a = b\n\u{feff}c = d").unwrap();
        assert_eq!(script.child_text("a"), Some("b"));
        assert!(script.child_text("c").is_none());
    }
}
