//! Clause tree definitions
//!
//! This module provides the clause node types, the [Script] container and the structural
//! queries shared by both.
//!
//! ## Modules
//!
//! - `elements` - Value, Assignation, Block, Comment, the [CodeStruct] sum type and [Script]
//! - `search` - depth-first queries over clause slices
//! - `traits` - the [AstNode] interface every node implements
//! - `error` - error types for analysing text into clauses

pub mod elements;
pub mod error;
pub mod search;
pub mod traits;

pub use elements::{
    Assignation, Block, CodeStruct, Comment, NodeKind, Operator, Script, Value,
};
pub use error::ScriptError;
pub use traits::AstNode;
