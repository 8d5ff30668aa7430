//! # focus-tree
//!
//! Reads, edits and writes focus trees expressed in the Paradox clausal scripting language.
//!
//! File Layout
//!
//! The crate is split along the two halves of the problem:
//!
//! src/clause       The generic clause language: tokens, parser and the clause tree
//!   ├── lexing     logos tokenizer
//!   ├── parsing    chumsky parser producing a [Script](clause::Script)
//!   └── ast        clause nodes, rendering and structural queries
//! src/focus        The focus tree domain built on top of clause trees
//!   ├── model      foci, prerequisite sets, exclusion edges, containers
//!   ├── ordering   canonical emission order
//!   ├── serializer container -> script text
//!   └── deserializer script -> container (two resolution passes)
//!
//! `settings` loads layered configuration, `processor` ties everything together for the
//! command-line front end, and `testing` holds factories shared by unit and integration tests.

pub mod clause;
pub mod focus;
pub mod processor;
pub mod settings;
pub mod testing;
