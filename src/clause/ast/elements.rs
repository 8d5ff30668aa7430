//! Clause node elements

pub mod assignation;
pub mod block;
pub mod code_struct;
pub mod comment;
pub mod script;
pub mod value;

pub use assignation::{Assignation, Operator};
pub use block::Block;
pub use code_struct::{CodeStruct, NodeKind};
pub use comment::Comment;
pub use script::Script;
pub use value::Value;
