//! AST traits - Common interface for uniform node access

/// Common interface for all clause nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;

    /// The name a structural query matches against: the literal text of a value, the key of
    /// an assignation, the tag of a block. Comments have none.
    fn key(&self) -> Option<&str>;

    /// Render the node as source text at the given depth, one tab per level. The output
    /// always ends with a newline.
    fn render(&self, depth: usize) -> String;
}

/// Leading whitespace for a given depth
pub(crate) fn indentation(depth: usize) -> String {
    "\t".repeat(depth)
}
