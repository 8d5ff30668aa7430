//! Per-focus faults raised while reading a focus block

use thiserror::Error;

/// A fault that drops one focus during deserialization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    /// The block does not have the shape of a focus: no usable id, or a scalar field given
    /// as a block
    #[error("malformed syntax: {0}")]
    MalformedSyntax(String),

    #[error("invalid integer {value:?} for '{field}'")]
    InvalidInteger { field: &'static str, value: String },
}

impl FocusError {
    /// The diagnostic line reported when a focus is dropped for this fault.
    ///
    /// Structural faults carry their message; any other fault reports the id alone.
    pub fn diagnostic(&self, focus_id: &str) -> String {
        match self {
            FocusError::MalformedSyntax(_) => format!("focus '{}' dropped: {}", focus_id, self),
            FocusError::InvalidInteger { .. } => format!("focus '{}' dropped", focus_id),
        }
    }
}
