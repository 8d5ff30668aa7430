//! Focus tree domain model

pub mod container;
pub mod focus;
pub mod relations;

pub use container::FociGridContainer;
pub use focus::{Focus, DEFAULT_COST};
pub use relations::{MutualExclusionEdge, PrerequisiteSet};
