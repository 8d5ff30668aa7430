//! Focus trees
//!
//!     A focus tree is a grid of foci. A focus may require other foci (prerequisite sets)
//!     and may exclude others (mutual exclusion edges). This module converts between
//!     [FociGridContainer] and the clause [Script](crate::clause::Script) of a focus tree
//!     document in both directions.
//!
//!     Writing: [serialize] orders the foci (see [ordering]) and emits the document text.
//!     Reading: [deserialize] walks an analysed script in two passes and reports each focus
//!     it had to drop to a [DiagnosticSink].
//!
//!     Neither direction fails as a whole. Unreadable costs fall back to a default, dangling
//!     references are skipped and malformed foci are dropped one at a time.

pub mod deserializer;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod numeric;
pub mod ordering;
pub mod serializer;

pub use deserializer::{deserialize, deserialize_with, INTERNAL_SCRIPT_CLAUSES};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use error::FocusError;
pub use model::{FociGridContainer, Focus, MutualExclusionEdge, PrerequisiteSet, DEFAULT_COST};
pub use numeric::{parse_double, parse_double_with, DecimalMark, NumberConvention};
pub use ordering::{canonical_order, canonical_order_with, OrderingOptions, Satisfaction};
pub use serializer::{serialize, serialize_all, serialize_with};
