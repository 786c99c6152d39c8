//! Route contract extraction from annotation-mapped controllers.
//!
//! Two-stage text recognizer: `annotations` isolates annotation spans,
//! `path_args` pulls string literals out of a span. Neither builds a
//! syntax tree; anything they cannot classify contributes nothing.

pub mod annotations;
pub mod compose;
pub mod path_args;
pub mod spring;
pub mod table;
pub mod types;

pub use spring::SpringExtractor;
pub use types::{AnnotationKind, AnnotationMatch, FileAnnotations, PathSet};
