//! Aggregates module

pub mod field;
pub mod form;
pub mod submission;

pub use field::{Field, FieldPatch, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use form::{FormDefinition, DEFAULT_TITLE};
pub use submission::{FieldValue, FormData, Submission};
