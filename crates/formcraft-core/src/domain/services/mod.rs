//! Domain services

pub mod reorder;
pub mod validation;

pub use reorder::{reorder, should_reorder, DragSession, HoverGeometry};
pub use validation::{FieldViolation, SubmissionValidator, ValidationPolicy, Violation};
