//! Value Objects module
//!
//! Immutable domain primitives shared by the builder and the filler.

pub mod field_type;
pub mod ids;

pub use field_type::{FieldCapabilities, FieldType, ValueShape};
pub use ids::{FieldId, FormId, SubmissionId};

use serde::{Deserialize, Serialize};

/// One selectable choice of a dropdown, checkbox group or radio group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Default entry seeded at position `n` (1-based): value and label are both `Option n`
    pub fn numbered(n: usize) -> Self {
        let text = format!("Option {}", n);
        Self::new(text.clone(), text)
    }
}
