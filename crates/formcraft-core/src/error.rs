//! Error types for formcraft

use thiserror::Error;

use crate::domain::services::validation::{FieldViolation, Violation};
use crate::domain::value_objects::{FieldId, FieldType, FormId, ValueShape};
use crate::ports::storage::StorageError;

/// Formcraft error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormsError {
    /// Field type name outside the fixed palette
    #[error("invalid field type: {0}")]
    InvalidFieldType(String),

    /// No field with this id in the form under edit
    #[error("field not found: {0}")]
    FieldNotFound(FieldId),

    /// Reorder index outside `[0, len)`
    #[error("index {index} out of range for {len} fields")]
    IndexOutOfRange { index: usize, len: usize },

    /// Required field left blank at submission time
    #[error("required field is empty: {label}")]
    RequiredFieldEmpty { field_id: FieldId, label: String },

    /// Submitted value breaks a declared constraint
    #[error("{label}: {violation}")]
    ConstraintViolation {
        field_id: FieldId,
        label: String,
        violation: Violation,
    },

    /// Every violation found when validation collects instead of failing fast
    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<FieldViolation>),

    /// Submitted value has the wrong shape for the field type
    #[error("field {field_id} expects a {expected} value")]
    ValueShapeMismatch { field_id: FieldId, expected: ValueShape },

    /// Property does not apply to this field type
    #[error("{property} does not apply to {field_type} fields")]
    InapplicableProperty {
        field_type: FieldType,
        property: &'static str,
    },

    /// Option index or value not declared on the field
    #[error("invalid option {value:?} for field {field_id}")]
    InvalidOption { field_id: FieldId, value: String },

    /// No persisted definition with this id
    #[error("form not found: {0}")]
    FormNotFound(FormId),

    /// Durable storage refused the read or write
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Configuration could not be read or parsed
    #[error("config error: {0}")]
    Config(String),
}

impl From<StorageError> for FormsError {
    fn from(err: StorageError) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

impl FormsError {
    /// Store-level errors that leave state untouched and can be ignored by the caller
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FieldNotFound(_) | Self::IndexOutOfRange { .. } | Self::InvalidOption { .. }
        )
    }
}

/// Result type for formcraft
pub type Result<T> = std::result::Result<T, FormsError>;
