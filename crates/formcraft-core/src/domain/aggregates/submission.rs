//! Submission record
//!
//! Immutable once recorded. Submissions are stored per owning form and never
//! reference each other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::value_objects::{FieldId, SubmissionId, ValueShape};

/// Answer to one field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    pub fn shape(&self) -> ValueShape {
        match self {
            Self::Single(_) => ValueShape::Single,
            Self::Multiple(_) => ValueShape::Multiple,
        }
    }

    /// Empty or whitespace-only text, or no selections
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Single(s) => s.trim().is_empty(),
            Self::Multiple(v) => v.is_empty(),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multiple(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(v) => Some(v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        Self::Multiple(v)
    }
}

/// Answers keyed by field id
pub type FormData = BTreeMap<FieldId, FieldValue>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub submission_id: SubmissionId,
    pub timestamp: DateTime<Utc>,
    pub form_data: FormData,
}

impl Submission {
    pub fn create(form_data: FormData, timestamp: DateTime<Utc>) -> Self {
        Self {
            submission_id: SubmissionId::new(),
            timestamp,
            form_data,
        }
    }
}
