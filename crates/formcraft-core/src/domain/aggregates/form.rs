//! Form definition aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::field::Field;
use crate::domain::aggregates::submission::{FieldValue, FormData};
use crate::domain::value_objects::{FieldId, FormId, ValueShape};

pub const DEFAULT_TITLE: &str = "Untitled Form";

/// Persisted form: title plus ordered fields
///
/// Field order is render and fill order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    pub id: FormId,
    pub title: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<DateTime<Utc>>,
}

impl FormDefinition {
    /// Fresh untitled form with a new id, never saved
    pub fn untitled() -> Self {
        Self {
            id: FormId::new(),
            title: DEFAULT_TITLE.to_string(),
            fields: Vec::new(),
            last_saved: None,
        }
    }

    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn field_mut(&mut self, id: &FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id() == id)
    }

    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    /// Blank answers for every field: empty list for checkbox groups, empty string otherwise
    pub fn blank_form_data(&self) -> FormData {
        self.fields
            .iter()
            .map(|f| {
                let blank = match f.field_type().value_shape() {
                    ValueShape::Multiple => FieldValue::Multiple(Vec::new()),
                    ValueShape::Single => FieldValue::Single(String::new()),
                };
                (f.id().clone(), blank)
            })
            .collect()
    }
}

impl Default for FormDefinition {
    fn default() -> Self {
        Self::untitled()
    }
}
