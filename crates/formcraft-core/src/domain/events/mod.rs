//! Builder events
//!
//! Raised by the form store on every mutation and drained by the presentation layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::{FieldId, FieldType, FormId};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum BuilderEvent {
    SessionStarted { form_id: FormId, loaded: bool },
    TitleChanged { form_id: FormId, title: String },
    FieldAdded { field_id: FieldId, field_type: FieldType, index: usize },
    FieldUpdated { field_id: FieldId },
    FieldRemoved { field_id: FieldId, index: usize },
    FieldMoved { field_id: FieldId, from: usize, to: usize },
    SelectionChanged { field_id: Option<FieldId> },
    FormSaved { form_id: FormId, saved_at: DateTime<Utc> },
    SaveFailed { form_id: FormId, reason: String },
    FormDeleted { form_id: FormId, was_current: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_with_tag() {
        let event = BuilderEvent::FieldMoved {
            field_id: FieldId::from("f1"),
            from: 0,
            to: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "FieldMoved");
        assert_eq!(json["field_id"], "f1");
        assert_eq!(json["to"], 2);
    }
}
