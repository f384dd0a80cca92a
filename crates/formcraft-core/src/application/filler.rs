//! Form filler session
//!
//! Holds one filler's answers for a persisted definition until they submit.

use crate::application::recorder::SubmissionRecorder;
use crate::application::repository::FormRepository;
use crate::domain::aggregates::{FieldValue, FormData, FormDefinition, Submission};
use crate::domain::value_objects::{FieldId, FormId, ValueShape};
use crate::error::{FormsError, Result};

pub struct FormFiller {
    definition: FormDefinition,
    data: FormData,
    recorder: SubmissionRecorder,
}

impl FormFiller {
    /// Load the definition addressed by `form_id` and seed blank answers
    pub fn open(repo: &FormRepository, recorder: SubmissionRecorder, form_id: &FormId) -> Result<Self> {
        let definition = repo
            .find_form(form_id)?
            .ok_or_else(|| FormsError::FormNotFound(form_id.clone()))?;
        Ok(Self::with_definition(definition, recorder))
    }

    pub fn with_definition(definition: FormDefinition, recorder: SubmissionRecorder) -> Self {
        let data = definition.blank_form_data();
        Self {
            definition,
            data,
            recorder,
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// A form without fields cannot be filled
    pub fn is_empty(&self) -> bool {
        self.definition.fields.is_empty()
    }

    /// Set the answer of a single-value field
    pub fn set_value(&mut self, field_id: &FieldId, value: impl Into<String>) -> Result<()> {
        self.expect_shape(field_id, ValueShape::Single)?;
        self.data
            .insert(field_id.clone(), FieldValue::Single(value.into()));
        Ok(())
    }

    /// Check or uncheck one box of a checkbox group
    ///
    /// Only declared option values can be checked.
    pub fn toggle_option(&mut self, field_id: &FieldId, value: &str, checked: bool) -> Result<()> {
        self.expect_shape(field_id, ValueShape::Multiple)?;
        let declared = self
            .definition
            .field(field_id)
            .is_some_and(|field| field.has_option_value(value));
        if checked && !declared {
            return Err(FormsError::InvalidOption {
                field_id: field_id.clone(),
                value: value.to_string(),
            });
        }
        let entry = self
            .data
            .entry(field_id.clone())
            .or_insert_with(|| FieldValue::Multiple(Vec::new()));
        if let FieldValue::Multiple(selected) = entry {
            let present = selected.iter().any(|v| v == value);
            if checked && !present {
                selected.push(value.to_string());
            } else if !checked {
                selected.retain(|v| v != value);
            }
        }
        Ok(())
    }

    /// Validate and record; answers reset to blank after a successful submit
    pub fn submit(&mut self) -> Result<Submission> {
        let submission = self.recorder.submit(&self.definition, self.data.clone())?;
        self.data = self.definition.blank_form_data();
        Ok(submission)
    }

    fn expect_shape(&self, field_id: &FieldId, expected: ValueShape) -> Result<()> {
        let field = self
            .definition
            .field(field_id)
            .ok_or_else(|| FormsError::FieldNotFound(field_id.clone()))?;
        if field.field_type().value_shape() == expected {
            Ok(())
        } else {
            Err(FormsError::ValueShapeMismatch {
                field_id: field_id.clone(),
                expected: field.field_type().value_shape(),
            })
        }
    }
}
