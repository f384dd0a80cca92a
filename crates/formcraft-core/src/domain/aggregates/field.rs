//! Field entity
//!
//! A single form element. `id` and `field_type` are fixed at creation;
//! everything else is edited through [`FieldPatch`].

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FieldId, FieldOption, FieldType};
use crate::error::{FormsError, Result};

pub const DEFAULT_MIN_LENGTH: u32 = 0;
pub const DEFAULT_MAX_LENGTH: u32 = 255;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    id: FieldId,
    #[serde(rename = "type")]
    field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Field {
    /// Create a field with the defaults of its type
    pub fn create(field_type: FieldType) -> Self {
        let caps = field_type.capabilities();
        Self {
            id: FieldId::new(),
            field_type,
            label: field_type.default_label(),
            placeholder: field_type.default_placeholder(),
            required: false,
            options: if caps.options {
                vec![FieldOption::numbered(1)]
            } else {
                Vec::new()
            },
            help_text: None,
            min_length: caps.length_bounds.then_some(DEFAULT_MIN_LENGTH),
            max_length: caps.length_bounds.then_some(DEFAULT_MAX_LENGTH),
            pattern: None,
        }
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Lower length bound, defaulted for text-like fields
    pub fn effective_min_length(&self) -> u32 {
        self.min_length.unwrap_or(DEFAULT_MIN_LENGTH)
    }

    /// Upper length bound; 0 means unbounded
    pub fn effective_max_length(&self) -> u32 {
        self.max_length.unwrap_or(DEFAULT_MAX_LENGTH)
    }

    /// Builder flag: min above max while max is set
    pub fn length_bounds_invalid(&self) -> bool {
        let max = self.effective_max_length();
        self.field_type.capabilities().length_bounds && max != 0 && self.effective_min_length() > max
    }

    pub fn has_option_value(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Append `Option N` where N is the new option count
    pub fn add_option(&mut self) -> Result<usize> {
        self.ensure_options()?;
        self.options.push(FieldOption::numbered(self.options.len() + 1));
        Ok(self.options.len() - 1)
    }

    pub fn update_option(&mut self, index: usize, option: FieldOption) -> Result<()> {
        self.ensure_options()?;
        let len = self.options.len();
        let slot = self
            .options
            .get_mut(index)
            .ok_or(FormsError::IndexOutOfRange { index, len })?;
        *slot = option;
        Ok(())
    }

    pub fn remove_option(&mut self, index: usize) -> Result<FieldOption> {
        self.ensure_options()?;
        if index >= self.options.len() {
            return Err(FormsError::IndexOutOfRange {
                index,
                len: self.options.len(),
            });
        }
        Ok(self.options.remove(index))
    }

    fn ensure_options(&self) -> Result<()> {
        if self.field_type.has_options() {
            Ok(())
        } else {
            Err(FormsError::InapplicableProperty {
                field_type: self.field_type,
                property: "options",
            })
        }
    }
}

/// Partial update merged into a field by the builder
///
/// Unset members leave the field untouched. Setting a property that does
/// not apply to the field's type is rejected before anything is written.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FieldPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `field`, all or nothing
    pub fn apply_to(&self, field: &mut Field) -> Result<()> {
        self.check_applicable(field.field_type)?;

        if let Some(label) = &self.label {
            field.label = label.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            field.placeholder = Some(placeholder.clone());
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(options) = &self.options {
            field.options = options.clone();
        }
        if let Some(help_text) = &self.help_text {
            field.help_text = (!help_text.is_empty()).then(|| help_text.clone());
        }
        if let Some(min) = self.min_length {
            field.min_length = Some(min);
        }
        if let Some(max) = self.max_length {
            field.max_length = Some(max);
        }
        if let Some(pattern) = &self.pattern {
            field.pattern = (!pattern.is_empty()).then(|| pattern.clone());
        }
        Ok(())
    }

    fn check_applicable(&self, field_type: FieldType) -> Result<()> {
        let caps = field_type.capabilities();
        let checks = [
            ("placeholder", self.placeholder.is_some(), caps.placeholder),
            ("options", self.options.is_some(), caps.options),
            ("minLength", self.min_length.is_some(), caps.length_bounds),
            ("maxLength", self.max_length.is_some(), caps.length_bounds),
            ("pattern", self.pattern.is_some(), caps.pattern),
        ];
        match checks.iter().find(|(_, set, allowed)| *set && !*allowed) {
            Some((property, _, _)) => Err(FormsError::InapplicableProperty {
                field_type,
                property: *property,
            }),
            None => Ok(()),
        }
    }
}
