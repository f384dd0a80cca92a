//! Field type palette
//!
//! The closed set of field kinds and the single table describing which
//! properties each kind carries and what shape its filled value takes.
//! Everything that used to branch on the type name reads this table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormsError;

/// Field kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Dropdown,
    Checkbox,
    Radio,
    Date,
    Email,
    Phone,
}

/// Shape of the value a filler enters for a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueShape {
    /// One string
    Single,
    /// Ordered list of selected option values
    Multiple,
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multiple => write!(f, "multiple"),
        }
    }
}

/// Which properties apply to a field type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldCapabilities {
    pub placeholder: bool,
    pub options: bool,
    pub length_bounds: bool,
    pub pattern: bool,
    pub value_shape: ValueShape,
}

impl FieldCapabilities {
    const fn new(
        placeholder: bool,
        options: bool,
        length_bounds: bool,
        pattern: bool,
        value_shape: ValueShape,
    ) -> Self {
        Self {
            placeholder,
            options,
            length_bounds,
            pattern,
            value_shape,
        }
    }
}

impl FieldType {
    /// Palette order
    pub const ALL: [FieldType; 8] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Dropdown,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Date,
        FieldType::Email,
        FieldType::Phone,
    ];

    pub const fn capabilities(self) -> FieldCapabilities {
        use ValueShape::*;
        //                                      placeholder options length pattern  value
        match self {
            Self::Text => FieldCapabilities::new(true, false, true, false, Single),
            Self::Textarea => FieldCapabilities::new(true, false, true, false, Single),
            Self::Dropdown => FieldCapabilities::new(true, true, false, false, Single),
            Self::Checkbox => FieldCapabilities::new(false, true, false, false, Multiple),
            Self::Radio => FieldCapabilities::new(false, true, false, false, Single),
            Self::Date => FieldCapabilities::new(true, false, false, false, Single),
            Self::Email => FieldCapabilities::new(true, false, true, true, Single),
            Self::Phone => FieldCapabilities::new(true, false, true, true, Single),
        }
    }

    /// Wire name (`text`, `textarea`, ...)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Dropdown => "dropdown",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Date => "date",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Capitalized name used in default labels
    pub fn display_name(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn default_label(self) -> String {
        format!("New {}", self.display_name())
    }

    pub fn default_placeholder(self) -> Option<String> {
        self.capabilities()
            .placeholder
            .then(|| format!("Enter {}...", self.as_str()))
    }

    pub const fn has_options(self) -> bool {
        self.capabilities().options
    }

    pub const fn value_shape(self) -> ValueShape {
        self.capabilities().value_shape
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FormsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormsError::InvalidFieldType(s.to_string()))
    }
}
