//! Submission validation
//!
//! Checks filled values against the declarations of a form definition, in
//! field declaration order. Required checks always run; length, pattern and
//! option-membership checks run when the policy enforces constraints and
//! only against non-blank values.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::aggregates::{Field, FieldValue, FormData, FormDefinition};
use crate::domain::value_objects::{FieldId, ValueShape};
use crate::error::{FormsError, Result};

/// Why a single value was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    #[error("a value is required")]
    Required,

    #[error("expected a {expected} value")]
    WrongShape { expected: ValueShape },

    #[error("must be at least {min} characters (got {actual})")]
    TooShort { min: u32, actual: usize },

    #[error("must be at most {max} characters (got {actual})")]
    TooLong { max: u32, actual: usize },

    #[error("does not match pattern {pattern}")]
    PatternMismatch { pattern: String },

    #[error("field declares an invalid pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("{value:?} is not one of the declared options")]
    UnknownOption { value: String },
}

/// A violation tied to the field that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field_id: FieldId,
    pub label: String,
    pub violation: Violation,
}

impl FieldViolation {
    fn new(field: &Field, violation: Violation) -> Self {
        Self {
            field_id: field.id().clone(),
            label: field.label.clone(),
            violation,
        }
    }

    pub fn into_error(self) -> FormsError {
        match self.violation {
            Violation::Required => FormsError::RequiredFieldEmpty {
                field_id: self.field_id,
                label: self.label,
            },
            Violation::WrongShape { expected } => FormsError::ValueShapeMismatch {
                field_id: self.field_id,
                expected,
            },
            violation => FormsError::ConstraintViolation {
                field_id: self.field_id,
                label: self.label,
                violation,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Enforce min/max length, pattern and option membership
    pub enforce_constraints: bool,
    /// Report every violation instead of stopping at the first
    pub collect_all: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            enforce_constraints: true,
            collect_all: false,
        }
    }
}

impl ValidationPolicy {
    /// Only the required check, as the builder UI historically behaved
    pub fn required_only() -> Self {
        Self {
            enforce_constraints: false,
            collect_all: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SubmissionValidator {
    policy: ValidationPolicy,
}

impl SubmissionValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validate `data` against `definition`
    ///
    /// Fail-fast returns the first violation as its own error kind;
    /// collect-all returns [`FormsError::Validation`] with every violation.
    pub fn validate(&self, definition: &FormDefinition, data: &FormData) -> Result<()> {
        let mut violations = Vec::new();
        for field in &definition.fields {
            self.check_field(field, data.get(field.id()), &mut violations);
            if !self.policy.collect_all {
                if let Some(first) = violations.pop() {
                    return Err(first.into_error());
                }
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(FormsError::Validation(violations))
        }
    }

    /// Every violation, in declaration order
    pub fn violations(&self, definition: &FormDefinition, data: &FormData) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        for field in &definition.fields {
            self.check_field(field, data.get(field.id()), &mut violations);
        }
        violations
    }

    fn check_field(
        &self,
        field: &Field,
        value: Option<&FieldValue>,
        out: &mut Vec<FieldViolation>,
    ) {
        let expected = field.field_type().value_shape();
        let value = match value {
            Some(v) if v.shape() != expected => {
                out.push(FieldViolation::new(field, Violation::WrongShape { expected }));
                return;
            }
            Some(v) => v,
            None => {
                if field.required {
                    out.push(FieldViolation::new(field, Violation::Required));
                }
                return;
            }
        };

        if value.is_blank() {
            if field.required {
                out.push(FieldViolation::new(field, Violation::Required));
            }
            return;
        }

        if self.policy.enforce_constraints {
            if let Some(violation) = check_constraints(field, value) {
                out.push(FieldViolation::new(field, violation));
            }
        }
    }
}

/// Validate with the default policy
pub fn validate_submission(definition: &FormDefinition, data: &FormData) -> Result<()> {
    SubmissionValidator::default().validate(definition, data)
}

fn check_constraints(field: &Field, value: &FieldValue) -> Option<Violation> {
    let caps = field.field_type().capabilities();

    if caps.options {
        let unknown = match value {
            FieldValue::Single(v) => (!field.has_option_value(v)).then(|| v.clone()),
            FieldValue::Multiple(vs) => vs.iter().find(|v| !field.has_option_value(v)).cloned(),
        };
        return unknown.map(|value| Violation::UnknownOption { value });
    }

    let text = value.as_single()?;

    if caps.length_bounds {
        let actual = text.chars().count();
        let min = field.effective_min_length();
        let max = field.effective_max_length();
        if actual < min as usize {
            return Some(Violation::TooShort { min, actual });
        }
        if max != 0 && actual > max as usize {
            return Some(Violation::TooLong { max, actual });
        }
    }

    if caps.pattern {
        if let Some(pattern) = field.pattern.as_deref().filter(|p| !p.is_empty()) {
            // whole-value match, like an HTML pattern attribute
            let anchored = format!("^(?:{})$", pattern);
            match Regex::new(&anchored) {
                Ok(re) if !re.is_match(text) => {
                    return Some(Violation::PatternMismatch {
                        pattern: pattern.to_string(),
                    })
                }
                Ok(_) => {}
                Err(e) => {
                    return Some(Violation::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: e.to_string(),
                    })
                }
            }
        }
    }

    None
}
