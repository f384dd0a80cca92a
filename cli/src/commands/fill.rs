//! Fill command

use formcraft_core::domain::{FieldId, FormDefinition, ValueShape};

use super::success;
use crate::config::Context;
use crate::output::OutputFormat;

/// One `FIELD=VALUE` answer from the command line
#[derive(Debug, PartialEq)]
struct Answer<'a> {
    field: &'a str,
    value: &'a str,
}

fn parse_answer(raw: &str) -> Result<Answer<'_>, String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {:?}", raw))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in {:?}", raw));
    }
    Ok(Answer { field, value })
}

/// Match by field id first, then by label (case-insensitive)
fn resolve_field(definition: &FormDefinition, key: &str) -> Result<FieldId, String> {
    let id = FieldId::from_string(key);
    if definition.field(&id).is_some() {
        return Ok(id);
    }
    definition
        .fields
        .iter()
        .find(|field| field.label.eq_ignore_ascii_case(key))
        .map(|field| field.id().clone())
        .ok_or_else(|| format!("no field with id or label {:?}", key))
}

pub fn handle(form_id: &str, values: &[String], ctx: &Context, format: OutputFormat) -> Result<(), String> {
    let mut filler = ctx.open_filler(form_id)?;
    if filler.is_empty() {
        return Err("this form has no fields yet".into());
    }

    for raw in values {
        let answer = parse_answer(raw)?;
        let field_id = resolve_field(filler.definition(), answer.field)?;
        let shape = filler
            .definition()
            .field(&field_id)
            .map(|field| field.field_type().value_shape());
        match shape {
            Some(ValueShape::Multiple) => {
                for choice in answer.value.split(',').map(str::trim).filter(|c| !c.is_empty()) {
                    filler
                        .toggle_option(&field_id, choice, true)
                        .map_err(|e| e.to_string())?;
                }
            }
            _ => filler
                .set_value(&field_id, answer.value)
                .map_err(|e| e.to_string())?,
        }
    }

    let submission = filler.submit().map_err(|e| e.to_string())?;
    tracing::debug!(form_id, submission_id = %submission.submission_id, "answers submitted");
    match format {
        OutputFormat::Table => success(format!("Recorded submission {}", submission.submission_id)),
        _ => format.print(&submission),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_core::domain::{Field, FieldType};

    #[test]
    fn test_parse_answer() {
        assert_eq!(
            parse_answer("Email=a=b@example.com").unwrap(),
            Answer {
                field: "Email",
                value: "a=b@example.com"
            }
        );
        assert!(parse_answer("no-separator").is_err());
        assert!(parse_answer(" =x").is_err());
    }

    #[test]
    fn test_resolve_by_id_or_label() {
        let mut form = FormDefinition::untitled();
        let mut field = Field::create(FieldType::Text);
        field.label = "Full name".into();
        let id = field.id().clone();
        form.fields.push(field);

        assert_eq!(resolve_field(&form, id.as_str()).unwrap(), id);
        assert_eq!(resolve_field(&form, "full NAME").unwrap(), id);
        assert!(resolve_field(&form, "Phone").is_err());
    }
}
