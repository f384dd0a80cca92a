//! Field commands

use formcraft_core::domain::{FieldId, FieldPatch};

use super::success;
use crate::config::Context;
use crate::output::OutputFormat;
use crate::FieldCommands;

pub fn handle(action: FieldCommands, ctx: &Context, format: OutputFormat) -> Result<(), String> {
    match action {
        FieldCommands::Add {
            form_id,
            field_type,
            label,
            required,
        } => {
            let mut store = ctx.open_store(&form_id)?;
            let field_id = store
                .add_field_named(&field_type)
                .map_err(|e| e.to_string())?;
            let patch = FieldPatch {
                label,
                required: required.then_some(true),
                ..FieldPatch::default()
            };
            if !patch.is_empty() {
                store
                    .update_field(&field_id, patch)
                    .map_err(|e| e.to_string())?;
            }
            store.end_session().map_err(|e| e.to_string())?;
            success(format!("Added {} field {}", field_type, field_id));
        }
        FieldCommands::Update {
            form_id,
            field_id,
            patch,
        } => {
            let patch: FieldPatch =
                serde_json::from_str(&patch).map_err(|e| format!("invalid patch: {}", e))?;
            let mut store = ctx.open_store(&form_id)?;
            let field_id = FieldId::from_string(field_id);
            store
                .update_field(&field_id, patch)
                .map_err(|e| e.to_string())?;
            if let Some(field) = store.field(&field_id) {
                if field.length_bounds_invalid() {
                    eprintln!("warning: minimum length exceeds maximum length");
                }
                format.print(field);
            }
            store.end_session().map_err(|e| e.to_string())?;
        }
        FieldCommands::Remove { form_id, field_id } => {
            let mut store = ctx.open_store(&form_id)?;
            let removed = store
                .delete_field(&FieldId::from_string(field_id))
                .map_err(|e| e.to_string())?;
            store.end_session().map_err(|e| e.to_string())?;
            success(format!("Removed field \"{}\"", removed.label));
        }
        FieldCommands::Move { form_id, from, to } => {
            let mut store = ctx.open_store(&form_id)?;
            store.move_field(from, to).map_err(|e| e.to_string())?;
            store.end_session().map_err(|e| e.to_string())?;
            success(format!("Moved field {} to {}", from, to));
        }
        FieldCommands::AddOption { form_id, field_id } => {
            let mut store = ctx.open_store(&form_id)?;
            let field_id = FieldId::from_string(field_id);
            let index = store.add_option(&field_id).map_err(|e| e.to_string())?;
            store.end_session().map_err(|e| e.to_string())?;
            success(format!("Added option at index {}", index));
        }
        FieldCommands::RemoveOption {
            form_id,
            field_id,
            index,
        } => {
            let mut store = ctx.open_store(&form_id)?;
            let removed = store
                .remove_option(&FieldId::from_string(field_id), index)
                .map_err(|e| e.to_string())?;
            store.end_session().map_err(|e| e.to_string())?;
            success(format!("Removed option \"{}\"", removed.label));
        }
    }
    Ok(())
}
