//! Form commands

use formcraft_core::domain::FormDefinition;
use serde::Serialize;
use tabled::Tabled;

use super::success;
use crate::config::Context;
use crate::output::OutputFormat;
use crate::FormCommands;

#[derive(Debug, Clone, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct FormRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Fields")]
    pub fields: usize,
    #[tabled(rename = "Submissions")]
    pub submissions: usize,
    #[tabled(rename = "Last saved")]
    pub last_saved: String,
}

pub fn handle(action: FormCommands, ctx: &Context, format: OutputFormat) -> Result<(), String> {
    match action {
        FormCommands::List => {
            let repo = ctx.repository();
            let forms = repo.list_forms().map_err(|e| e.to_string())?;
            let counts = repo.submission_counts().map_err(|e| e.to_string())?;
            let rows: Vec<FormRow> = forms
                .iter()
                .map(|form| FormRow {
                    id: form.id.to_string(),
                    title: form.title.clone(),
                    fields: form.fields.len(),
                    submissions: counts.get(&form.id).copied().unwrap_or(0),
                    last_saved: format_saved(form),
                })
                .collect();
            format.print_list(&rows, || rows.clone());
        }
        FormCommands::Show { id } => {
            let store = ctx.open_store(&id)?;
            format.print(store.form());
        }
        FormCommands::Create { title } => {
            let mut store = ctx.new_store();
            if let Some(title) = title {
                store.set_title(title);
            }
            let id = store.save_form().map_err(|e| e.to_string())?;
            success(format!("Created form {}", id));
        }
        FormCommands::Rename { id, title } => {
            let mut store = ctx.open_store(&id)?;
            store.set_title(title);
            store.end_session().map_err(|e| e.to_string())?;
            success(format!("Renamed form {}", id));
        }
        FormCommands::Delete { id } => {
            let mut store = ctx.open_store(&id)?;
            let form_id = store.id().clone();
            store.delete_form(&form_id).map_err(|e| e.to_string())?;
            success(format!("Deleted form {} and its submissions", id));
        }
        FormCommands::Share { id } => {
            let store = ctx.open_store(&id)?;
            println!("{}", store.share_url(&ctx.config.share.base_url));
            println!("submissions: {}", store.submissions_path());
        }
    }
    Ok(())
}

fn format_saved(form: &FormDefinition) -> String {
    form.last_saved
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".into())
}
