//! Submission commands

use formcraft_core::domain::FieldValue;
use serde::Serialize;
use tabled::Tabled;

use crate::config::Context;
use crate::output::OutputFormat;
use crate::SubmissionCommands;

#[derive(Debug, Serialize, Tabled)]
pub struct SubmissionRow {
    #[tabled(rename = "Submission")]
    pub id: String,
    #[tabled(rename = "Submitted at")]
    pub timestamp: String,
    #[tabled(rename = "Answers")]
    pub answers: String,
}

pub fn handle(action: SubmissionCommands, ctx: &Context, format: OutputFormat) -> Result<(), String> {
    match action {
        SubmissionCommands::List { form_id } => {
            let store = ctx.open_store(&form_id)?;
            let submissions = ctx
                .repository()
                .submissions_for(store.id())
                .map_err(|e| e.to_string())?;
            format.print_list(&submissions, || {
                submissions
                    .iter()
                    .map(|submission| SubmissionRow {
                        id: submission.submission_id.to_string(),
                        timestamp: submission.timestamp.to_rfc3339(),
                        answers: submission
                            .form_data
                            .iter()
                            .map(|(field_id, value)| {
                                let label = store
                                    .field(field_id)
                                    .map(|f| f.label.as_str())
                                    .unwrap_or(field_id.as_str());
                                format!("{}: {}", label, display_value(value))
                            })
                            .collect::<Vec<_>>()
                            .join("\n"),
                    })
                    .collect()
            });
        }
    }
    Ok(())
}

fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Single(text) => text.clone(),
        FieldValue::Multiple(choices) => choices.join(", "),
    }
}
