//! Formcraft CLI
//!
//! Build forms, fill them in and read back submissions from the terminal.
//!
//! # Usage
//!
//! ```bash
//! formcraft forms create --title "Contact"
//! formcraft fields add <FORM_ID> email --label "Your email" --required
//! formcraft fields move <FORM_ID> 0 2
//! formcraft fill <FORM_ID> --value "Your email=me@example.com"
//! formcraft submissions list <FORM_ID> --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "formcraft")]
#[command(author = "Formcraft")]
#[command(version)]
#[command(about = "Formcraft form builder", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.formcraft/config.toml)
    #[arg(long, env = "FORMCRAFT_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory, overrides the config file
    #[arg(long, env = "FORMCRAFT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, short, global = true, default_value = "table")]
    format: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage form definitions
    Forms {
        #[command(subcommand)]
        action: FormCommands,
    },
    /// Edit the fields of a form
    Fields {
        #[command(subcommand)]
        action: FieldCommands,
    },
    /// Fill in a form and submit it
    Fill {
        form_id: String,
        /// Answer as `FIELD=VALUE`, FIELD being an id or a label; checkbox values are comma separated
        #[arg(long = "value", short = 'v')]
        values: Vec<String>,
    },
    /// Read recorded submissions
    Submissions {
        #[command(subcommand)]
        action: SubmissionCommands,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum FormCommands {
    /// List saved forms with submission counts
    List,
    /// Show a form definition
    Show { id: String },
    /// Create and save a new form
    Create {
        #[arg(long)]
        title: Option<String>,
    },
    /// Change a form's title
    Rename { id: String, title: String },
    /// Delete a form and its submissions
    Delete { id: String },
    /// Print the share link of a form
    Share { id: String },
}

#[derive(Subcommand)]
enum FieldCommands {
    /// Append a field of the given type
    Add {
        form_id: String,
        /// text, textarea, email, phone, date, dropdown, checkbox or radio
        field_type: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        required: bool,
    },
    /// Merge a JSON patch into a field, e.g. '{"maxLength": 40}'
    Update {
        form_id: String,
        field_id: String,
        #[arg(long)]
        patch: String,
    },
    /// Remove a field
    Remove { form_id: String, field_id: String },
    /// Move the field at FROM so it ends up at TO
    Move {
        form_id: String,
        from: usize,
        to: usize,
    },
    /// Append a numbered option to a choice field
    AddOption { form_id: String, field_id: String },
    /// Remove the option at INDEX from a choice field
    RemoveOption {
        form_id: String,
        field_id: String,
        index: usize,
    },
}

#[derive(Subcommand)]
enum SubmissionCommands {
    /// List the submissions of a form, oldest first
    List { form_id: String },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.as_deref();
    let format = cli.format;
    let context = || config::Context::load(config_path, cli.data_dir.clone());

    let result = match cli.command {
        Commands::Forms { action } => {
            context().and_then(|ctx| commands::forms::handle(action, &ctx, format))
        }
        Commands::Fields { action } => {
            context().and_then(|ctx| commands::fields::handle(action, &ctx, format))
        }
        Commands::Fill { form_id, values } => {
            context().and_then(|ctx| commands::fill::handle(&form_id, &values, &ctx, format))
        }
        Commands::Submissions { action } => {
            context().and_then(|ctx| commands::submissions::handle(action, &ctx, format))
        }
        Commands::Config { action } => commands::config::handle(action, config_path, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["formcraft", "submissions", "list", "abc", "--format", "json"])
            .unwrap();
        assert!(matches!(cli.format, output::OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Submissions {
                action: SubmissionCommands::List { .. }
            }
        ));
    }
}
