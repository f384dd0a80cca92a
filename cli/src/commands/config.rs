//! Config commands

use std::path::Path;

use formcraft_core::config::FormcraftConfig;

use super::success;
use crate::output::OutputFormat;
use crate::ConfigCommands;

pub fn handle(action: ConfigCommands, path: Option<&Path>, format: OutputFormat) -> Result<(), String> {
    match action {
        ConfigCommands::Init { force } => {
            let target = path
                .map(Path::to_path_buf)
                .unwrap_or_else(FormcraftConfig::default_path);
            if target.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    target.display()
                ));
            }
            let written = FormcraftConfig::default()
                .save(Some(&target))
                .map_err(|e| e.to_string())?;
            success(format!("Configuration initialized at {}", written.display()));
        }
        ConfigCommands::Show => {
            let config = FormcraftConfig::load(path).map_err(|e| e.to_string())?;
            format.print(&config);
        }
        ConfigCommands::Path => {
            let target = path
                .map(Path::to_path_buf)
                .unwrap_or_else(FormcraftConfig::default_path);
            println!("{}", target.display());
        }
    }
    Ok(())
}
