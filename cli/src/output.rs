//! Output formatting

use clap::ValueEnum;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Print a single record; tables fall back to pretty JSON
    pub fn print<T: Serialize>(&self, data: &T) {
        match self {
            OutputFormat::Json | OutputFormat::Table => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(data).unwrap_or_default());
            }
        }
    }

    /// Print a collection; `rows` is only built in table mode
    pub fn print_list<T, R, F>(&self, data: &T, rows: F)
    where
        T: Serialize,
        R: Tabled,
        F: FnOnce() -> Vec<R>,
    {
        match self {
            OutputFormat::Table => {
                let rows = rows();
                if rows.is_empty() {
                    println!("(none)");
                } else {
                    println!("{}", Table::new(rows).with(Style::rounded()));
                }
            }
            _ => self.print(data),
        }
    }
}
