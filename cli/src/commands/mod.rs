//! CLI Commands

pub mod config;
pub mod fields;
pub mod fill;
pub mod forms;
pub mod submissions;

use colored::Colorize;

pub(crate) fn success(message: impl AsRef<str>) {
    println!("{} {}", "✓".green(), message.as_ref());
}
