//! Formcraft form builder core
//!
//! Build form definitions, persist them to a key-value store, and collect
//! validated submissions from fillers.
//!
//! ## Features
//! - Eight field types with per-type capabilities
//! - Field editing, option management and drag reordering
//! - Debounced autosave with a save status indicator
//! - Required-field and constraint validation on submit
//! - In-memory and JSON file storage backends
//!
//! ## Layout
//! - `domain`: field types, definitions, submissions, validation and reorder rules
//! - `ports`: storage and clock seams
//! - `infrastructure`: storage backends and clocks
//! - `application`: the builder store, filler sessions and submission recording

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::{
    spawn_autosave, AutosaveHandle, FormFiller, FormRepository, FormStore, SaveStatus,
    SharedFormStore, SubmissionRecorder,
};
pub use config::{AutosaveConfig, FormcraftConfig, StorageBackend, StorageConfig};
pub use domain::services::validation::validate_submission;
pub use domain::services::{ValidationPolicy, Violation};
pub use domain::{
    BuilderEvent, Field, FieldId, FieldOption, FieldPatch, FieldType, FieldValue, FormData,
    FormDefinition, FormId, Submission, SubmissionId,
};
pub use error::{FormsError, Result};
