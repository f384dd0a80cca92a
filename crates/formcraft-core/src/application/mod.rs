//! Application layer: builder sessions, filling and submission recording

pub mod autosave;
pub mod debounce;
pub mod filler;
pub mod recorder;
pub mod repository;
pub mod store;

pub use autosave::{spawn_autosave, AutosaveHandle};
pub use debounce::Debouncer;
pub use filler::FormFiller;
pub use recorder::SubmissionRecorder;
pub use repository::{FormRepository, SubmissionLog};
pub use store::{FormStore, SaveStatus, SharedFormStore};
