//! Domain module
//!
//! Field palette, form and submission records, and the pure rules
//! (reordering, submission validation) that operate on them.

pub mod aggregates;
pub mod events;
pub mod services;
pub mod value_objects;

pub use aggregates::*;
pub use events::*;
pub use value_objects::*;
