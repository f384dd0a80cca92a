//! Form repository
//!
//! Typed access to the two durable collections:
//! - form definitions: ordered list, unique by id
//! - submissions: map from form id to its ordered submission log
//!
//! Every write is read-modify-write of a whole collection with no
//! concurrency control; two sessions saving the same form race and the
//! last one wins.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::domain::aggregates::{FormDefinition, Submission};
use crate::domain::value_objects::FormId;
use crate::error::{FormsError, Result};
use crate::ports::storage::KeyValueStorage;

/// Submission logs keyed by owning form
pub type SubmissionLog = BTreeMap<FormId, Vec<Submission>>;

#[derive(Clone)]
pub struct FormRepository {
    storage: Arc<dyn KeyValueStorage>,
    forms_key: String,
    submissions_key: String,
}

impl FormRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_config(storage, &StorageConfig::default())
    }

    pub fn with_config(storage: Arc<dyn KeyValueStorage>, config: &StorageConfig) -> Self {
        Self {
            storage,
            forms_key: config.forms_key.clone(),
            submissions_key: config.submissions_key.clone(),
        }
    }

    // =========================================================================
    // Form definitions
    // =========================================================================

    pub fn list_forms(&self) -> Result<Vec<FormDefinition>> {
        self.load(&self.forms_key)
    }

    pub fn find_form(&self, id: &FormId) -> Result<Option<FormDefinition>> {
        Ok(self.list_forms()?.into_iter().find(|f| &f.id == id))
    }

    /// Replace the record with the same id in place, or append
    pub fn upsert_form(&self, form: &FormDefinition) -> Result<()> {
        let mut forms = self.list_forms()?;
        match forms.iter_mut().find(|f| f.id == form.id) {
            Some(existing) => *existing = form.clone(),
            None => forms.push(form.clone()),
        }
        self.store(&self.forms_key, &forms)
    }

    /// Remove a definition together with its submission log
    ///
    /// The log is written first. If the definition write then fails the log
    /// is put back, so an error leaves both collections as they were.
    /// Returns whether the definition and the log existed.
    pub fn remove_form_with_submissions(&self, id: &FormId) -> Result<(bool, bool)> {
        let mut forms = self.list_forms()?;
        let before = forms.len();
        forms.retain(|f| &f.id != id);
        let form_removed = forms.len() != before;

        let previous_log = self.storage.get(&self.submissions_key)?;
        let mut all: SubmissionLog = self.load(&self.submissions_key)?;
        let log_removed = all.remove(id).is_some();
        if log_removed {
            self.store(&self.submissions_key, &all)?;
        }

        if form_removed {
            if let Err(err) = self.store(&self.forms_key, &forms) {
                if log_removed {
                    self.restore(&self.submissions_key, previous_log);
                }
                return Err(err);
            }
        }
        Ok((form_removed, log_removed))
    }

    // =========================================================================
    // Submissions
    // =========================================================================

    pub fn all_submissions(&self) -> Result<SubmissionLog> {
        self.load(&self.submissions_key)
    }

    /// Submission log of one form; an absent log is empty
    pub fn submissions_for(&self, id: &FormId) -> Result<Vec<Submission>> {
        Ok(self.all_submissions()?.remove(id).unwrap_or_default())
    }

    pub fn append_submission(&self, id: &FormId, submission: Submission) -> Result<()> {
        let mut all = self.all_submissions()?;
        all.entry(id.clone()).or_default().push(submission);
        self.store(&self.submissions_key, &all)
    }

    /// Drop the whole log for `id`; writes only when a log existed
    pub fn remove_submissions(&self, id: &FormId) -> Result<bool> {
        let mut all = self.all_submissions()?;
        if all.remove(id).is_none() {
            return Ok(false);
        }
        self.store(&self.submissions_key, &all)?;
        Ok(true)
    }

    pub fn submission_counts(&self) -> Result<BTreeMap<FormId, usize>> {
        Ok(self
            .all_submissions()?
            .into_iter()
            .map(|(id, log)| (id, log.len()))
            .collect())
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.storage.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| FormsError::StorageUnavailable(format!("{}: {}", key, e))),
            None => Ok(T::default()),
        }
    }

    fn restore(&self, key: &str, previous: Option<serde_json::Value>) {
        let result = match previous {
            Some(value) => self.storage.set(key, value),
            None => self.storage.remove(key),
        };
        if let Err(err) = result {
            tracing::warn!(key, error = %err, "could not roll back partial delete");
        }
    }

    fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| FormsError::StorageUnavailable(format!("{}: {}", key, e)))?;
        self.storage.set(key, value)?;
        Ok(())
    }
}
