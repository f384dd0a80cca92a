//! CLI runtime context
//!
//! Resolves the effective configuration and opens storage once per invocation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use formcraft_core::application::{FormFiller, FormRepository, FormStore, SubmissionRecorder};
use formcraft_core::config::{AutosaveConfig, FormcraftConfig};
use formcraft_core::domain::FormId;
use formcraft_core::infrastructure::{open_storage, SystemClock};

pub struct Context {
    pub config: FormcraftConfig,
    repo: FormRepository,
}

impl Context {
    pub fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self, String> {
        let mut config = FormcraftConfig::load(config_path).map_err(|e| e.to_string())?;
        if data_dir.is_some() {
            config.storage.data_dir = data_dir;
        }
        let storage = open_storage(&config.storage).map_err(|e| e.to_string())?;
        tracing::debug!(
            backend = ?config.storage.backend,
            data_dir = %config.storage.data_dir().display(),
            "context ready"
        );
        let repo = FormRepository::with_config(storage, &config.storage);
        Ok(Self { config, repo })
    }

    pub fn repository(&self) -> &FormRepository {
        &self.repo
    }

    /// Builder store on `form_id`; edits are saved explicitly, never autosaved
    pub fn open_store(&self, form_id: &str) -> Result<FormStore, String> {
        let mut store = self.new_store();
        store
            .load(&FormId::from_string(form_id))
            .map_err(|e| e.to_string())?;
        tracing::debug!(form_id, fields = store.fields().len(), "store opened");
        Ok(store)
    }

    pub fn new_store(&self) -> FormStore {
        FormStore::new(
            self.repo.clone(),
            Arc::new(SystemClock),
            &AutosaveConfig::disabled(),
        )
    }

    pub fn recorder(&self) -> SubmissionRecorder {
        SubmissionRecorder::new(
            self.repo.clone(),
            Arc::new(SystemClock),
            self.config.validation.policy(),
        )
    }

    pub fn open_filler(&self, form_id: &str) -> Result<FormFiller, String> {
        FormFiller::open(&self.repo, self.recorder(), &FormId::from_string(form_id))
            .map_err(|e| e.to_string())
    }
}
