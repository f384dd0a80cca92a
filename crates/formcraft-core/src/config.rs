//! Formcraft configuration
//!
//! Loaded from TOML; every section has defaults so a missing file or a
//! partial file is fine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::services::ValidationPolicy;
use crate::error::{FormsError, Result};

pub const DEFAULT_FORMS_KEY: &str = "formBuilderForms";
pub const DEFAULT_SUBMISSIONS_KEY: &str = "formSubmissions";
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormcraftConfig {
    pub storage: StorageConfig,
    pub autosave: AutosaveConfig,
    pub validation: ValidationConfig,
    pub share: ShareConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Data directory for the file backend; defaults to `~/.formcraft/data`
    pub data_dir: Option<PathBuf>,
    pub forms_key: String,
    pub submissions_key: String,
    /// Byte quota for the memory backend
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: None,
            forms_key: DEFAULT_FORMS_KEY.into(),
            submissions_key: DEFAULT_SUBMISSIONS_KEY.into(),
            quota_bytes: None,
        }
    }
}

impl StorageConfig {
    pub fn memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            ..Self::default()
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| FormcraftConfig::home_dir().join("data"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosaveConfig {
    pub enabled: bool,
    /// Quiescence window after the last edit
    pub debounce_ms: u64,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl AutosaveConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn window(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.debounce_ms.min(i64::MAX as u64) as i64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub enforce_constraints: bool,
    pub collect_all: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let policy = ValidationPolicy::default();
        Self {
            enforce_constraints: policy.enforce_constraints,
            collect_all: policy.collect_all,
        }
    }
}

impl ValidationConfig {
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            enforce_constraints: self.enforce_constraints,
            collect_all: self.collect_all,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Prefix for share links, e.g. `https://forms.example.com`
    pub base_url: String,
}

impl FormcraftConfig {
    /// `~/.formcraft`, or `./.formcraft` when no home directory is known
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".formcraft")
    }

    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Load from `path`, or the default location; missing file yields defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| FormsError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FormsError::Config(e.to_string()))
    }

    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| FormsError::Config(e.to_string()))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FormsError::Config(e.to_string()))?;
        fs::write(&path, content).map_err(|e| FormsError::Config(e.to_string()))?;
        Ok(path)
    }
}
