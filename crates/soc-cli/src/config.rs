//! CLI configuration, persisted as TOML in the user's config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use soc_persistence::AutoSaveConfig;

const CONFIG_FILE: &str = "config.toml";

/// Wizard configuration.
///
/// Missing keys fall back to defaults, so a partial file is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Directory holding the persisted wizard state.
    pub state_dir: Option<PathBuf>,

    /// Auto-save debounce settings.
    pub autosave: AutoSaveConfig,
}

impl WizardConfig {
    /// Load from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::config_path()),
        }
    }

    /// Load from a specific path. Unreadable or invalid files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, "Ignoring invalid config {}", path.display());
                Self::default()
            }
        }
    }

    /// Default config file path.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Configured state directory, or the platform data directory.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.data_dir().join("state"))
                .unwrap_or_else(|| PathBuf::from(".soc-wizard"))
        })
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "SocConfigurator", "soc-wizard")
}
