use crate::store::ProfileDefaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Runtime settings, read from `kids_dashboard.yaml` when present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Key of the persisted document in web local storage.
    pub storage_key: String,
    /// File holding the persisted document on native builds.
    pub snapshot_path: PathBuf,
    pub default_child_name: String,
    pub default_avatar: String,
    /// Artificial delay before the first load. Demo only.
    pub loading_delay_ms: u64,
    /// Auto-advance of the video-transition screen.
    pub transition_delay_ms: u64,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_key: "kidsDashboardState".to_owned(),
            snapshot_path: PathBuf::from("kids_dashboard_state.json"),
            default_child_name: "Alex".to_owned(),
            default_avatar: "/images/avatars/child-avatar-1.png".to_owned(),
            loading_delay_ms: 1000,
            transition_delay_ms: 3000,
            log_level: "info".to_owned(),
        }
    }
}

impl DashboardConfig {
    pub const DEFAULT_PATH: &'static str = "kids_dashboard.yaml";

    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn profile_defaults(&self) -> ProfileDefaults {
        ProfileDefaults {
            name: self.default_child_name.clone(),
            avatar: self.default_avatar.clone(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}
