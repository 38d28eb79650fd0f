// config.rs — CLI configuration.
//
// CompanionConfig determines where app data lives and which storage backend
// and auth provider to build. `for_data_dir()` gives the default layout;
// `load()` overlays `<data_dir>/companion.toml` when the file exists:
//
//   [storage]
//   backend = "file"        # or "memory"
//   dir = "/custom/store"   # optional, defaults to <data_dir>/store
//
//   [auth]
//   mode = "stub"           # or "local"
//
//   [logging]
//   filter = "warn"         # overridden by RUST_LOG

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tc_auth::AuthMode;

/// Name of the config file inside the data directory.
pub const CONFIG_FILE: &str = "companion.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionConfig {
    /// Root of all app data. Set from the command line, not the file.
    #[serde(skip)]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Key-value directory override.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub mode: AuthMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter directive.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl CompanionConfig {
    /// Default configuration rooted at `data_dir`.
    pub fn for_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            storage: StorageConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Load `<data_dir>/companion.toml`, or defaults if it doesn't exist.
    pub fn load(data_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let data_dir = data_dir.as_ref();
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::for_data_dir(data_dir));
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config: Self = toml::from_str(&text)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        config.data_dir = data_dir.to_path_buf();
        Ok(config)
    }

    /// Directory for the file-backed key-value store.
    pub fn store_dir(&self) -> PathBuf {
        self.storage
            .dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("store"))
    }
}

/// Platform data directory for the app (e.g. `~/.local/share/companion`).
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("companion"))
}
