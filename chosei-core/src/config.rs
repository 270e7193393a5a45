//! Global chosei configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ChoseiError, ChoseiResult};

static DEFAULT_DATA_DIR: &str = "~/.chosei";
static DEFAULT_SHARE_BASE_URL: &str = "http://localhost:8636";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

/// Global configuration at ~/.config/chosei/config.toml
#[derive(Deserialize, Clone)]
pub struct ChoseiConfig {
    /// Where event data lives. Tilde-expanded by [`ChoseiConfig::data_path`].
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Origin prepended to the participate links printed by `chosei share`.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
}

impl ChoseiConfig {
    pub fn config_path() -> ChoseiResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ChoseiError::Config("Could not determine config directory".into()))?
            .join("chosei");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> ChoseiResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: ChoseiConfig = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| ChoseiError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ChoseiError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Expanded data directory the file store writes under, keeping `~`
    /// usable in the config file.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> ChoseiResult<()> {
        let contents = format!(
            "\
# chosei configuration

# Where event data lives:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Origin used when printing participate links:
# share_base_url = \"{DEFAULT_SHARE_BASE_URL}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ChoseiError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ChoseiError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
