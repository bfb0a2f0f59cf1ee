//! Application configuration for draftindex.
//!
//! User config lives at `~/.draftindex/draftindex.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DraftIndexError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "draftindex.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".draftindex";

// ---------------------------------------------------------------------------
// Config structs (matching draftindex.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Year used when none is given on the command line.
    #[serde(default = "default_year")]
    pub year: String,

    /// Directory under the base that holds one folder per year.
    #[serde(default = "default_drafts_dir")]
    pub drafts_dir: String,

    /// Name of the listing written inside the year folder.
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            drafts_dir: default_drafts_dir(),
            output_file: default_output_file(),
        }
    }
}

fn default_year() -> String {
    "2026".into()
}
fn default_drafts_dir() -> String {
    "year-drafts".into()
}
fn default_output_file() -> String {
    "index.json".into()
}

// ---------------------------------------------------------------------------
// Index config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime configuration for one index run, passed explicitly to the pipeline.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Base directory containing the drafts folder.
    pub base_dir: PathBuf,
    /// Drafts folder name under `base_dir`.
    pub drafts_dir: String,
    /// Year identifier selecting the folder to scan.
    pub year: String,
    /// Listing filename inside the year folder.
    pub output_file: String,
    /// Build the listing but do not write it.
    pub dry_run: bool,
}

impl IndexConfig {
    /// Build a run config from file defaults, rooted at `base_dir`.
    pub fn from_app(config: &AppConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            drafts_dir: config.defaults.drafts_dir.clone(),
            year: config.defaults.year.clone(),
            output_file: config.defaults.output_file.clone(),
            dry_run: false,
        }
    }

    /// `<base>/<drafts_dir>/<year>`
    pub fn target_dir(&self) -> PathBuf {
        self.base_dir.join(&self.drafts_dir).join(&self.year)
    }

    /// `<base>/<drafts_dir>/<year>/<output_file>`
    pub fn output_path(&self) -> PathBuf {
        self.target_dir().join(&self.output_file)
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.draftindex/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DraftIndexError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.draftindex/draftindex.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist
/// or the home directory cannot be determined.
pub fn load_config() -> Result<AppConfig> {
    let Ok(path) = config_file_path() else {
        tracing::debug!("no home directory, using default config");
        return Ok(AppConfig::default());
    };

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DraftIndexError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        DraftIndexError::config(format!("failed to parse {}: {e}", path.display()))
    })
}
