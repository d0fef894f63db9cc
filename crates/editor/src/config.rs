// Chunk: docs/chunks/editor_config - Editor configuration file
//!
//! Editor configuration.
//!
//! The configuration is a small JSON document. Every field is optional, so
//! `{}` is a valid config and any missing field takes its default:
//!
//! ```json
//! {
//!   "initial_capacity": 1024,
//!   "soft_tab_width": 4
//! }
//! ```
//!
//! The default location is `<config dir>/gap-edit/config.json`, e.g.
//! `~/.config/gap-edit/config.json` on Linux.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gap_edit_buffer::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Application name used for the config directory.
const APP_NAME: &str = "gap-edit";

/// Config file name within the application directory.
const CONFIG_FILENAME: &str = "config.json";

/// Errors from loading an explicitly requested config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tunable editor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial gap buffer capacity in characters.
    pub initial_capacity: usize,
    /// When set, Tab inserts this many spaces instead of a tab character.
    pub soft_tab_width: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            soft_tab_width: None,
        }
    }
}

/// Returns the path of the default config file, if the platform has a
/// config directory.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILENAME))
}

impl EditorConfig {
    /// Loads a config file that the user asked for explicitly.
    ///
    /// Unlike [`EditorConfig::load_default`], a missing or malformed file is
    /// an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Loads the config from the default location.
    ///
    /// Any problem results in the defaults so the editor can always start:
    /// a missing file silently, an unreadable or malformed one with a warning.
    pub fn load_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Returns the text inserted by the Tab key.
    pub fn tab_text(&self) -> String {
        match self.soft_tab_width {
            Some(width) => " ".repeat(width),
            None => "\t".to_string(),
        }
    }
}
