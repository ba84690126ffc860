use crate::alphabet::AlphabetPreset;
use crate::index::suffix_array::{SuffixArrayConfig, types::DEFAULT_PARALLEL_THRESHOLD};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "strix";
const CONFIG_FILE: &str = "config.json";

/// Toolkit configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Alphabet for the automata that need one (Aho–Corasick, masks)
    #[serde(default)]
    pub alphabet: AlphabetPreset,

    /// Mask symbol matching any single symbol
    #[serde(default = "default_wildcard")]
    pub wildcard: char,

    /// Symbol joining pattern and text for Z-function search; must occur in neither
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Suffix counts above which suffix array rounds sort in parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_wildcard() -> char {
    '?'
}

fn default_separator() -> char {
    '#'
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            alphabet: AlphabetPreset::default(),
            wildcard: default_wildcard(),
            separator: default_separator(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl ToolkitConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from `path`, or return default if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config: ToolkitConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = get_config_path()?;
        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir).context("Failed to create app data directory")?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(&config_path, content)
            .context("Failed to write config file")?;
        Ok(config_path)
    }

    pub fn wildcard_byte(&self) -> Result<u8> {
        single_byte("wildcard", self.wildcard)
    }

    pub fn separator_byte(&self) -> Result<u8> {
        single_byte("separator", self.separator)
    }

    pub fn suffix_array_config(&self) -> SuffixArrayConfig {
        SuffixArrayConfig {
            parallel_threshold: self.parallel_threshold,
        }
    }
}

/// Symbols are bytes, so configured characters must fit in one
fn single_byte(field: &str, c: char) -> Result<u8> {
    match u8::try_from(c) {
        Ok(b) => Ok(b),
        Err(_) => bail!("{} {:?} is not a single-byte character", field, c),
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory (not created until something is saved)
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME))
}
