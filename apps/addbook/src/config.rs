//! Configuration for the addbook CLI
//!
//! Loaded from `<config dir>/addbook/config.toml`:
//!
//! ```toml
//! vault_path = "~/ObsidianVault"
//! notes_subdir = "03 resources/bibliography"
//! language = "eng"
//! user_agent = "addbook/0.1.0 (me@example.com)"
//! base_url = "https://openlibrary.org"
//! ```
//!
//! Every field is optional. Environment variables (`OBSIDIAN_VAULT`,
//! `ADDBOOK_LANGUAGE`) override the file; command-line flags override both.

use std::path::{Path, PathBuf};

use addbook_core::http::DEFAULT_USER_AGENT;
use addbook_core::{OpenLibrarySource, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};

/// Errors that can occur when loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("TOML parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddbookConfig {
    /// Root of the notes vault; a leading `~` is expanded
    pub vault_path: PathBuf,
    /// Directory under the vault that receives book notes
    pub notes_subdir: PathBuf,
    /// Default catalog language code
    pub language: String,
    pub user_agent: String,
    pub base_url: String,
}

impl Default for AddbookConfig {
    fn default() -> Self {
        Self {
            vault_path: PathBuf::from("~/ObsidianVault"),
            notes_subdir: PathBuf::from("03 resources").join("bibliography"),
            language: DEFAULT_LANGUAGE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: OpenLibrarySource::BASE_URL.to_string(),
        }
    }
}

impl AddbookConfig {
    /// Standard config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("addbook").join("config.toml"))
    }

    /// Load from the standard location, falling back to defaults when absent
    pub fn load_standard() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Apply environment overrides from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|name| std::env::var(name).ok())
    }

    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(vault) = lookup("OBSIDIAN_VAULT").filter(|v| !v.is_empty()) {
            self.vault_path = PathBuf::from(vault);
        }
        if let Some(language) = lookup("ADDBOOK_LANGUAGE").filter(|v| !v.is_empty()) {
            self.language = language;
        }
        self
    }

    /// Directory book notes are written to, with `~` expanded
    pub fn notes_dir(&self) -> PathBuf {
        expand_home(&self.vault_path).join(&self.notes_subdir)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
