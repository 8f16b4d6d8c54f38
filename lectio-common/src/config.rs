//! Configuration loading and validation
//!
//! Config file resolution priority:
//! 1. Command-line argument (highest priority)
//! 2. `LECTIO_CONFIG` environment variable
//! 3. Platform config file (`~/.config/lectio/config.toml` on Linux)
//! 4. Compiled defaults (no file)
//!
//! Individual service URLs and the log level can be overridden through
//! environment variables after the file has been read.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "LECTIO_CONFIG";
/// Environment override for `services.poetry_base_url`
pub const POETRY_URL_ENV_VAR: &str = "LECTIO_POETRY_URL";
/// Environment override for `services.text_api_url`
pub const TEXT_URL_ENV_VAR: &str = "LECTIO_TEXT_URL";
/// Environment override for `logging.level`
pub const LOG_LEVEL_ENV_VAR: &str = "LECTIO_LOG_LEVEL";

/// Full service configuration. Every section may be omitted from the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub logging: LoggingConfig,
    pub services: ServiceConfig,
    pub selection: SelectionPolicy,
    pub poems: PoemPolicy,
    pub essays: EssayPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Outbound service endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub poetry_base_url: String,
    pub text_api_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            poetry_base_url: "https://poetrydb.org".to_string(),
            text_api_url: "https://en.wikisource.org/w/api.php".to_string(),
            request_timeout_secs: 30,
            user_agent: concat!("lectio/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Index selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionPolicy {
    /// Odd multiplier decorrelating the essay index from the poem index
    pub essay_multiplier: u32,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            essay_multiplier: 7,
        }
    }
}

/// Poem pool policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoemPolicy {
    /// Number of poets, from the head of the roster, queried per fetch
    pub roster_prefix: usize,
    pub min_lines: usize,
    pub max_lines: usize,
    /// Maximum accepted candidates per poet
    pub per_poet_cap: usize,
}

impl Default for PoemPolicy {
    fn default() -> Self {
        Self {
            roster_prefix: 10,
            min_lines: 4,
            max_lines: 50,
            per_poet_cap: 10,
        }
    }
}

impl PoemPolicy {
    pub fn accepts_line_count(&self, line_count: usize) -> bool {
        (self.min_lines..=self.max_lines).contains(&line_count)
    }
}

/// Essay text shaping policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EssayPolicy {
    pub word_budget: usize,
    /// Paragraphs kept before the word budget may stop accumulation
    pub min_paragraphs: usize,
    /// Hard paragraph cap
    pub max_paragraphs: usize,
    /// Paragraphs starting with this token are section headings
    pub section_marker: String,
}

impl Default for EssayPolicy {
    fn default() -> Self {
        Self {
            word_budget: 2500,
            min_paragraphs: 6,
            max_paragraphs: 20,
            section_marker: "==".to_string(),
        }
    }
}

impl TomlConfig {
    /// Apply `LECTIO_*` environment overrides on top of file values
    pub fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_env(POETRY_URL_ENV_VAR) {
            debug!(url = %url, "Poetry service URL overridden from environment");
            self.services.poetry_base_url = url;
        }
        if let Some(url) = non_empty_env(TEXT_URL_ENV_VAR) {
            debug!(url = %url, "Text service URL overridden from environment");
            self.services.text_api_url = url;
        }
        if let Some(level) = non_empty_env(LOG_LEVEL_ENV_VAR) {
            self.logging.level = level;
        }
    }

    /// Reject policy values that would break selection or shaping
    pub fn validate(&self) -> Result<()> {
        let multiplier = self.selection.essay_multiplier;
        if multiplier <= 1 || multiplier % 2 == 0 {
            return Err(Error::Config(format!(
                "selection.essay_multiplier must be an odd number greater than 1, got {}",
                multiplier
            )));
        }

        let poems = &self.poems;
        if poems.roster_prefix == 0 {
            return Err(Error::Config("poems.roster_prefix must be at least 1".to_string()));
        }
        if poems.per_poet_cap == 0 {
            return Err(Error::Config("poems.per_poet_cap must be at least 1".to_string()));
        }
        if poems.min_lines > poems.max_lines {
            return Err(Error::Config(format!(
                "poems.min_lines ({}) exceeds poems.max_lines ({})",
                poems.min_lines, poems.max_lines
            )));
        }

        let essays = &self.essays;
        if essays.word_budget == 0 {
            return Err(Error::Config("essays.word_budget must be at least 1".to_string()));
        }
        if essays.max_paragraphs == 0 {
            return Err(Error::Config("essays.max_paragraphs must be at least 1".to_string()));
        }
        if essays.min_paragraphs > essays.max_paragraphs {
            return Err(Error::Config(format!(
                "essays.min_paragraphs ({}) exceeds essays.max_paragraphs ({})",
                essays.min_paragraphs, essays.max_paragraphs
            )));
        }
        if essays.section_marker.trim().is_empty() {
            return Err(Error::Config("essays.section_marker must not be empty".to_string()));
        }

        if self.services.request_timeout_secs == 0 {
            return Err(Error::Config(
                "services.request_timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Platform config file location, whether or not it exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lectio").join("config.toml"))
}

/// Resolve which config file to read, if any
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Some(path) = non_empty_env(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    // Priority 3: Platform config file, only when present
    default_config_path().filter(|p| p.exists())
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Validated configuration and the file it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    /// `None` when no file was found and defaults were used
    pub source: Option<PathBuf>,
}

/// Resolve, load, override and validate the service configuration
///
/// Runs before logging is initialized (the log level is part of the
/// config), so the caller reports `source` once tracing is up.
pub fn load_config(cli_arg: Option<&Path>) -> Result<LoadedConfig> {
    let source = resolve_config_path(cli_arg);
    let mut config = match &source {
        Some(path) => load_toml_config(path)?,
        None => TomlConfig::default(),
    };

    config.apply_env_overrides();
    config.validate()?;
    Ok(LoadedConfig { config, source })
}
