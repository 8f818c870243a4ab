//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.roster/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub results: Option<usize>,
    pub seed: Option<String>,
    pub nationalities: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_colors: Option<bool>,
}

/// Values given on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub results: Option<usize>,
    pub seed: Option<String>,
    pub show_colors: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api";
pub const DEFAULT_RESULTS: usize = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub results: usize,
    pub seed: Option<String>,
    pub nationalities: Vec<String>,
    pub timeout_secs: u64,
    pub show_colors: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.roster/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roster").join("config.toml"))
}

/// Load config from `~/.roster/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RosterConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RosterConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RosterConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RosterConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<RosterConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RosterConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Roster Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [source]
# base_url = "https://randomuser.me/api"   # Or set ROSTER_BASE_URL
# results = 100                             # 1..=5000, or set ROSTER_RESULTS
# seed = "roster"                           # Same seed, same users. Or ROSTER_SEED
# nationalities = ["es", "fr", "gb"]
# timeout_secs = 30

# [display]
# show_colors = false                       # Alternate row colors on startup
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RosterConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("ROSTER_BASE_URL").ok())
        .or_else(|| config.source.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Results: CLI → env → config → default
    let results = cli
        .results
        .or_else(|| env_parse("ROSTER_RESULTS"))
        .or(config.source.results)
        .unwrap_or(DEFAULT_RESULTS);

    // Seed: CLI → env → config
    let seed = cli
        .seed
        .clone()
        .or_else(|| std::env::var("ROSTER_SEED").ok())
        .or_else(|| config.source.seed.clone());

    ResolvedConfig {
        base_url,
        results,
        seed,
        nationalities: config.source.nationalities.clone().unwrap_or_default(),
        timeout_secs: config
            .source
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
        // --colors can only switch it on
        show_colors: cli.show_colors || config.display.show_colors.unwrap_or(false),
    }
}

fn env_parse(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
