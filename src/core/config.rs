//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.packlist/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! default is generated so users can discover all options.

use log::Level;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PacklistConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListConfig {
    pub show_comments: Option<bool>,
    pub show_totals: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE: &str = "packlist.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub show_comments: bool,
    pub show_totals: bool,
    /// Problems found while resolving, for the caller to log once the
    /// logger is running.
    pub notices: Vec<ConfigNotice>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            show_comments: true,
            show_totals: true,
            notices: Vec::new(),
        }
    }
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub log_level: Option<&'a str>,
    pub log_file: Option<&'a Path>,
}

// ============================================================================
// Notices
// ============================================================================

/// A log line produced while loading or resolving config.
///
/// Config is read before the file logger exists (the logger needs the
/// resolved level and path), so messages are collected here and replayed
/// with [`ConfigNotice::log`] after `WriteLogger::init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNotice {
    pub level: Level,
    pub message: String,
}

impl ConfigNotice {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn log(&self) {
        log::log!(self.level, "{}", self.message);
    }
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

/// Returns the path to `~/.packlist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".packlist").join("config.toml"))
}

/// Load config from `~/.packlist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PacklistConfig::default()`.
pub fn load_config(notices: &mut Vec<ConfigNotice>) -> Result<PacklistConfig, ConfigError> {
    match config_path() {
        Some(path) => load_or_generate(&path, notices),
        None => {
            notices.push(ConfigNotice::new(
                Level::Warn,
                "Could not determine home directory, using default config",
            ));
            Ok(PacklistConfig::default())
        }
    }
}

fn load_or_generate(
    path: &Path,
    notices: &mut Vec<ConfigNotice>,
) -> Result<PacklistConfig, ConfigError> {
    if !path.exists() {
        notices.push(ConfigNotice::new(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        ));
        generate_default_config(path, notices);
        return Ok(PacklistConfig::default());
    }

    load_config_from(path, notices)
}

/// Load config from an explicit path. Unlike [`load_config`], a missing file
/// is an error: the user asked for this file specifically.
pub fn load_config_from(
    path: &Path,
    notices: &mut Vec<ConfigNotice>,
) -> Result<PacklistConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PacklistConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notices.push(ConfigNotice::new(
        Level::Info,
        format!("Loaded config from {}", path.display()),
    ));
    notices.push(ConfigNotice::new(Level::Debug, format!("Config: {config:?}")));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notices: &mut Vec<ConfigNotice>) {
    let default_content = r#"# Packlist Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # off, error, warn, info, debug, trace
# log_file = "packlist.log"          # Or set PACKLIST_LOG_FILE env var

# [list]
# show_comments = true               # Show the comments line under each item
# show_totals = true                 # Show item count and total quantity
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            notices.push(ConfigNotice::new(
                Level::Warn,
                format!("Failed to create config directory: {e}"),
            ));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        notices.push(ConfigNotice::new(
            Level::Warn,
            format!("Failed to write default config: {e}"),
        ));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PacklistConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment lookup supplied by the caller.
pub fn resolve_with(
    config: &PacklistConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let mut notices = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = match cli
        .log_level
        .map(|s| s.to_string())
        .or_else(|| env("PACKLIST_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
    {
        Some(raw) => parse_level(&raw).unwrap_or_else(|| {
            notices.push(ConfigNotice::new(
                Level::Warn,
                format!("Unknown log level {raw:?}, using {}", defaults.log_level),
            ));
            defaults.log_level
        }),
        None => defaults.log_level,
    };

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .map(Path::to_path_buf)
        .or_else(|| env("PACKLIST_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or(defaults.log_file);

    ResolvedConfig {
        log_level,
        log_file,
        show_comments: config.list.show_comments.unwrap_or(defaults.show_comments),
        show_totals: config.list.show_totals.unwrap_or(defaults.show_totals),
        notices,
    }
}

/// Parse a level name. `None` on garbage.
fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}
