//! Configuration file loading with precedence handling.

use crate::model::PanelLocale;
use crate::state::{GridOptions, PanelProps, PanelValue, DEFAULT_CLASS_PREFIX};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CALPANEL_CONFIG";

/// Environment variable overriding the title pattern.
pub const MONTH_PATTERN_ENV_VAR: &str = "CALPANEL_MONTH_PATTERN";

/// Default pattern used to print the picked date.
pub const DEFAULT_OUTPUT_FORMAT: &str = "YYYY-MM-DD";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/calpanel/config.toml`.
///
/// ```toml
/// iso_week = true
/// bordered = true
/// class_name = "deadline-picker"
///
/// [locale]
/// today = "Heute"
/// formatted_month_pattern = "MMMM YYYY"
///
/// [grid]
/// show_week_numbers = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Start weeks on Monday.
    #[serde(default)]
    pub iso_week: Option<bool>,

    /// Compact cells.
    #[serde(default)]
    pub compact: Option<bool>,

    /// Draw a border around the panel.
    #[serde(default)]
    pub bordered: Option<bool>,

    /// Class prefix (default `"calendar"`).
    #[serde(default)]
    pub class_prefix: Option<String>,

    /// Extra class name.
    #[serde(default)]
    pub class_name: Option<String>,

    /// Pattern used to print the picked date.
    #[serde(default)]
    pub output_format: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Localized labels.
    #[serde(default)]
    pub locale: Option<PanelLocale>,

    /// Grid pass-through options.
    #[serde(default)]
    pub grid: Option<GridConfigSection>,
}

/// `[grid]` section from TOML.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GridConfigSection {
    /// Years past the current one offered by the month dropdown.
    #[serde(default)]
    pub limit_end_year: Option<u32>,

    /// Show ISO week numbers.
    #[serde(default)]
    pub show_week_numbers: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Start weeks on Monday.
    pub iso_week: bool,
    /// Compact cells.
    pub compact: bool,
    /// Bordered panel.
    pub bordered: bool,
    /// Class prefix.
    pub class_prefix: String,
    /// Extra class name.
    pub class_name: Option<String>,
    /// Pattern used to print the picked date.
    pub output_format: String,
    /// Localized labels.
    pub locale: PanelLocale,
    /// Grid pass-through options.
    pub grid: GridOptions,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            iso_week: false,
            compact: false,
            bordered: false,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            class_name: None,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            locale: PanelLocale::default(),
            grid: GridOptions::default(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Build panel props from the resolved configuration.
    ///
    /// This is the single place where configuration defaults meet the
    /// panel; the panel itself never consults globals.
    pub fn into_props(self, value: Option<NaiveDate>, default_value: Option<NaiveDate>) -> PanelProps {
        PanelProps {
            value: PanelValue::from(value),
            default_value,
            iso_week: self.iso_week,
            compact: self.compact,
            bordered: self.bordered,
            locale: self.locale,
            class_prefix: self.class_prefix,
            class_name: self.class_name,
            grid: self.grid,
        }
    }
}

/// Overrides taken from command-line flags.
///
/// `None` (or `false` for switches) means "not given on the command line".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--iso-week`
    pub iso_week: bool,
    /// `--compact`
    pub compact: bool,
    /// `--bordered`
    pub bordered: bool,
    /// `--class-prefix`
    pub class_prefix: Option<String>,
    /// `--class-name`
    pub class_name: Option<String>,
    /// `--today-label`
    pub today_label: Option<String>,
    /// `--month-pattern`
    pub month_pattern: Option<String>,
    /// `--output-format`
    pub output_format: Option<String>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/calpanel/calpanel.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("calpanel").join("calpanel.log")
    } else {
        PathBuf::from("calpanel.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/calpanel/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calpanel").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CALPANEL_CONFIG` environment variable
/// 3. Default path `~/.config/calpanel/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `CALPANEL_CONFIG` is not valid Unicode.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let grid_section = config.grid.unwrap_or_default();

    ResolvedConfig {
        iso_week: config.iso_week.unwrap_or(defaults.iso_week),
        compact: config.compact.unwrap_or(defaults.compact),
        bordered: config.bordered.unwrap_or(defaults.bordered),
        class_prefix: config.class_prefix.unwrap_or(defaults.class_prefix),
        class_name: config.class_name.or(defaults.class_name),
        output_format: config.output_format.unwrap_or(defaults.output_format),
        locale: config.locale.unwrap_or(defaults.locale),
        grid: GridOptions {
            limit_end_year: grid_section
                .limit_end_year
                .unwrap_or(defaults.grid.limit_end_year),
            show_week_numbers: grid_section
                .show_week_numbers
                .unwrap_or(defaults.grid.show_week_numbers),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CALPANEL_MONTH_PATTERN`: Override the title pattern
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(pattern) = std::env::var(MONTH_PATTERN_ENV_VAR) {
        config.locale.formatted_month_pattern = Some(pattern);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if overrides.iso_week {
        config.iso_week = true;
    }
    if overrides.compact {
        config.compact = true;
    }
    if overrides.bordered {
        config.bordered = true;
    }
    if let Some(prefix) = overrides.class_prefix {
        config.class_prefix = prefix;
    }
    if let Some(class_name) = overrides.class_name {
        config.class_name = Some(class_name);
    }
    if let Some(today) = overrides.today_label {
        config.locale.today = Some(today);
    }
    if let Some(pattern) = overrides.month_pattern {
        config.locale.formatted_month_pattern = Some(pattern);
    }
    if let Some(format) = overrides.output_format {
        config.output_format = format;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
