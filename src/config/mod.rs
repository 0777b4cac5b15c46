//! Configuration module.
//!
//! Defaults → config file → environment → CLI flags, resolved once at
//! startup into [`ResolvedConfig`] and then into panel props.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, GridConfigSection, ResolvedConfig, CONFIG_ENV_VAR, DEFAULT_OUTPUT_FORMAT,
    MONTH_PATTERN_ENV_VAR,
};
