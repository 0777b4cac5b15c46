//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_calpanel_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("calpanel") && path_str.ends_with("config.toml"),
            "Path should contain 'calpanel' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "calpanel_test_config.toml",
        r#"
iso_week = true
compact = false
bordered = true
class_prefix = "rs-calendar"
class_name = "deadline"
output_format = "DD.MM.YYYY"

[locale]
today = "Heute"
formatted_month_pattern = "MMMM YYYY"
weekday_labels = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]

[grid]
limit_end_year = 20
show_week_numbers = true
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.iso_week, Some(true));
    assert_eq!(config.compact, Some(false));
    assert_eq!(config.bordered, Some(true));
    assert_eq!(config.class_prefix, Some("rs-calendar".to_string()));
    assert_eq!(config.class_name, Some("deadline".to_string()));
    assert_eq!(config.output_format, Some("DD.MM.YYYY".to_string()));

    let locale = config.locale.expect("locale section");
    assert_eq!(locale.today, Some("Heute".to_string()));
    assert_eq!(locale.weekday_labels.map(|l| l.len()), Some(7));

    let grid = config.grid.expect("grid section");
    assert_eq!(grid.limit_end_year, Some(20));
    assert_eq!(grid.show_week_numbers, Some(true));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("calpanel_test_invalid.toml", "iso_week = [unclosed");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a ParseError, got: {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_fields() {
    let config_path = write_temp_config("calpanel_test_unknown.toml", "theme = \"monokai\"\n");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_accepts_empty_file() {
    let config_path = write_temp_config("calpanel_test_empty.toml", "");

    let result = load_config_file(&config_path);
    assert_eq!(result, Ok(Some(ConfigFile::default())));

    fs::remove_file(config_path).ok();
}

#[test]
#[serial(env)]
fn explicit_path_beats_env_var() {
    let explicit = write_temp_config("calpanel_test_explicit.toml", "compact = true\n");
    let from_env = write_temp_config("calpanel_test_env.toml", "bordered = true\n");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("valid config")
        .expect("config present");

    env::remove_var(CONFIG_ENV_VAR);
    assert_eq!(config.compact, Some(true));
    assert_eq!(config.bordered, None);

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(env)]
fn env_var_path_is_used_without_explicit_path() {
    let from_env = write_temp_config("calpanel_test_env_only.toml", "bordered = true\n");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(None)
        .expect("valid config")
        .expect("config present");

    env::remove_var(CONFIG_ENV_VAR);
    assert_eq!(config.bordered, Some(true));

    fs::remove_file(from_env).ok();
}

#[test]
#[serial(env)]
fn env_var_pointing_to_missing_file_is_not_an_error() {
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/calpanel/config.toml");
    let result = load_config_with_precedence(None);
    env::remove_var(CONFIG_ENV_VAR);
    assert_eq!(result, Ok(None));
}

// ===== merge_config =====

#[test]
fn merge_config_none_returns_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn defaults_match_panel_defaults() {
    let config = ResolvedConfig::default();
    assert_eq!(config.class_prefix, "calendar");
    assert_eq!(config.output_format, "YYYY-MM-DD");
    assert_eq!(config.grid.limit_end_year, 1000);
    assert!(!config.grid.show_week_numbers);
    assert!(!config.iso_week && !config.compact && !config.bordered);
}

#[test]
fn merge_config_applies_present_fields_only() {
    let config_file = ConfigFile {
        bordered: Some(true),
        class_prefix: Some("cal".to_string()),
        grid: Some(GridConfigSection {
            limit_end_year: None,
            show_week_numbers: Some(true),
        }),
        ..Default::default()
    };

    let resolved = merge_config(Some(config_file));
    assert!(resolved.bordered);
    assert!(!resolved.compact);
    assert_eq!(resolved.class_prefix, "cal");
    assert_eq!(resolved.grid.limit_end_year, 1000);
    assert!(resolved.grid.show_week_numbers);
}

// ===== Overrides =====

#[test]
#[serial(env)]
fn env_month_pattern_overrides_config_file() {
    let config_file = ConfigFile {
        locale: Some(PanelLocale {
            formatted_month_pattern: Some("MM/YYYY".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    env::set_var(MONTH_PATTERN_ENV_VAR, "YYYY MMMM");
    let resolved = apply_env_overrides(merge_config(Some(config_file)));
    env::remove_var(MONTH_PATTERN_ENV_VAR);

    assert_eq!(
        resolved.locale.formatted_month_pattern,
        Some("YYYY MMMM".to_string())
    );
}

#[test]
#[serial(env)]
fn env_overrides_leave_config_alone_when_unset() {
    env::remove_var(MONTH_PATTERN_ENV_VAR);
    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn cli_overrides_win_over_everything() {
    let config_file = ConfigFile {
        class_prefix: Some("file".to_string()),
        output_format: Some("DD/MM".to_string()),
        locale: Some(PanelLocale {
            today: Some("Heute".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let overrides = CliOverrides {
        iso_week: true,
        class_prefix: Some("cli".to_string()),
        today_label: Some("Now".to_string()),
        output_format: Some("YYYY".to_string()),
        ..Default::default()
    };

    let resolved = apply_cli_overrides(merge_config(Some(config_file)), overrides);
    assert!(resolved.iso_week);
    assert_eq!(resolved.class_prefix, "cli");
    assert_eq!(resolved.locale.today, Some("Now".to_string()));
    assert_eq!(resolved.output_format, "YYYY");
}

#[test]
fn cli_switches_do_not_unset_config_flags() {
    let config_file = ConfigFile {
        bordered: Some(true),
        ..Default::default()
    };
    let resolved = apply_cli_overrides(merge_config(Some(config_file)), CliOverrides::default());
    assert!(resolved.bordered, "absent --bordered must not clear the file setting");
}

// ===== into_props =====

#[test]
fn into_props_carries_resolved_values() {
    let value = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    let resolved = ResolvedConfig {
        bordered: true,
        class_name: Some("x".to_string()),
        ..Default::default()
    };

    let props = resolved.into_props(Some(value), None);
    assert_eq!(props.value, PanelValue::Controlled(value));
    assert_eq!(props.default_value, None);
    assert!(props.bordered);
    assert_eq!(props.class_prefix, "calendar");
    assert_eq!(props.class_name, Some("x".to_string()));
}

#[test]
fn into_props_without_value_is_uncontrolled() {
    let default_value = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    let props = ResolvedConfig::default().into_props(None, Some(default_value));
    assert_eq!(props.value, PanelValue::Uncontrolled);
    assert_eq!(props.default_value, Some(default_value));
}
