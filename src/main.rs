//! Calendar panel date picker - Entry Point

use calpanel::config::CliOverrides;
use calpanel::model::{error::parse_cli_date, DatePattern};
use calpanel::state::{AppState, CalendarPanel, PanelCallbacks};
use calpanel::view::{ColorConfig, PanelStyles};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Calendar panel - pick a date in the terminal
#[derive(Parser, Debug)]
#[command(name = "calpanel")]
#[command(version)]
#[command(about = "Terminal calendar panel: pick a date and print it to stdout")]
pub struct Args {
    /// Controlled value (YYYY-MM-DD): the panel always shows this date
    #[arg(long, value_parser = parse_cli_date)]
    pub value: Option<NaiveDate>,

    /// Initial value (YYYY-MM-DD) when no controlled value is given
    #[arg(long, value_parser = parse_cli_date)]
    pub default_value: Option<NaiveDate>,

    /// Start weeks on Monday
    #[arg(long)]
    pub iso_week: bool,

    /// Narrow cells without custom content
    #[arg(long)]
    pub compact: bool,

    /// Draw a border around the panel
    #[arg(long)]
    pub bordered: bool,

    /// Prefix for generated class names
    #[arg(long)]
    pub class_prefix: Option<String>,

    /// Extra class name added to the panel
    #[arg(long)]
    pub class_name: Option<String>,

    /// Label of the "Today" button
    #[arg(long)]
    pub today_label: Option<String>,

    /// Title pattern, e.g. "MMMM YYYY"
    #[arg(long)]
    pub month_pattern: Option<String>,

    /// Pattern used to print the picked date
    #[arg(long)]
    pub output_format: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// The flags that override configuration values.
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            iso_week: self.iso_week,
            compact: self.compact,
            bordered: self.bordered,
            class_prefix: self.class_prefix.clone(),
            class_name: self.class_name.clone(),
            today_label: self.today_label.clone(),
            month_pattern: self.month_pattern.clone(),
            output_format: self.output_format.clone(),
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = calpanel::config::load_config_with_precedence(args.config.clone())?;
        let merged = calpanel::config::merge_config(config_file);
        let with_env = calpanel::config::apply_env_overrides(merged);
        calpanel::config::apply_cli_overrides(with_env, args.cli_overrides())
    };

    calpanel::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let output_format = DatePattern::parse(&config.output_format);
    let props = config.into_props(args.value, args.default_value);
    let callbacks = PanelCallbacks::default()
        .on_select(|date| info!(%date, "on_select"))
        .on_change(|date| info!(%date, "on_change"));
    let panel = CalendarPanel::new(props, callbacks);
    info!(classes = %panel.class_names(), title = %panel.title(), "panel ready");

    let styles = PanelStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    match calpanel::view::run_panel(AppState::new(panel), styles)? {
        Some(date) => {
            println!("{}", output_format.format(date));
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
