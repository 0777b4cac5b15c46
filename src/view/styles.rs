//! Calendar panel styling configuration.
//!
//! Distinguishes out-of-month days, today, the current value and the
//! keyboard cursor. With colors disabled only text modifiers remain, so the
//! grid stays readable under `NO_COLOR`.

use ratatui::style::{Color, Modifier, Style};

/// Style for dimmed hint text (status bar, help footer).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Style for help overlay section headers.
pub const SECTION_HEADER: Style = Style::new()
    .fg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Create a ColorConfig with colors explicitly on or off.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PanelStyles =====

/// Styles for every element of the calendar panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyles {
    /// Panel border.
    pub border: Style,
    /// Month/year title.
    pub title: Style,
    /// Weekday header labels.
    pub weekday: Style,
    /// Days of the page month.
    pub day: Style,
    /// Leading/trailing days of neighbouring months.
    pub outside_month: Style,
    /// Today's cell.
    pub today: Style,
    /// The panel's current value.
    pub selected: Style,
    /// The keyboard cursor.
    pub cursor: Style,
    /// Week-number column and custom cell content.
    pub muted: Style,
    /// "Today" toolbar button.
    pub toolbar_button: Style,
}

impl PanelStyles {
    /// Create styles with the default color scheme, honouring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles for the given color configuration.
    ///
    /// If colors are disabled, only text modifiers are used.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let cursor = Style::default().add_modifier(Modifier::REVERSED);
        let today = Style::default().add_modifier(Modifier::UNDERLINED);

        if config.colors_enabled() {
            Self {
                border: Style::default().fg(Color::Cyan),
                title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                weekday: Style::default().fg(Color::Yellow),
                day: Style::default(),
                outside_month: Style::default().fg(Color::DarkGray),
                today: today.fg(Color::Green),
                selected: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                cursor,
                muted: MUTED_TEXT,
                toolbar_button: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                border: Style::default(),
                title: Style::default().add_modifier(Modifier::BOLD),
                weekday: Style::default(),
                day: Style::default(),
                outside_month: Style::default().add_modifier(Modifier::DIM),
                today,
                selected: Style::default().add_modifier(Modifier::BOLD),
                cursor,
                muted: Style::default().add_modifier(Modifier::DIM),
                toolbar_button: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for PanelStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
