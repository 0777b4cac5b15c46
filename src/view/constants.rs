//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Width of one day cell in columns (right-aligned day number + gap).
pub const CELL_WIDTH: u16 = 4;

/// Width of one day cell in compact mode.
pub const COMPACT_CELL_WIDTH: u16 = 3;

/// Width of the optional ISO week-number column.
pub const WEEK_NUMBER_WIDTH: u16 = 4;

/// Rows used by the title bar above the grid.
pub const HEADER_HEIGHT: u16 = 1;

/// Rows used by the weekday header.
pub const WEEKDAY_HEADER_HEIGHT: u16 = 1;

/// Rows used by the "Today" toolbar below the grid.
pub const TOOLBAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line at the bottom of the screen with keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of one month entry in the dropdown (`Jan` + gap).
pub const DROPDOWN_MONTH_WIDTH: u16 = 5;

/// Months per dropdown row.
pub const DROPDOWN_MONTHS_PER_ROW: u16 = 3;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
