//! Domain model types (pure).
//!
//! Dates, patterns, locale strings and keyboard intents. Nothing here
//! touches the terminal or the filesystem.

pub mod clock;
pub mod date_math;
pub mod date_pattern;
pub mod error;
pub mod key_action;
pub mod locale;

// Re-export for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use date_pattern::{DatePattern, DEFAULT_MONTH_PATTERN, GRID_DAY_PATTERN};
pub use error::AppError;
pub use key_action::KeyAction;
pub use locale::PanelLocale;
