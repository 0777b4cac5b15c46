//! Error types for calpanel.
//!
//! The panel core never fails: absent callbacks are no-ops and absent locale
//! fields fall back to defaults. Errors only arise at the impure edges
//! (configuration, logging, the terminal, and CLI date parsing) and all of
//! them compose into [`AppError`] via `From`, so `main` can use `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing initialization failures
//!   - [`TuiError`](crate::view::TuiError) - terminal I/O failures
//!   - `InvalidDate` - a `YYYY-MM-DD` argument that does not parse

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use chrono::NaiveDate;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```
/// use calpanel::model::error::{parse_cli_date, AppError};
///
/// let err = parse_cli_date("2024-13-01").unwrap_err();
/// assert!(matches!(err, AppError::InvalidDate { .. }));
/// assert!(err.to_string().contains("2024-13-01"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    ///
    /// Fatal at startup: a config file that exists but is broken is reported
    /// rather than silently ignored.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, rendering or teardown failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),

    /// A date argument was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// Parse a `YYYY-MM-DD` date from the command line.
///
/// # Errors
///
/// Returns [`AppError::InvalidDate`] if the text is not a valid calendar date.
pub fn parse_cli_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| AppError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
