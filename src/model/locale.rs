//! Panel locale strings with hardcoded fallbacks.

use super::date_pattern::{DatePattern, DEFAULT_MONTH_PATTERN};
use chrono::Weekday;
use serde::Deserialize;
use tracing::warn;

/// Fallback label for the "Today" toolbar button.
pub const DEFAULT_TODAY_LABEL: &str = "Today";

/// Fallback weekday header labels, Sunday first.
pub const DEFAULT_WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Localized strings consumed by the panel and its grid.
///
/// Every field is optional; absent fields fall back to English defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelLocale {
    /// Label of the "Today" button.
    #[serde(default)]
    pub today: Option<String>,

    /// Title pattern, e.g. `"MMMM YYYY"`.
    #[serde(default)]
    pub formatted_month_pattern: Option<String>,

    /// Weekday header labels, Sunday first. Must contain exactly 7 entries.
    #[serde(default)]
    pub weekday_labels: Option<Vec<String>>,
}

impl PanelLocale {
    /// Label for the "Today" button. Empty labels fall back too.
    pub fn today_label(&self) -> &str {
        non_empty(self.today.as_deref()).unwrap_or(DEFAULT_TODAY_LABEL)
    }

    /// Compiled title pattern. Empty patterns fall back too.
    pub fn month_pattern(&self) -> DatePattern {
        DatePattern::parse(
            non_empty(self.formatted_month_pattern.as_deref()).unwrap_or(DEFAULT_MONTH_PATTERN),
        )
    }

    /// Drop a weekday label list that does not have exactly seven entries.
    ///
    /// Called once when a panel is built, so the problem is logged once
    /// instead of on every rendered header cell.
    pub fn validated(mut self) -> Self {
        if let Some(labels) = &self.weekday_labels {
            if labels.len() != DEFAULT_WEEKDAY_LABELS.len() {
                warn!(
                    count = labels.len(),
                    "weekday_labels must have 7 entries, using defaults"
                );
                self.weekday_labels = None;
            }
        }
        self
    }

    /// Header label for one weekday.
    ///
    /// Falls back to the default labels when the configured list does not
    /// have exactly seven entries.
    pub fn weekday_label(&self, weekday: Weekday) -> &str {
        let index = weekday.num_days_from_sunday() as usize;
        match &self.weekday_labels {
            Some(labels) if labels.len() == DEFAULT_WEEKDAY_LABELS.len() => &labels[index],
            _ => DEFAULT_WEEKDAY_LABELS[index],
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
