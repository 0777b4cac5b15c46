//! Display patterns in the `MMMM YYYY` token style.
//!
//! Locale files and the CLI express formats with the token vocabulary used
//! by calendar locales (`YYYY`, `MMMM`, `DD`, ...). Patterns are compiled
//! once into a chrono strftime string; text inside `[...]` is literal.

use chrono::NaiveDate;
use std::fmt;

/// Default pattern for the panel title.
pub const DEFAULT_MONTH_PATTERN: &str = "MMMM YYYY";

/// Pattern the panel hands to the grid for per-day formatting.
pub const GRID_DAY_PATTERN: &str = "YYYY-MM-DD";

/// Token table, longest tokens first so `MMMM` wins over `MM`.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("GGGG", "%G"),
    ("MMMM", "%B"),
    ("dddd", "%A"),
    ("DDDD", "%j"),
    ("MMM", "%b"),
    ("ddd", "%a"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("WW", "%V"),
    ("M", "%-m"),
    ("D", "%-d"),
    ("W", "%-V"),
    ("d", "%w"),
];

/// A compiled display pattern.
///
/// # Examples
///
/// ```
/// use calpanel::model::DatePattern;
/// use chrono::NaiveDate;
///
/// let pattern = DatePattern::parse("MMMM YYYY");
/// let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
/// assert_eq!(pattern.format(date), "February 2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    strftime: String,
}

impl DatePattern {
    /// Compile a pattern. Unknown characters are kept as literals.
    pub fn parse(pattern: &str) -> Self {
        let mut strftime = String::with_capacity(pattern.len() * 2);
        let mut rest = pattern;

        while let Some(ch) = rest.chars().next() {
            if ch == '[' {
                // Bracketed literal; an unterminated bracket runs to the end.
                let body = &rest[1..];
                let (literal, remaining) = match body.find(']') {
                    Some(end) => (&body[..end], &body[end + 1..]),
                    None => (body, ""),
                };
                push_literal(&mut strftime, literal);
                rest = remaining;
                continue;
            }

            if let Some((token, spec)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
                strftime.push_str(spec);
                rest = &rest[token.len()..];
                continue;
            }

            push_literal(&mut strftime, &rest[..ch.len_utf8()]);
            rest = &rest[ch.len_utf8()..];
        }

        Self {
            source: pattern.to_string(),
            strftime,
        }
    }

    /// The pattern as originally written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled chrono format string.
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Format a date with this pattern.
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.strftime).to_string()
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::parse(DEFAULT_MONTH_PATTERN)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn push_literal(out: &mut String, literal: &str) {
    for ch in literal.chars() {
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
    }
}
