//! Text shown in the range field.
use std::fmt::Write as _;

use chrono::{
    NaiveDate,
    format::{Item, StrftimeItems},
};

use crate::{
    error::{Error, Result},
    selection::DateRange,
};

/// Default endpoint pattern, rendering dates like `15 Jan 2024`.
pub const DEFAULT_DATE_PATTERN: &str = "%-d %b %Y";
/// Shown in place of a missing start date.
pub const START_PLACEHOLDER: &str = "Start";
/// Shown in place of a missing end date.
pub const END_PLACEHOLDER: &str = "End";
/// Placed between the two endpoints.
pub const DEFAULT_SEPARATOR: &str = " - ";
/// Prefix added to external validation messages.
pub const ERROR_PREFIX: &str = "* ";

/// How a [`DateRange`] is rendered as a single line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeFormat {
    pattern: String,
    start_placeholder: String,
    end_placeholder: String,
    separator: String,
}

impl RangeFormat {
    /// Creates a format using a chrono strftime `pattern` for each endpoint.
    ///
    /// Patterns that reference time-of-day or offset fields are rejected,
    /// since a calendar date cannot render them.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        validate_pattern(&pattern)?;
        Ok(Self {
            pattern,
            ..Self::default()
        })
    }

    /// Replaces the texts shown for missing endpoints.
    pub fn with_placeholders(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_placeholder = start.into();
        self.end_placeholder = end.into();
        self
    }

    /// Replaces the text placed between the endpoints.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Returns the endpoint pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Formats a single endpoint.
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.pattern).to_string()
    }

    /// Formats both endpoints, substituting placeholders for missing ones.
    pub fn format_range(&self, range: DateRange) -> String {
        let start = range
            .start()
            .map_or_else(|| self.start_placeholder.clone(), |d| self.format_date(d));
        let end = range
            .end()
            .map_or_else(|| self.end_placeholder.clone(), |d| self.format_date(d));
        format!("{start}{}{end}", self.separator)
    }
}

impl Default for RangeFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_PATTERN.to_string(),
            start_placeholder: START_PLACEHOLDER.to_string(),
            end_placeholder: END_PLACEHOLDER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = || Error::InvalidFormatPattern(pattern.to_string());
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    let mut probe = String::new();
    write!(
        probe,
        "{}",
        NaiveDate::MIN.format_with_items(items.into_iter())
    )
    .map_err(|_| invalid())
}

/// Formats `range` with the default [`RangeFormat`].
pub fn format_range(range: DateRange) -> String {
    RangeFormat::default().format_range(range)
}

/// Formats an external validation message for display under the field.
pub fn format_error(message: &str) -> String {
    format!("{ERROR_PREFIX}{message}")
}
