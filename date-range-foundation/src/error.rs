//! Error types for range picker configuration.
use thiserror::Error;

/// Errors raised while building picker configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The date pattern contains items chrono cannot render.
    #[error("Invalid date format pattern: {0:?}")]
    InvalidFormatPattern(String),

    /// Month outside 1-12.
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },

    /// A weekday name that could not be parsed.
    #[error("Invalid weekday: {0:?}")]
    InvalidWeekday(String),
}

/// Type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
