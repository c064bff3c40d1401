//! Renderer-independent pieces of the tessera date range picker.
//!
//! The picker is a controlled component: the caller owns the selected
//! [`DateRange`] and the picker reports each change through a callback. This
//! crate holds the click rules, the calendar grid with its range styling, and
//! the field text, none of which depend on a renderer.
//!
//! # Example
//!
//! ```
//! use tessera_date_range_foundation::{
//!     DateRange, NaiveDate, Turn,
//!     format::format_range,
//!     selection::DateRangePickerState,
//! };
//!
//! let mut state = DateRangePickerState::default();
//! let mut range = DateRange::EMPTY;
//! assert_eq!(format_range(range), "Start - End");
//!
//! for day in [20, 10] {
//!     let date = NaiveDate::from_ymd_opt(2024, 1, day);
//!     if let Some(next) = state.click(range, date, true) {
//!         range = next;
//!     }
//! }
//! assert_eq!(format_range(range), "10 Jan 2024 - 20 Jan 2024");
//! assert_eq!(state.turn(), Turn::End);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod calendar;
pub mod error;
pub mod format;
pub mod selection;

pub use chrono::{NaiveDate, Weekday};
pub use error::{Error, Result};
pub use selection::{DateRange, Turn};
