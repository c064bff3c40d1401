//! A two-click date range picker for tessera-ui.
//!
//! The first click in the calendar sets the start date and the second sets
//! the end date. Clicking a day before the current start while choosing the
//! end swaps the two, so the stored range is always ordered. The field above
//! the calendar shows `Start - End` placeholders for missing endpoints and a
//! clear control once any endpoint is set.
//!
//! The selection rules live in [`foundation`], which has no renderer
//! dependency and can be tested on its own.
//!
//! ## Components
//!
//! - [`date_range_picker::date_range_picker`]: field plus popup calendar.
//! - [`range_field::date_range_field`]: the read-only field alone.
//! - [`range_calendar::range_calendar`]: the month grid with range bands.
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod date_range_picker;
pub mod range_calendar;
pub mod range_field;

pub use tessera_date_range_foundation as foundation;
pub use tessera_date_range_foundation::{
    DateRange, Error, NaiveDate, Result, Turn, Weekday, calendar::YearMonth, format::RangeFormat,
    selection::DateRangePickerState,
};
