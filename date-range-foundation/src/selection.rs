//! Two-click range selection.
//!
//! ## Usage
//!
//! The selected pair is owned by the caller. [`DateRangePickerState`] keeps
//! only the turn flag plus popup and navigation state, and turns clicks into
//! the next pair to report upward.
use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::calendar::YearMonth;

/// A pair of optional endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// A range with neither endpoint set.
    pub const EMPTY: Self = Self {
        start: None,
        end: None,
    };

    /// Creates a range from its two slots.
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Returns the value in the start slot.
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Returns the value in the end slot.
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns true when neither endpoint is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns the earlier and later bound.
    ///
    /// A lone endpoint bounds both sides.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
            (Some(date), None) | (None, Some(date)) => Some((date, date)),
            (None, None) => None,
        }
    }

    /// Returns true when `date` lies within the bounds, inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.bounds()
            .is_some_and(|(first, last)| first <= date && date <= last)
    }

    /// Number of days covered by the bounds, counting both ends.
    pub fn len_days(&self) -> Option<u32> {
        self.bounds()
            .map(|(first, last)| (last - first).num_days().unsigned_abs() as u32 + 1)
    }
}

impl From<(Option<NaiveDate>, Option<NaiveDate>)> for DateRange {
    fn from((start, end): (Option<NaiveDate>, Option<NaiveDate>)) -> Self {
        Self::new(start, end)
    }
}

impl From<DateRange> for (Option<NaiveDate>, Option<NaiveDate>) {
    fn from(range: DateRange) -> Self {
        (range.start, range.end)
    }
}

/// Which endpoint the next click sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Turn {
    /// The next click sets the start slot.
    #[default]
    Start,
    /// The next click sets the end slot.
    End,
}

/// Result of applying one click to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Range to report to the caller.
    pub range: DateRange,
    /// Turn flag after the click.
    pub turn: Turn,
}

/// Applies a calendar click to `range`.
///
/// On the start turn a click past the current end drops that end. On the end
/// turn a click before the current start swaps the pair and keeps the end
/// turn; any other end-turn click completes the range and hands the turn back
/// to the start slot.
pub fn apply_click(range: DateRange, turn: Turn, date: NaiveDate) -> ClickOutcome {
    match turn {
        Turn::Start => {
            let end = range.end.filter(|end| date <= *end);
            ClickOutcome {
                range: DateRange::new(Some(date), end),
                turn: Turn::End,
            }
        }
        Turn::End => match range.start {
            Some(start) if date < start => ClickOutcome {
                range: DateRange::new(Some(date), Some(start)),
                turn: Turn::End,
            },
            start => ClickOutcome {
                range: DateRange::new(start, Some(date)),
                turn: Turn::Start,
            },
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MonthOverride {
    month: YearMonth,
    anchor: Option<NaiveDate>,
}

/// UI state kept by a date range picker between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangePickerState {
    turn: Turn,
    expanded: bool,
    month_override: Option<MonthOverride>,
}

impl DateRangePickerState {
    /// Creates a collapsed picker state with the given turn.
    pub fn new(initial_turn: Turn) -> Self {
        Self {
            turn: initial_turn,
            expanded: false,
            month_override: None,
        }
    }

    /// Returns which endpoint the next click sets.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns whether the calendar popup is open.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Opens or closes the calendar popup.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Flips the calendar popup between open and closed.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Returns the date the calendar is positioned on for `range`.
    pub fn picker_value(&self, range: DateRange) -> Option<NaiveDate> {
        match self.turn {
            Turn::Start => range.start(),
            Turn::End => range.end(),
        }
    }

    /// Handles a click on `date`, returning the range to report.
    ///
    /// A click without a date is ignored and returns `None`. When the click
    /// completes a range and `close_on_complete` is set, the popup closes.
    pub fn click(
        &mut self,
        range: DateRange,
        date: Option<NaiveDate>,
        close_on_complete: bool,
    ) -> Option<DateRange> {
        let Some(date) = date else {
            trace!("ignoring range picker click without a date");
            return None;
        };
        let outcome = apply_click(range, self.turn, date);
        debug!(
            ?date,
            from = ?self.turn,
            to = ?outcome.turn,
            range = ?outcome.range,
            "range picker click"
        );
        self.turn = outcome.turn;
        if self.turn == Turn::Start && close_on_complete {
            self.expanded = false;
        }
        Some(outcome.range)
    }

    /// Resets the turn and navigation, returning the empty range to report.
    ///
    /// The popup is closed rather than opened.
    pub fn clear(&mut self) -> DateRange {
        debug!("range picker cleared");
        self.turn = Turn::Start;
        self.expanded = false;
        self.month_override = None;
        DateRange::EMPTY
    }

    /// Returns the month the calendar shows for `range`.
    ///
    /// Follows the picker value, falling back to whichever endpoint is set and
    /// then to `today`. A month chosen with
    /// [`Self::show_previous_month`] or [`Self::show_next_month`] sticks
    /// until the picker value changes.
    pub fn displayed_month(&self, range: DateRange, today: NaiveDate) -> YearMonth {
        let value = self.picker_value(range);
        match self.month_override {
            Some(nav) if nav.anchor == value => nav.month,
            _ => YearMonth::of(
                value
                    .or(range.start())
                    .or(range.end())
                    .unwrap_or(today),
            ),
        }
    }

    /// Moves the calendar one month back.
    pub fn show_previous_month(&mut self, range: DateRange, today: NaiveDate) {
        self.navigate(range, today, -1);
    }

    /// Moves the calendar one month forward.
    pub fn show_next_month(&mut self, range: DateRange, today: NaiveDate) {
        self.navigate(range, today, 1);
    }

    fn navigate(&mut self, range: DateRange, today: NaiveDate, delta: i32) {
        let month = self.displayed_month(range, today).add_months(delta);
        trace!(?month, "range picker month navigation");
        self.month_override = Some(MonthOverride {
            month,
            anchor: self.picker_value(range),
        });
    }
}

impl Default for DateRangePickerState {
    fn default() -> Self {
        DateRangePickerState::new(Turn::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn click_all(state: &mut DateRangePickerState, dates: &[NaiveDate]) -> DateRange {
        let mut range = DateRange::EMPTY;
        for d in dates {
            if let Some(next) = state.click(range, Some(*d), true) {
                range = next;
            }
        }
        range
    }

    #[test]
    fn test_forward_clicks_complete_range() {
        let mut state = DateRangePickerState::default();
        let range = click_all(&mut state, &[date(2024, 1, 10), date(2024, 1, 20)]);
        assert_eq!(
            range,
            DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)))
        );
        assert_eq!(state.turn(), Turn::Start);
    }

    #[test]
    fn test_backward_clicks_swap_and_keep_end_turn() {
        let mut state = DateRangePickerState::default();
        let range = click_all(&mut state, &[date(2024, 1, 20), date(2024, 1, 10)]);
        assert_eq!(
            range,
            DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)))
        );
        assert_eq!(state.turn(), Turn::End);
    }

    #[test]
    fn test_same_day_twice() {
        let mut state = DateRangePickerState::default();
        let day = date(2024, 3, 5);
        let range = click_all(&mut state, &[day, day]);
        assert_eq!(range, DateRange::new(Some(day), Some(day)));
        assert_eq!(state.turn(), Turn::Start);
    }

    #[test]
    fn test_start_after_end_drops_end() {
        let range = DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)));
        let outcome = apply_click(range, Turn::Start, date(2024, 2, 1));
        assert_eq!(outcome.range, DateRange::new(Some(date(2024, 2, 1)), None));
        assert_eq!(outcome.turn, Turn::End);
    }

    #[test]
    fn test_start_before_end_keeps_end() {
        let range = DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)));
        let outcome = apply_click(range, Turn::Start, date(2024, 1, 15));
        assert_eq!(
            outcome.range,
            DateRange::new(Some(date(2024, 1, 15)), Some(date(2024, 1, 20)))
        );
        assert_eq!(outcome.turn, Turn::End);

        let outcome = apply_click(range, Turn::Start, date(2024, 1, 20));
        assert_eq!(outcome.range.end(), Some(date(2024, 1, 20)));
    }

    #[test]
    fn test_end_turn_without_start() {
        let outcome = apply_click(DateRange::EMPTY, Turn::End, date(2024, 5, 1));
        assert_eq!(outcome.range, DateRange::new(None, Some(date(2024, 5, 1))));
        assert_eq!(outcome.turn, Turn::Start);
    }

    #[test]
    fn test_missing_date_is_ignored() {
        let mut state = DateRangePickerState::new(Turn::End);
        state.set_expanded(true);
        let range = DateRange::new(Some(date(2024, 1, 1)), None);
        assert_eq!(state.click(range, None, true), None);
        assert_eq!(state.turn(), Turn::End);
        assert!(state.is_expanded());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = DateRangePickerState::new(Turn::End);
        state.set_expanded(true);
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 9)));
        state.show_next_month(range, date(2024, 1, 1));

        let cleared = state.clear();
        assert_eq!(cleared, DateRange::EMPTY);
        assert_eq!(state.turn(), Turn::Start);
        assert!(!state.is_expanded());
        assert_eq!(state.picker_value(cleared), None);
        assert_eq!(
            state.displayed_month(cleared, date(2030, 7, 4)),
            YearMonth::new(2030, 7).unwrap()
        );
    }

    #[test]
    fn test_picker_value_follows_turn() {
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 2, 1)));
        let mut state = DateRangePickerState::default();
        assert_eq!(state.picker_value(range), Some(date(2024, 1, 1)));
        state.click(DateRange::EMPTY, Some(date(2024, 1, 1)), true);
        assert_eq!(state.picker_value(range), Some(date(2024, 2, 1)));
    }

    #[test]
    fn test_completing_range_closes_popup() {
        let mut state = DateRangePickerState::default();
        state.set_expanded(true);
        let range = click_all(&mut state, &[date(2024, 1, 1)]);
        assert!(state.is_expanded());
        state.click(range, Some(date(2024, 1, 5)), true);
        assert!(!state.is_expanded());

        let mut state = DateRangePickerState::default();
        state.set_expanded(true);
        let range = state
            .click(DateRange::EMPTY, Some(date(2024, 1, 1)), false)
            .unwrap();
        state.click(range, Some(date(2024, 1, 5)), false);
        assert_eq!(state.turn(), Turn::Start);
        assert!(state.is_expanded());
    }

    #[test]
    fn test_month_navigation_sticks_until_value_changes() {
        let today = date(2024, 6, 15);
        let mut state = DateRangePickerState::default();
        let range = DateRange::new(Some(date(2024, 1, 10)), None);

        assert_eq!(
            state.displayed_month(range, today),
            YearMonth::new(2024, 1).unwrap()
        );
        state.show_previous_month(range, today);
        state.show_previous_month(range, today);
        assert_eq!(
            state.displayed_month(range, today),
            YearMonth::new(2023, 11).unwrap()
        );

        let range = state.click(range, Some(date(2023, 11, 3)), true).unwrap();
        assert_eq!(state.turn(), Turn::End);
        assert_eq!(state.picker_value(range), None);
        assert_eq!(
            state.displayed_month(range, today),
            YearMonth::new(2023, 11).unwrap()
        );
        assert_eq!(
            state.displayed_month(DateRange::EMPTY, today),
            YearMonth::new(2024, 6).unwrap()
        );
    }

    #[test]
    fn test_navigation_stops_at_last_supported_month() {
        let mut state = DateRangePickerState::default();
        let range = DateRange::new(Some(NaiveDate::MAX), None);
        for _ in 0..3 {
            state.show_next_month(range, NaiveDate::MAX);
        }
        let month = state.displayed_month(range, NaiveDate::MAX);
        assert_eq!(month, YearMonth::of(NaiveDate::MAX));
        assert!(month.contains(NaiveDate::MAX));
    }

    #[test]
    fn test_bounds_and_len() {
        let range = DateRange::new(Some(date(2024, 1, 20)), Some(date(2024, 1, 10)));
        assert_eq!(range.bounds(), Some((date(2024, 1, 10), date(2024, 1, 20))));
        assert_eq!(range.len_days(), Some(11));
        assert!(range.contains(date(2024, 1, 15)));
        assert!(!range.contains(date(2024, 1, 21)));

        let lone = DateRange::new(None, Some(date(2024, 1, 10)));
        assert_eq!(lone.bounds(), Some((date(2024, 1, 10), date(2024, 1, 10))));
        assert_eq!(lone.len_days(), Some(1));
        assert_eq!(DateRange::EMPTY.bounds(), None);
        assert!(DateRange::EMPTY.is_empty());
    }
}
