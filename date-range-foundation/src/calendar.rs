//! Calendar grid and per-day range styling.
//!
//! ## Usage
//!
//! Build the visible grid for a month with [`month_cells`] and style each
//! cell from its [`DayCell`] flags.
use chrono::{Datelike, Months, NaiveDate, TimeDelta, Utc, Weekday};

use crate::{
    error::{Error, Result},
    selection::DateRange,
};

/// Days in one calendar row.
pub const DAYS_PER_WEEK: usize = 7;
/// Rows in the calendar grid. Six rows fit every month regardless of the
/// weekday it starts on.
pub const GRID_WEEKS: usize = 6;

/// A year and month pair used for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year/month pair if the values are valid.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Like [`Self::new`], reporting why the pair was rejected.
    pub fn try_new(year: i32, month: u32) -> Result<Self> {
        Self::new(year, month).ok_or(Error::InvalidMonth { year, month })
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Returns the last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns the number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Returns true when `date` falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Adds or subtracts months, adjusting the year as needed.
    ///
    /// Stays on `self` when the result falls outside the supported date range.
    pub fn add_months(&self, delta: i32) -> Self {
        self.checked_add_months(delta).unwrap_or(*self)
    }

    /// Adds or subtracts months, returning `None` outside the supported date
    /// range.
    pub fn checked_add_months(&self, delta: i32) -> Option<Self> {
        let total = (self.year * 12 + (self.month as i32 - 1)).checked_add(delta)?;
        Self::new(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
    }

    /// Returns a label such as `January 2024`.
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// Returns today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parses a weekday name such as `mon` or `Sunday`.
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| Error::InvalidWeekday(name.to_string()))
}

/// Returns the seven weekdays starting from `first_day_of_week`.
pub fn weekday_sequence(first_day_of_week: Weekday) -> [Weekday; DAYS_PER_WEEK] {
    let mut days = [first_day_of_week; DAYS_PER_WEEK];
    for i in 1..DAYS_PER_WEEK {
        days[i] = days[i - 1].succ();
    }
    days
}

/// Two-letter label for a weekday column header.
pub fn weekday_short_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Returns true when `date` opens a calendar row.
pub fn is_week_start(date: NaiveDate, first_day_of_week: Weekday) -> bool {
    date.weekday() == first_day_of_week
}

/// Returns true when `date` closes a calendar row.
pub fn is_week_end(date: NaiveDate, first_day_of_week: Weekday) -> bool {
    date.weekday() == first_day_of_week.pred()
}

/// Dates of the fixed grid shown for `month`.
///
/// The grid starts on the row containing the first of the month and includes
/// leading and trailing days of the neighbouring months.
pub fn month_grid(month: YearMonth, first_day_of_week: Weekday) -> Vec<NaiveDate> {
    let first = month.first_day();
    let offset = (first.weekday().num_days_from_monday() + DAYS_PER_WEEK as u32
        - first_day_of_week.num_days_from_monday())
        % DAYS_PER_WEEK as u32;
    let grid_start = first
        .checked_sub_signed(TimeDelta::days(offset as i64))
        .unwrap_or(first);
    grid_start
        .iter_days()
        .take(DAYS_PER_WEEK * GRID_WEEKS)
        .collect()
}

/// Which horizontal edges of a highlighted cell are rounded.
///
/// Rounding at the range ends and at row boundaries turns the highlighted
/// cells into one pill per calendar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CornerRounding {
    /// Square on both sides.
    #[default]
    None,
    /// Rounded on the leading edge only.
    Left,
    /// Rounded on the trailing edge only.
    Right,
    /// Rounded on both edges.
    Both,
}

impl CornerRounding {
    /// Combines the two edge predicates.
    pub fn from_edges(left: bool, right: bool) -> Self {
        match (left, right) {
            (false, false) => CornerRounding::None,
            (true, false) => CornerRounding::Left,
            (false, true) => CornerRounding::Right,
            (true, true) => CornerRounding::Both,
        }
    }

    /// Returns true when the leading edge is rounded.
    pub fn rounds_left(self) -> bool {
        matches!(self, CornerRounding::Left | CornerRounding::Both)
    }

    /// Returns true when the trailing edge is rounded.
    pub fn rounds_right(self) -> bool {
        matches!(self, CornerRounding::Right | CornerRounding::Both)
    }
}

/// Corner rounding for `date` given the range bounds.
///
/// Days outside the bounds are never rounded.
pub fn corner_rounding(
    date: NaiveDate,
    bounds: Option<(NaiveDate, NaiveDate)>,
    first_day_of_week: Weekday,
) -> CornerRounding {
    let Some((first, last)) = bounds else {
        return CornerRounding::None;
    };
    if date < first || date > last {
        return CornerRounding::None;
    }
    CornerRounding::from_edges(
        date == first || is_week_start(date, first_day_of_week),
        date == last || is_week_end(date, first_day_of_week),
    )
}

/// How strongly a day is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeHighlight {
    /// Outside the range.
    #[default]
    None,
    /// Between the bounds.
    InRange,
    /// One of the bounds.
    Endpoint,
}

/// Everything needed to draw one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The day drawn in this cell.
    pub date: NaiveDate,
    /// False for leading and trailing days of neighbouring months.
    pub in_displayed_month: bool,
    /// True for the current date.
    pub is_today: bool,
    /// Within the range bounds, inclusive.
    pub in_range: bool,
    /// Equal to the earlier bound.
    pub is_first: bool,
    /// Equal to the later bound.
    pub is_last: bool,
    /// Band rounding for this cell.
    pub rounding: CornerRounding,
}

impl DayCell {
    /// Computes the cell for `date` inside the grid of `month`.
    pub fn compute(
        date: NaiveDate,
        range: DateRange,
        month: YearMonth,
        first_day_of_week: Weekday,
        today: NaiveDate,
    ) -> Self {
        let bounds = range.bounds();
        let (is_first, is_last) =
            bounds.map_or((false, false), |(first, last)| (date == first, date == last));
        Self {
            date,
            in_displayed_month: month.contains(date),
            is_today: date == today,
            in_range: range.contains(date),
            is_first,
            is_last,
            rounding: corner_rounding(date, bounds, first_day_of_week),
        }
    }

    /// Returns true for either bound.
    pub fn is_endpoint(&self) -> bool {
        self.is_first || self.is_last
    }

    /// Collapses the range flags into a highlight level.
    pub fn highlight(&self) -> RangeHighlight {
        if self.is_endpoint() {
            RangeHighlight::Endpoint
        } else if self.in_range {
            RangeHighlight::InRange
        } else {
            RangeHighlight::None
        }
    }
}

/// Computes every cell of the grid for `month`.
pub fn month_cells(
    month: YearMonth,
    range: DateRange,
    first_day_of_week: Weekday,
    today: NaiveDate,
) -> Vec<DayCell> {
    month_grid(month, first_day_of_week)
        .into_iter()
        .map(|date| DayCell::compute(date, range, month, first_day_of_week, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_year_month_navigation() {
        let jan = YearMonth::new(2024, 1).unwrap();
        assert_eq!(jan.add_months(-1), YearMonth::new(2023, 12).unwrap());
        assert_eq!(jan.add_months(13), YearMonth::new(2025, 2).unwrap());
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(jan.label(), "January 2024");
        assert!(YearMonth::new(2024, 13).is_none());
        assert_eq!(
            YearMonth::try_new(2024, 0),
            Err(Error::InvalidMonth {
                year: 2024,
                month: 0
            })
        );
    }

    #[test]
    fn test_add_months_saturates_at_date_limits() {
        let last = YearMonth::of(NaiveDate::MAX);
        assert_eq!(last.checked_add_months(1), None);
        assert_eq!(last.add_months(1), last);
        assert_eq!(last.add_months(3).label(), last.label());

        let first = YearMonth::of(NaiveDate::MIN);
        assert_eq!(first.checked_add_months(-1), None);
        assert_eq!(first.add_months(-1), first);
        assert_eq!(first.add_months(1).first_day(), first.last_day().succ_opt().unwrap());
    }

    #[test]
    fn test_month_grid_monday_first() {
        // 1 Jan 2024 is a Monday.
        let grid = month_grid(YearMonth::new(2024, 1).unwrap(), Weekday::Mon);
        assert_eq!(grid.len(), DAYS_PER_WEEK * GRID_WEEKS);
        assert_eq!(grid[0], date(2024, 1, 1));
        assert_eq!(grid[41], date(2024, 2, 11));
    }

    #[test]
    fn test_month_grid_sunday_first_has_leading_days() {
        // 1 Feb 2024 is a Thursday.
        let grid = month_grid(YearMonth::new(2024, 2).unwrap(), Weekday::Sun);
        assert_eq!(grid[0], date(2024, 1, 28));
        assert_eq!(grid[4], date(2024, 2, 1));
        assert_eq!(grid[41], date(2024, 3, 9));
    }

    #[test]
    fn test_weekday_sequence_and_parse() {
        let days = weekday_sequence(Weekday::Sun);
        assert_eq!(days[0], Weekday::Sun);
        assert_eq!(days[6], Weekday::Sat);
        assert_eq!(parse_weekday("monday"), Ok(Weekday::Mon));
        assert_eq!(parse_weekday(" Sun "), Ok(Weekday::Sun));
        assert_eq!(
            parse_weekday("someday"),
            Err(Error::InvalidWeekday("someday".to_string()))
        );
    }

    #[test]
    fn test_corner_rounding_forms_band() {
        // Wed 10 Jan 2024 to Tue 23 Jan 2024, Monday-first rows.
        let bounds = Some((date(2024, 1, 10), date(2024, 1, 23)));
        let round = |d| corner_rounding(d, bounds, Weekday::Mon);

        assert_eq!(round(date(2024, 1, 9)), CornerRounding::None);
        assert_eq!(round(date(2024, 1, 10)), CornerRounding::Left);
        assert_eq!(round(date(2024, 1, 12)), CornerRounding::None);
        assert_eq!(round(date(2024, 1, 14)), CornerRounding::Right);
        assert_eq!(round(date(2024, 1, 15)), CornerRounding::Left);
        assert_eq!(round(date(2024, 1, 23)), CornerRounding::Right);
        assert_eq!(round(date(2024, 1, 24)), CornerRounding::None);
    }

    #[test]
    fn test_corner_rounding_single_day_and_row_edges() {
        let day = date(2024, 1, 10);
        assert_eq!(
            corner_rounding(day, Some((day, day)), Weekday::Mon),
            CornerRounding::Both
        );
        // Sunday that both starts and ends the range on a Sunday-first grid.
        let sunday = date(2024, 1, 14);
        let bounds = Some((date(2024, 1, 13), sunday));
        assert_eq!(
            corner_rounding(sunday, bounds, Weekday::Sun),
            CornerRounding::Both
        );
        assert_eq!(corner_rounding(day, None, Weekday::Mon), CornerRounding::None);
    }

    #[test]
    fn test_cells_between_bounds_are_in_range() {
        let start = date(2024, 1, 10);
        let end = date(2024, 1, 20);
        let range = DateRange::new(Some(start), Some(end));
        let cells = month_cells(
            YearMonth::new(2024, 1).unwrap(),
            range,
            Weekday::Mon,
            date(2024, 1, 15),
        );

        for cell in &cells {
            if cell.date > start && cell.date < end {
                assert_eq!(cell.highlight(), RangeHighlight::InRange, "{}", cell.date);
            } else if cell.date == start || cell.date == end {
                assert_eq!(cell.highlight(), RangeHighlight::Endpoint, "{}", cell.date);
            } else {
                assert_eq!(cell.highlight(), RangeHighlight::None, "{}", cell.date);
            }
        }

        let start_cell = cells.iter().find(|c| c.date == start).unwrap();
        assert!(start_cell.is_first && !start_cell.is_last && start_cell.in_range);
        let today = cells.iter().find(|c| c.is_today).unwrap();
        assert_eq!(today.date, date(2024, 1, 15));
    }

    #[test]
    fn test_lone_endpoint_bounds_single_cell() {
        let range = DateRange::new(None, Some(date(2024, 3, 8)));
        let cells = month_cells(
            YearMonth::new(2024, 3).unwrap(),
            range,
            Weekday::Mon,
            date(2000, 1, 1),
        );
        let highlighted: Vec<_> = cells.iter().filter(|c| c.in_range).collect();
        assert_eq!(highlighted.len(), 1);
        assert!(highlighted[0].is_first && highlighted[0].is_last);
        assert_eq!(highlighted[0].rounding, CornerRounding::Both);
    }

    #[test]
    fn test_outside_month_days_are_flagged() {
        let cells = month_cells(
            YearMonth::new(2024, 2).unwrap(),
            DateRange::EMPTY,
            Weekday::Mon,
            date(2000, 1, 1),
        );
        // 1 Feb 2024 is a Thursday, so Mon-Wed of the first row are January.
        assert!(!cells[0].in_displayed_month);
        assert!(cells[3].in_displayed_month);
        assert_eq!(cells[3].date, date(2024, 2, 1));
    }
}
