//! Two-click date range picker.
//!
//! ## Usage
//!
//! Use to let users choose a start and end date for bookings, reports or
//! filters. The picker is controlled: pass the current range in and store
//! the range handed to `on_change`.
use derive_setters::Setters;
use tessera_components::{
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    theme::MaterialTheme,
};
use tessera_date_range_foundation::{
    DateRange, NaiveDate, Turn, Weekday, calendar, format::RangeFormat,
    selection::DateRangePickerState,
};
use tessera_ui::{
    Callback, CallbackWith, DimensionValue, Dp, Modifier, State, remember, tessera, use_context,
};
use tracing::debug;

use crate::{
    range_calendar::{RangeCalendarArgs, range_calendar},
    range_field::{DateRangeFieldArgs, date_range_field},
};

const POPUP_GAP: Dp = Dp(8.0);
const POPUP_PADDING: Dp = Dp(12.0);
const POPUP_RADIUS: Dp = Dp(16.0);
const POPUP_ELEVATION: Dp = Dp(3.0);

/// Configuration options for [`date_range_picker`].
///
/// `initial_turn` is applied only when `date_range_picker` owns the state.
#[derive(Clone, PartialEq, Setters)]
pub struct DateRangePickerArgs {
    /// Optional modifier chain applied to the picker.
    pub modifier: Modifier,
    /// Current range, owned by the caller.
    pub value: DateRange,
    /// Receives every new range, from calendar clicks and from clear.
    #[setters(skip)]
    pub on_change: CallbackWith<DateRange>,
    /// Validation message shown under the field.
    #[setters(strip_option, into)]
    pub error: Option<String>,
    /// First day of each calendar row.
    pub first_day_of_week: Weekday,
    /// How the range is rendered in the field.
    pub format: RangeFormat,
    /// Whether the weekday header row is drawn.
    pub show_weekday_labels: bool,
    /// Whether completing a range closes the calendar.
    pub close_on_complete: bool,
    /// Turn used when the internal state is created.
    pub initial_turn: Turn,
    /// Optional external state for the turn flag, popup and navigation.
    ///
    /// When this is `None`, `date_range_picker` creates and owns an internal
    /// state.
    #[setters(skip)]
    pub state: Option<State<DateRangePickerState>>,
}

impl Default for DateRangePickerArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            value: DateRange::EMPTY,
            on_change: CallbackWith::new(|_| {}),
            error: None,
            first_day_of_week: Weekday::Mon,
            format: RangeFormat::default(),
            show_weekday_labels: true,
            close_on_complete: true,
            initial_turn: Turn::Start,
            state: None,
        }
    }
}

impl DateRangePickerArgs {
    /// Creates args for a controlled picker showing `value`.
    pub fn new<F>(value: DateRange, on_change: F) -> Self
    where
        F: Fn(DateRange) + Send + Sync + 'static,
    {
        Self::default().value(value).on_change(on_change)
    }

    /// Sets the change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(DateRange) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: CallbackWith<DateRange>) -> Self {
        self.on_change = on_change;
        self
    }

    /// Sets an external picker state.
    pub fn state(mut self, state: State<DateRangePickerState>) -> Self {
        self.state = Some(state);
        self
    }
}

/// # date_range_picker
///
/// Render a range field that opens a calendar for picking a start and an end
/// date with two clicks.
///
/// ## Usage
///
/// Use for booking windows, report periods and other inclusive date
/// filters.
///
/// ## Parameters
///
/// - `args` — current value, change handler and layout options; see
///   [`DateRangePickerArgs`].
///
/// ## Examples
///
/// ```no_run
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use tessera_date_range_picker::{
///     DateRange,
///     date_range_picker::{DateRangePickerArgs, date_range_picker},
/// };
/// use tessera_ui::remember;
///
/// let range = remember(|| DateRange::EMPTY);
/// date_range_picker(
///     &DateRangePickerArgs::new(range.get(), move |next| range.set(next))
///         .error("Pick an end date"),
/// );
/// # }
/// ```
#[tessera]
pub fn date_range_picker(args: &DateRangePickerArgs) {
    let mut args: DateRangePickerArgs = args.clone();
    let initial_turn = args.initial_turn;

    let state = args
        .state
        .unwrap_or_else(|| remember(|| DateRangePickerState::new(initial_turn)));
    args.state = Some(state);
    date_range_picker_node(&args);
}

#[tessera]
fn date_range_picker_node(args: &DateRangePickerArgs) {
    let state = args
        .state
        .expect("date_range_picker_node requires state to be set");
    let args = args.clone();
    let close_on_complete = args.close_on_complete;

    let value = args.value;
    let today = calendar::today();
    let (expanded, month) = state.with(|s| (s.is_expanded(), s.displayed_month(value, today)));
    let on_change = args.on_change;

    let mut field_args = DateRangeFieldArgs::default()
        .value(value)
        .format(args.format)
        .expanded(expanded)
        .on_click(move || {
            state.with_mut(|s| s.toggle_expanded());
        })
        .on_clear_shared(clear_handler(state, on_change.clone()));
    field_args.error = args.error;

    let calendar_args = RangeCalendarArgs::default()
        .value(value)
        .month(month)
        .today(today)
        .first_day_of_week(args.first_day_of_week)
        .show_weekday_labels(args.show_weekday_labels)
        .on_day_click_shared(day_click_handler(state, value, close_on_complete, on_change))
        .on_previous_month(move || {
            state.with_mut(|s| s.show_previous_month(value, today));
        })
        .on_next_month(move || {
            state.with_mut(|s| s.show_next_month(value, today));
        });

    column(ColumnArgs::default().modifier(args.modifier), move |scope| {
        let field_args = field_args.clone();
        scope.child(move || {
            date_range_field(&field_args);
        });

        if expanded {
            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(POPUP_GAP))));
            let calendar_args = calendar_args.clone();
            scope.child(move || {
                calendar_popup(calendar_args.clone());
            });
        }
    });
}

fn calendar_popup(calendar_args: RangeCalendarArgs) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().padding_all(POPUP_PADDING))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_high,
            })
            .shape(Shape::rounded_rectangle(POPUP_RADIUS))
            .elevation(POPUP_ELEVATION)
            .block_input(true),
        move || {
            range_calendar(&calendar_args);
        },
    ));
}

/// `value` is the caller's range from the frame that drew the calendar.
fn day_click_handler(
    state: State<DateRangePickerState>,
    value: DateRange,
    close_on_complete: bool,
    on_change: CallbackWith<DateRange>,
) -> CallbackWith<NaiveDate> {
    CallbackWith::new(move |date: NaiveDate| {
        // on_change runs outside the state lock.
        let mut next_state = state.get();
        report_day_click(&mut next_state, value, Some(date), close_on_complete, &on_change);
        state.set(next_state);
    })
}

fn clear_handler(
    state: State<DateRangePickerState>,
    on_change: CallbackWith<DateRange>,
) -> Callback {
    Callback::new(move || {
        let mut next_state = state.get();
        report_clear(&mut next_state, &on_change);
        state.set(next_state);
    })
}

fn report_day_click(
    state: &mut DateRangePickerState,
    value: DateRange,
    date: Option<NaiveDate>,
    close_on_complete: bool,
    on_change: &CallbackWith<DateRange>,
) {
    if let Some(next) = state.click(value, date, close_on_complete) {
        debug!(?next, "date range picker change");
        on_change.call(next);
    }
}

fn report_clear(state: &mut DateRangePickerState, on_change: &CallbackWith<DateRange>) {
    let cleared = state.clear();
    on_change.call(cleared);
}
