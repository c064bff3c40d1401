//! Month calendar that highlights a date range.
//!
//! ## Usage
//!
//! Rendered inside [`crate::date_range_picker::date_range_picker`]; use it
//! directly when the range state is driven elsewhere.
use derive_setters::Setters;
use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    flow_row::{FlowRowArgs, flow_row},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    shape_def::{RoundedCorner, Shape},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::{MaterialAlpha, MaterialColorScheme, MaterialTheme},
};
use tessera_date_range_foundation::{
    DateRange, NaiveDate, Weekday,
    calendar::{
        self, CornerRounding, DAYS_PER_WEEK, DayCell, GRID_WEEKS, RangeHighlight, YearMonth,
    },
};
use tessera_ui::{Callback, CallbackWith, Color, DimensionValue, Dp, Modifier, tessera, use_context};
use tracing::trace;

const DAY_CELL_SIZE: Dp = Dp(40.0);
const DAY_LINE_SPACING: Dp = Dp(4.0);
const NAV_BUTTON_SIZE: Dp = Dp(32.0);
const TODAY_OUTLINE_WIDTH: Dp = Dp(1.0);

/// Configuration for [`range_calendar`].
#[derive(Clone, PartialEq, Setters)]
pub struct RangeCalendarArgs {
    /// Optional modifier chain applied to the calendar.
    pub modifier: Modifier,
    /// Range to highlight.
    pub value: DateRange,
    /// Month whose grid is drawn.
    pub month: YearMonth,
    /// Date outlined as today.
    pub today: NaiveDate,
    /// First day of each calendar row.
    pub first_day_of_week: Weekday,
    /// Whether the weekday header row is drawn.
    pub show_weekday_labels: bool,
    /// Called with the clicked day.
    #[setters(skip)]
    pub on_day_click: CallbackWith<NaiveDate>,
    /// Called by the previous-month button.
    #[setters(skip)]
    pub on_previous_month: Callback,
    /// Called by the next-month button.
    #[setters(skip)]
    pub on_next_month: Callback,
}

impl Default for RangeCalendarArgs {
    fn default() -> Self {
        let today = calendar::today();
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            value: DateRange::EMPTY,
            month: YearMonth::of(today),
            today,
            first_day_of_week: Weekday::Mon,
            show_weekday_labels: true,
            on_day_click: CallbackWith::new(|_| {}),
            on_previous_month: Callback::default(),
            on_next_month: Callback::default(),
        }
    }
}

impl RangeCalendarArgs {
    /// Sets the day click handler.
    pub fn on_day_click<F>(mut self, on_day_click: F) -> Self
    where
        F: Fn(NaiveDate) + Send + Sync + 'static,
    {
        self.on_day_click = CallbackWith::new(on_day_click);
        self
    }

    /// Sets the day click handler using a shared callback.
    pub fn on_day_click_shared(mut self, on_day_click: CallbackWith<NaiveDate>) -> Self {
        self.on_day_click = on_day_click;
        self
    }

    /// Sets the previous-month handler.
    pub fn on_previous_month<F>(mut self, on_previous_month: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_previous_month = Callback::new(on_previous_month);
        self
    }

    /// Sets the next-month handler.
    pub fn on_next_month<F>(mut self, on_next_month: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_next_month = Callback::new(on_next_month);
        self
    }
}

/// # range_calendar
///
/// Render one month of days with the range drawn as a band.
///
/// ## Usage
///
/// Use when you need the calendar grid without the text field, for example
/// in a side panel that is always visible.
///
/// ## Parameters
///
/// - `args` — month, range and callbacks; see [`RangeCalendarArgs`].
#[tessera]
pub fn range_calendar(args: &RangeCalendarArgs) {
    let args = args.clone();
    let month_label = args.month.label();
    let first_day_of_week = args.first_day_of_week;
    let show_weekday_labels = args.show_weekday_labels;
    let cells = calendar::month_cells(args.month, args.value, first_day_of_week, args.today);
    trace!(month = %month_label, value = ?args.value, "range calendar render");

    let on_previous_month = args.on_previous_month;
    let on_next_month = args.on_next_month;
    let on_day_click = args.on_day_click;

    column(ColumnArgs::default().modifier(args.modifier), move |scope| {
        let on_previous_month = on_previous_month.clone();
        let on_next_month = on_next_month.clone();
        let month_label = month_label.clone();
        scope.child(move || {
            month_navigation(
                month_label.clone(),
                on_previous_month.clone(),
                on_next_month.clone(),
            );
        });

        if show_weekday_labels {
            scope.child(move || {
                weekday_labels_row(first_day_of_week);
            });
        }

        let cells = cells.clone();
        let on_day_click = on_day_click.clone();
        scope.child(move || {
            day_grid(cells.clone(), on_day_click.clone());
        });
    });
}

fn month_navigation(label: String, on_previous: Callback, on_next: Callback) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    row(
        RowArgs::default()
            .modifier(Modifier::new().fill_max_width())
            .main_axis_alignment(MainAxisAlignment::SpaceBetween)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let on_previous = on_previous.clone();
            scope.child(move || {
                nav_button("<", "Previous month", on_previous.clone());
            });

            let label = label.clone();
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(label.clone())
                        .size(typography.title_medium.font_size)
                        .color(scheme.on_surface),
                );
            });

            let on_next = on_next.clone();
            scope.child(move || {
                nav_button(">", "Next month", on_next.clone());
            });
        },
    );
}

fn nav_button(label: &'static str, description: &'static str, on_click: Callback) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().size(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE))
            .style(SurfaceStyle::Filled {
                color: Color::TRANSPARENT,
            })
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .accessibility_label(description)
            .on_click_shared(on_click),
        move || {
            text(
                &TextArgs::default()
                    .text(label)
                    .size(
                        use_context::<MaterialTheme>()
                            .expect("MaterialTheme must be provided")
                            .get()
                            .typography
                            .title_medium
                            .font_size,
                    )
                    .color(scheme.on_surface_variant),
            );
        },
    ));
}

fn weekday_labels_row(first_day_of_week: Weekday) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let font_size = theme.typography.label_small.font_size;
    let labels = calendar::weekday_sequence(first_day_of_week);

    flow_row(
        FlowRowArgs::default().max_items_per_line(DAYS_PER_WEEK),
        move |scope| {
            for weekday in labels {
                let label = calendar::weekday_short_label(weekday);
                scope.child(move || {
                    surface(&SurfaceArgs::with_child(
                        SurfaceArgs::default()
                            .modifier(Modifier::new().size(DAY_CELL_SIZE, DAY_CELL_SIZE))
                            .style(Color::TRANSPARENT.into())
                            .content_alignment(Alignment::Center),
                        move || {
                            text(
                                &TextArgs::default()
                                    .text(label)
                                    .size(font_size)
                                    .color(scheme.on_surface_variant),
                            );
                        },
                    ));
                });
            }
        },
    );
}

fn day_grid(cells: Vec<DayCell>, on_day_click: CallbackWith<NaiveDate>) {
    flow_row(
        FlowRowArgs::default()
            .max_items_per_line(DAYS_PER_WEEK)
            .max_lines(GRID_WEEKS)
            .line_spacing(DAY_LINE_SPACING),
        move |scope| {
            for cell in cells.iter().copied() {
                let on_day_click = on_day_click.clone();
                scope.child(move || {
                    day_cell(cell, on_day_click.clone());
                });
            }
        },
    );
}

/// Outer band surface carrying the neutral range fill, inner surface carrying
/// the endpoint fill or today's outline.
fn day_cell(cell: DayCell, on_day_click: CallbackWith<NaiveDate>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let font_size = theme.typography.body_medium.font_size;
    let band_color = band_color(&cell, &scheme);
    let marker_style = marker_style(&cell, &scheme);
    let text_color = day_text_color(&cell, &scheme);
    let date = cell.date;

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().size(DAY_CELL_SIZE, DAY_CELL_SIZE))
            .style(SurfaceStyle::Filled { color: band_color })
            .shape(band_shape(cell.rounding))
            .content_alignment(Alignment::Center),
        move || {
            let on_day_click = on_day_click.clone();
            surface(&SurfaceArgs::with_child(
                SurfaceArgs::default()
                    .modifier(Modifier::new().size(DAY_CELL_SIZE, DAY_CELL_SIZE))
                    .style(marker_style.clone())
                    .shape(Shape::capsule())
                    .content_alignment(Alignment::Center)
                    .accessibility_label(date.format("%A %-d %B %Y").to_string())
                    .on_click(move || on_day_click.call(date)),
                move || {
                    text(
                        &TextArgs::default()
                            .text(date.format("%-d").to_string())
                            .size(font_size)
                            .color(text_color),
                    );
                },
            ));
        },
    ));
}

/// Shape of the range band behind a day.
pub fn band_shape(rounding: CornerRounding) -> Shape {
    let corner = |rounded: bool| {
        if rounded {
            RoundedCorner::Capsule
        } else {
            RoundedCorner::ZERO
        }
    };
    let left = corner(rounding.rounds_left());
    let right = corner(rounding.rounds_right());
    Shape::RoundedRectangle {
        top_left: left,
        top_right: right,
        bottom_right: right,
        bottom_left: left,
    }
}

fn band_color(cell: &DayCell, scheme: &MaterialColorScheme) -> Color {
    if cell.in_range {
        scheme.secondary_container
    } else {
        Color::TRANSPARENT
    }
}

fn marker_style(cell: &DayCell, scheme: &MaterialColorScheme) -> SurfaceStyle {
    match cell.highlight() {
        RangeHighlight::Endpoint => SurfaceStyle::Filled {
            color: scheme.primary,
        },
        _ if cell.is_today => SurfaceStyle::Outlined {
            color: scheme.primary,
            width: TODAY_OUTLINE_WIDTH,
        },
        _ => SurfaceStyle::Filled {
            color: Color::TRANSPARENT,
        },
    }
}

fn day_text_color(cell: &DayCell, scheme: &MaterialColorScheme) -> Color {
    match cell.highlight() {
        RangeHighlight::Endpoint => scheme.on_primary,
        RangeHighlight::InRange => scheme.on_secondary_container,
        RangeHighlight::None if !cell.in_displayed_month => scheme
            .on_surface_variant
            .with_alpha(MaterialAlpha::DISABLED_CONTENT),
        RangeHighlight::None => scheme.on_surface,
    }
}
