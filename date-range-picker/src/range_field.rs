//! Read-only field showing both range endpoints.
//!
//! ## Usage
//!
//! Rendered as the anchor of [`crate::date_range_picker::date_range_picker`].
use derive_setters::Setters;
use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::MaterialTheme,
};
use tessera_date_range_foundation::{
    DateRange,
    format::{RangeFormat, format_error},
};
use tessera_ui::{Callback, DimensionValue, Dp, Modifier, tessera, use_context};

const FIELD_MIN_WIDTH: Dp = Dp(280.0);
const FIELD_HEIGHT: Dp = Dp(56.0);
const FIELD_RADIUS: Dp = Dp(4.0);
const FIELD_HORIZONTAL_PADDING: Dp = Dp(16.0);
const CLEAR_BUTTON_SIZE: Dp = Dp(28.0);
const SUPPORTING_TEXT_GAP: Dp = Dp(4.0);

/// Configuration for [`date_range_field`].
#[derive(Clone, PartialEq, Setters)]
pub struct DateRangeFieldArgs {
    /// Optional modifier chain applied to the field.
    pub modifier: Modifier,
    /// Range to display.
    pub value: DateRange,
    /// How the range is rendered as text.
    pub format: RangeFormat,
    /// Validation message shown under the field.
    #[setters(strip_option, into)]
    pub error: Option<String>,
    /// Whether the calendar popup is currently open; draws the focus outline.
    pub expanded: bool,
    /// Called when the field body is clicked.
    #[setters(skip)]
    pub on_click: Callback,
    /// Called by the clear control.
    #[setters(skip)]
    pub on_clear: Callback,
}

impl Default for DateRangeFieldArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new().constrain(
                Some(DimensionValue::Wrap {
                    min: Some(FIELD_MIN_WIDTH.into()),
                    max: None,
                }),
                Some(DimensionValue::WRAP),
            ),
            value: DateRange::EMPTY,
            format: RangeFormat::default(),
            error: None,
            expanded: false,
            on_click: Callback::default(),
            on_clear: Callback::default(),
        }
    }
}

impl DateRangeFieldArgs {
    /// Sets the field click handler.
    pub fn on_click<F>(mut self, on_click: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Callback::new(on_click);
        self
    }

    /// Sets the field click handler using a shared callback.
    pub fn on_click_shared(mut self, on_click: impl Into<Callback>) -> Self {
        self.on_click = on_click.into();
        self
    }

    /// Sets the clear handler.
    pub fn on_clear<F>(mut self, on_clear: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_clear = Callback::new(on_clear);
        self
    }

    /// Sets the clear handler using a shared callback.
    pub fn on_clear_shared(mut self, on_clear: impl Into<Callback>) -> Self {
        self.on_clear = on_clear.into();
        self
    }
}

/// Returns true when the clear control should be drawn for `value`.
pub fn shows_clear_control(value: DateRange) -> bool {
    !value.is_empty()
}

/// # date_range_field
///
/// Render the formatted range with a clear control and an optional
/// validation message.
///
/// ## Usage
///
/// Use as the closed state of a range picker, or on its own to display a
/// range the user cannot edit.
///
/// ## Parameters
///
/// - `args` — value, format and callbacks; see [`DateRangeFieldArgs`].
#[tessera]
pub fn date_range_field(args: &DateRangeFieldArgs) {
    let args = args.clone();
    let display = args.format.format_range(args.value);
    let show_clear = shows_clear_control(args.value);
    let error = args.error.as_deref().map(format_error);
    let expanded = args.expanded;
    let on_click = args.on_click;
    let on_clear = args.on_clear;

    column(ColumnArgs::default().modifier(args.modifier), move |scope| {
        let display = display.clone();
        let on_click = on_click.clone();
        let on_clear = on_clear.clone();
        let has_error = error.is_some();
        scope.child(move || {
            field_body(
                display.clone(),
                show_clear,
                expanded,
                has_error,
                on_click.clone(),
                on_clear.clone(),
            );
        });

        if let Some(message) = error.clone() {
            scope.child(|| {
                spacer(&SpacerArgs::new(
                    Modifier::new().height(SUPPORTING_TEXT_GAP),
                ))
            });
            scope.child(move || {
                let theme = use_context::<MaterialTheme>()
                    .expect("MaterialTheme must be provided")
                    .get();
                text(
                    &TextArgs::default()
                        .text(message.clone())
                        .size(theme.typography.body_small.font_size)
                        .color(theme.color_scheme.error),
                );
            });
        }
    });
}

fn field_body(
    display: String,
    show_clear: bool,
    expanded: bool,
    has_error: bool,
    on_click: Callback,
    on_clear: Callback,
) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let font_size = theme.typography.body_large.font_size;
    let (border_color, border_width) = if has_error {
        (scheme.error, Dp(2.0))
    } else if expanded {
        (scheme.primary, Dp(2.0))
    } else {
        (scheme.outline, Dp(1.0))
    };

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(
                Modifier::new()
                    .fill_max_width()
                    .height(FIELD_HEIGHT),
            )
            .style(SurfaceStyle::FilledOutlined {
                fill_color: scheme.surface,
                border_color,
                border_width,
            })
            .shape(Shape::rounded_rectangle(FIELD_RADIUS))
            .content_alignment(Alignment::CenterStart)
            .accessibility_label(display.clone())
            .on_click_shared(on_click),
        move || {
            let display = display.clone();
            let on_clear = on_clear.clone();
            row(
                RowArgs::default()
                    .modifier(
                        Modifier::new()
                            .fill_max_width()
                            .padding_symmetric(FIELD_HORIZONTAL_PADDING, Dp::ZERO),
                    )
                    .main_axis_alignment(MainAxisAlignment::SpaceBetween)
                    .cross_axis_alignment(CrossAxisAlignment::Center),
                move |row_scope| {
                    let display = display.clone();
                    row_scope.child(move || {
                        text(
                            &TextArgs::default()
                                .text(display.clone())
                                .size(font_size)
                                .color(scheme.on_surface),
                        );
                    });

                    if show_clear {
                        let on_clear = on_clear.clone();
                        row_scope.child(move || {
                            clear_button(on_clear.clone());
                        });
                    }
                },
            );
        },
    ));
}

/// Blocks input so the click never reaches the field body and opens the
/// popup.
fn clear_button(on_clear: Callback) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let font_size = theme.typography.title_medium.font_size;
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().size(CLEAR_BUTTON_SIZE, CLEAR_BUTTON_SIZE))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_high,
            })
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .block_input(true)
            .accessibility_label("Clear selection")
            .on_click_shared(on_clear),
        move || {
            text(
                &TextArgs::default()
                    .text("×")
                    .size(font_size)
                    .color(scheme.on_surface_variant),
            );
        },
    ));
}
