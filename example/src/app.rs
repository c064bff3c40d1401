use tessera_components::{
    alignment::CrossAxisAlignment,
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, surface},
    text::{TextArgs, text},
    theme::{MaterialTheme, MaterialThemeProviderArgs, material_theme},
};
use tessera_date_range_picker::{
    DateRange, Weekday,
    date_range_picker::{DateRangePickerArgs, date_range_picker},
};
use tessera_ui::{Dp, Modifier, remember, tessera, use_context};
use tracing::info;

/// Startup options for the showcase.
#[derive(Clone, PartialEq)]
pub struct AppArgs {
    pub initial: DateRange,
    pub first_day_of_week: Weekday,
}

impl Default for AppArgs {
    fn default() -> Self {
        Self {
            initial: DateRange::EMPTY,
            first_day_of_week: Weekday::Mon,
        }
    }
}

/// Message shown under the field while the range is incomplete.
fn validation_message(range: DateRange) -> Option<&'static str> {
    match (range.start(), range.end()) {
        (Some(_), Some(_)) | (None, None) => None,
        (Some(_), None) => Some("End date required"),
        (None, Some(_)) => Some("Start date required"),
    }
}

#[tessera]
pub fn app(args: &AppArgs) {
    let args = args.clone();
    material_theme(&MaterialThemeProviderArgs::new(MaterialTheme::default, move || {
        let args = args.clone();
        surface(&SurfaceArgs::with_child(
            SurfaceArgs::default().modifier(Modifier::new().fill_max_size().padding_all(Dp(24.0))),
            move || {
                booking_form(&args);
            },
        ));
    }));
}

#[tessera]
fn booking_form(args: &AppArgs) {
    let initial = args.initial;
    let first_day_of_week = args.first_day_of_week;
    let range = remember(|| initial);
    let value = range.get();

    column(
        ColumnArgs::default()
            .modifier(Modifier::new().fill_max_width())
            .cross_axis_alignment(CrossAxisAlignment::Start),
        move |scope| {
            scope.child(|| {
                let theme = use_context::<MaterialTheme>()
                    .expect("MaterialTheme must be provided")
                    .get();
                text(
                    &TextArgs::default()
                        .text("Booking dates")
                        .size(theme.typography.title_large.font_size)
                        .color(theme.color_scheme.on_surface),
                );
            });

            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0)))));

            scope.child(move || {
                let mut picker_args = DateRangePickerArgs::new(value, move |next: DateRange| {
                    info!(start = ?next.start(), end = ?next.end(), "range changed");
                    range.set(next);
                })
                .first_day_of_week(first_day_of_week);
                if let Some(message) = validation_message(value) {
                    picker_args = picker_args.error(message);
                }
                date_range_picker(&picker_args);
            });

            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0)))));

            scope.child(move || {
                let theme = use_context::<MaterialTheme>()
                    .expect("MaterialTheme must be provided")
                    .get();
                let summary = match value.len_days() {
                    Some(1) => "1 day selected".to_string(),
                    Some(days) => format!("{days} days selected"),
                    None => "No range selected".to_string(),
                };
                text(
                    &TextArgs::default()
                        .text(summary)
                        .size(theme.typography.body_medium.font_size)
                        .color(theme.color_scheme.on_surface_variant),
                );
            });
        },
    );
}

#[cfg(test)]
mod tests {
    use tessera_date_range_picker::NaiveDate;

    use super::*;

    #[test]
    fn test_validation_message() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15);
        assert_eq!(validation_message(DateRange::EMPTY), None);
        assert_eq!(validation_message(DateRange::new(day, day)), None);
        assert_eq!(
            validation_message(DateRange::new(day, None)),
            Some("End date required")
        );
        assert_eq!(
            validation_message(DateRange::new(None, day)),
            Some("Start date required")
        );
    }
}
