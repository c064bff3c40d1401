use anyhow::{Context as _, bail};
use clap::Parser;
use tessera_date_range_picker::{DateRange, NaiveDate, foundation::calendar::parse_weekday};

use crate::app::AppArgs;

/// Date range picker showcase.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Initial start date, e.g. 2024-01-15
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Initial end date, e.g. 2024-01-20
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// First day of each calendar row, e.g. mon or sunday
    #[arg(long, default_value = "mon")]
    pub week_start: String,
}

impl Cli {
    pub fn into_app_args(self) -> anyhow::Result<AppArgs> {
        if let (Some(start), Some(end)) = (self.start, self.end)
            && start > end
        {
            bail!("start date {start} is after end date {end}");
        }
        let first_day_of_week = parse_weekday(&self.week_start)
            .with_context(|| format!("invalid --week-start value {:?}", self.week_start))?;
        Ok(AppArgs {
            initial: DateRange::new(self.start, self.end),
            first_day_of_week,
        })
    }
}

#[cfg(test)]
mod tests {
    use tessera_date_range_picker::Weekday;

    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<AppArgs> {
        Cli::try_parse_from(std::iter::once("example").chain(args.iter().copied()))?
            .into_app_args()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.initial, DateRange::EMPTY);
        assert_eq!(args.first_day_of_week, Weekday::Mon);
    }

    #[test]
    fn test_initial_range_and_week_start() {
        let args = parse(&[
            "--start",
            "2024-01-15",
            "--end",
            "2024-01-20",
            "--week-start",
            "sunday",
        ])
        .unwrap();
        assert_eq!(args.initial.start(), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(args.initial.end(), NaiveDate::from_ymd_opt(2024, 1, 20));
        assert_eq!(args.first_day_of_week, Weekday::Sun);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["--start", "2024-01-20", "--end", "2024-01-15"]).is_err());
        assert!(parse(&["--week-start", "someday"]).is_err());
        assert!(parse(&["--start", "15/01/2024"]).is_err());
    }
}
