mod app;
#[cfg(not(target_os = "android"))]
mod cli;

use tessera_ui::{EntryPoint, renderer::TesseraConfig};

use crate::app::{AppArgs, app};

#[tessera_ui::entry]
pub fn run() -> EntryPoint {
    entry_point(AppArgs::default())
}

fn entry_point(args: AppArgs) -> EntryPoint {
    let config = TesseraConfig {
        window_title: "Date range picker".to_string(),
        ..Default::default()
    };
    EntryPoint::new(move || app(&args))
        .package(tessera_components::ComponentsPackage)
        .config(config)
}

#[cfg(not(target_os = "android"))]
pub fn desktop_main() -> anyhow::Result<()> {
    use clap::Parser as _;

    init_tracing_desktop();
    let args = cli::Cli::parse().into_app_args()?;
    tracing::info!(
        start = ?args.initial.start(),
        end = ?args.initial.end(),
        week_start = %args.first_day_of_week,
        "starting date range picker example"
    );
    entry_point(args).run_desktop()?;
    Ok(())
}

#[cfg(not(target_os = "android"))]
const DEFAULT_LOG_FILTER: &str = "error,tessera_ui=info,tessera_date_range_picker=debug,tessera_date_range_foundation=debug,example=info";

/// Installs the subscriber before `run_desktop`, whose own `try_init` then
/// leaves it in place.
#[cfg(not(target_os = "android"))]
fn init_tracing_desktop() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_env_filter(filter)
        .try_init();
}
