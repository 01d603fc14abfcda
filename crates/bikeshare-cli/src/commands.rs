use super::args::Cli;
use super::handlers;
use crate::console::{Console, StdConsole};
use crate::logging;
use crate::menu::MenuCommand;
use crate::presentation::presenters::{StationsExplorer, TravelTimesExplorer};
use crate::presentation::views::MainMenuView;
use anyhow::{Context, Result};
use bikeshare_engine::Dataset;
use bikeshare_runtime::{Config, resolve_config_path};
use bikeshare_runtime::config::expand_tilde;

const MENU_PROMPT: &str = "Enter option (number): ";

pub fn run(cli: Cli) -> Result<()> {
    let _log_guard = logging::init(cli.log_level, &cli.log_file)?;

    let config_path = resolve_config_path(cli.config.as_deref());
    match &config_path {
        Some(path) => tracing::info!(path = %path.display(), "using config file"),
        None => tracing::info!("no config file found, using built-in cities"),
    }

    let config = Config::load(config_path.as_deref())
        .context("failed to load configuration")?
        .with_data_dir(cli.data_dir.as_deref().map(expand_tilde));

    let mut console = StdConsole::new();
    console.print("Loading dataset...")?;
    let dataset =
        bikeshare_runtime::load(&config.city_sources()).context("failed to load trip data")?;
    console.print("Done")?;

    handlers::about::handle(&dataset, &mut console)?;
    menu_loop(&dataset, &mut console)
}

/// Outer menu: show the choices, dispatch one command, repeat.
pub fn menu_loop<C: Console>(dataset: &Dataset, console: &mut C) -> Result<()> {
    loop {
        console.print(&MainMenuView.to_string())?;

        let Some(line) = console.read_line(MENU_PROMPT)? else {
            tracing::info!("end of input, quitting");
            console.print("\nQuitting...")?;
            return Ok(());
        };
        let Some(command) = MenuCommand::parse(&line) else {
            continue;
        };
        tracing::debug!(?command, "menu selection");

        match command {
            MenuCommand::About => handlers::about::handle(dataset, console)?,
            MenuCommand::TravelTimes => {
                handlers::explore::handle::<TravelTimesExplorer, _>(dataset, console)?
            }
            MenuCommand::Stations => {
                handlers::explore::handle::<StationsExplorer, _>(dataset, console)?
            }
            MenuCommand::TripDuration => handlers::durations::handle(dataset, console)?,
            MenuCommand::UserInfo => handlers::user_info::handle(dataset, console)?,
            MenuCommand::Quit => {
                console.print("Quitting...")?;
                return Ok(());
            }
        }
    }
}
