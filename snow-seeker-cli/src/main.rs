//! snow-seeker CLI
//!
//! Command-line frontend for browsing ski resorts and managing favorites.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::path::PathBuf;

use clap::Parser;

use snow_seeker_lib::{AppContext, ContextOptions};

use cli_types::{Cli, Commands, ConfigAction, FavoriteCommand};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        data_dir,
        catalog,
        command,
        ..
    } = cli;

    match command {
        Commands::List {
            search,
            sort,
            favorites,
        } => {
            let ctx = open_context(data_dir, catalog)?;
            commands::list::run_list(&ctx, search.as_deref(), sort, favorites);
        }
        Commands::Show { id } => {
            let ctx = open_context(data_dir, catalog)?;
            commands::show::run_show(&ctx, &id)?;
        }
        Commands::Favorite { action } => {
            let ctx = open_context(data_dir, catalog)?;
            match action {
                FavoriteCommand::Toggle { id } => commands::favorite::run_toggle(&ctx, &id)?,
                FavoriteCommand::Add { id } => commands::favorite::run_add(&ctx, &id)?,
                FavoriteCommand::Remove { id } => commands::favorite::run_remove(&ctx, &id),
                FavoriteCommand::List => commands::favorite::run_favorites(&ctx),
            }
        }
        Commands::Facilities => {
            commands::facilities::run_facilities();
        }
        // Settings commands work even when the catalog is broken.
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(data_dir, catalog),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetDataDir { dir } => commands::config::run_set_data_dir(dir)?,
            ConfigAction::ClearDataDir => commands::config::run_clear_data_dir()?,
            ConfigAction::SetCatalog { path } => commands::config::run_set_catalog(path)?,
            ConfigAction::ClearCatalog => commands::config::run_clear_catalog()?,
        },
    }

    Ok(())
}

/// Load the catalog and favorites. A catalog that fails to load aborts the
/// command.
fn open_context(
    data_dir: Option<PathBuf>,
    catalog: Option<PathBuf>,
) -> Result<AppContext, CliError> {
    let options = ContextOptions::resolve(data_dir, catalog);
    AppContext::open(&options).map_err(|e| CliError::catalog(e.to_string()))
}
