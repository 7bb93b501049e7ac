use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use snow_seeker_lib::{ContextOptions, ResortCatalog, settings};

use crate::error::CliError;

/// Show the settings file and where data is actually read from.
pub(crate) fn run_config_show(data_dir: Option<PathBuf>, catalog: Option<PathBuf>) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "snow-seeker Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let options = ContextOptions::resolve(data_dir, catalog);
    log::info!(
        "  Data dir:      {}",
        options.data_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    match &options.catalog_path {
        Some(p) => log::info!(
            "  Catalog:       {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "  Catalog:       {}",
            "bundled".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }

    if let Some(contents) = settings::load_settings_string() {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

pub(crate) fn run_set_data_dir(dir: PathBuf) -> Result<(), CliError> {
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::config(format!(
            "{} exists and is not a directory",
            dir.display()
        )));
    }
    settings::save_data_dir(Some(&dir))?;
    log::info!("Favorites will be stored in {}", dir.display());
    Ok(())
}

pub(crate) fn run_clear_data_dir() -> Result<(), CliError> {
    settings::save_data_dir(None)?;
    log::info!(
        "Favorites will be stored in {}",
        settings::default_data_dir().display()
    );
    Ok(())
}

/// Save an external dataset after checking that it loads.
pub(crate) fn run_set_catalog(path: PathBuf) -> Result<(), CliError> {
    let catalog = ResortCatalog::load(&path).map_err(|e| CliError::catalog(e.to_string()))?;
    settings::save_catalog_path(Some(&path))?;
    log::info!(
        "Using {} ({} resorts)",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        catalog.len()
    );
    Ok(())
}

pub(crate) fn run_clear_catalog() -> Result<(), CliError> {
    settings::save_catalog_path(None)?;
    log::info!("Using the bundled resort dataset");
    Ok(())
}
