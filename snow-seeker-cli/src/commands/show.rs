use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use snow_seeker_lib::{AppContext, FavoriteAction};

use super::require_resort;
use crate::error::CliError;

/// Print the detail view for one resort.
pub(crate) fn run_show(ctx: &AppContext, id: &str) -> Result<(), CliError> {
    let resort = require_resort(ctx, id)?;
    let favorites = ctx.favorites();

    log::info!(
        "{}{}",
        resort.title().if_supports_color(Stdout, |t| t.bold()),
        if favorites.contains(&resort.id) {
            format!(" {}", "♥".if_supports_color(Stdout, |t| t.red()))
        } else {
            String::new()
        },
    );
    if !resort.image_credit.is_empty() {
        log::info!(
            "  {}",
            resort.image_credit.if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    log::info!("");

    let stats = [
        ("Size", resort.size_label().to_string()),
        ("Price", resort.price_label()),
        ("Elevation", resort.elevation_label()),
        ("Snow", resort.snow_depth_label()),
        ("Runs", resort.runs.to_string()),
    ];
    for (label, value) in stats {
        log::info!(
            "  {} {}",
            format!("{:<10}", label).if_supports_color(Stdout, |t| t.cyan()),
            value
        );
    }
    log::info!("");

    if !resort.description.is_empty() {
        log::info!("{}", resort.description);
        log::info!("");
    }

    log::info!("{}", "Facilities".if_supports_color(Stdout, |t| t.bold()));
    let facilities = resort.facility_types();
    if facilities.is_empty() {
        log::info!("  (none listed)");
    }
    for (raw, facility) in resort.facilities.iter().zip(facilities) {
        log::debug!("Facility '{}' resolved to {:?}", raw, facility);
        log::info!(
            "  {} {}: {}",
            format!("[{}]", facility.icon()).if_supports_color(Stdout, |t| t.dimmed()),
            facility.name().if_supports_color(Stdout, |t| t.green()),
            facility.description(),
        );
    }
    log::info!("");

    let action = FavoriteAction::for_resort(favorites, &resort.id);
    log::info!(
        "{} snow-seeker favorite toggle {}",
        action.label().if_supports_color(Stdout, |t| t.bold()),
        resort.id,
    );

    Ok(())
}
