use std::sync::mpsc::Receiver;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use snow_seeker_lib::{AppContext, FavoriteAction, FavoritesChange};

use super::require_resort;
use crate::error::CliError;

/// Flip a resort's favorite status, the way the detail view's button does.
pub(crate) fn run_toggle(ctx: &AppContext, id: &str) -> Result<(), CliError> {
    let resort = require_resort(ctx, id)?;
    let action = FavoriteAction::for_resort(ctx.favorites(), &resort.id);
    apply(ctx, id, action);
    Ok(())
}

pub(crate) fn run_add(ctx: &AppContext, id: &str) -> Result<(), CliError> {
    require_resort(ctx, id)?;
    apply(ctx, id, FavoriteAction::Add);
    Ok(())
}

/// Remove a favorite. Ids missing from the catalog are accepted so stale
/// entries from an older dataset can still be cleared.
pub(crate) fn run_remove(ctx: &AppContext, id: &str) {
    apply(ctx, id, FavoriteAction::Remove);
}

pub(crate) fn run_favorites(ctx: &AppContext) {
    let resorts = ctx.favorite_resorts();
    if resorts.is_empty() {
        log::info!("No favorite resorts yet.");
        return;
    }

    log::info!(
        "{} ({})",
        "Favorites".if_supports_color(Stdout, |t| t.bold()),
        resorts.len()
    );
    for resort in resorts {
        log::info!(
            "  {} {} [{}] {}",
            "♥".if_supports_color(Stdout, |t| t.red()),
            resort.name.if_supports_color(Stdout, |t| t.bold()),
            resort.id.if_supports_color(Stdout, |t| t.dimmed()),
            resort.country.if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    let stale = ctx.favorites().len() - ctx.favorite_resorts().len();
    if stale > 0 {
        log::warn!(
            "{} saved favorite(s) are not in the current catalog",
            stale
        );
    }
}

fn apply(ctx: &AppContext, id: &str, action: FavoriteAction) {
    let changes = ctx.favorites().subscribe();
    if !action.apply(ctx.favorites(), id) {
        let state = match action {
            FavoriteAction::Add => "already a favorite",
            FavoriteAction::Remove => "not a favorite",
        };
        log::info!("{} is {}.", display_name(ctx, id), state);
    }
    report(ctx, &changes);
}

fn report(ctx: &AppContext, changes: &Receiver<FavoritesChange>) {
    for change in changes.try_iter() {
        match &change {
            FavoritesChange::Added(id) => log::info!(
                "{} Added {} to favorites",
                "♥".if_supports_color(Stdout, |t| t.red()),
                display_name(ctx, id).if_supports_color(Stdout, |t| t.bold()),
            ),
            FavoritesChange::Removed(id) => log::info!(
                "  Removed {} from favorites",
                display_name(ctx, id).if_supports_color(Stdout, |t| t.bold()),
            ),
        }
    }
}

fn display_name<'a>(ctx: &'a AppContext, id: &'a str) -> &'a str {
    ctx.resort(id).map_or(id, |r| r.name.as_str())
}
