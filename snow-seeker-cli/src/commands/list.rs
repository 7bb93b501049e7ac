use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use snow_seeker_lib::{AppContext, SortOrder};

pub(crate) fn run_list(ctx: &AppContext, search: Option<&str>, sort: SortOrder, favorites_only: bool) {
    let rows: Vec<_> = ctx
        .resort_rows(search.unwrap_or(""), sort)
        .into_iter()
        .filter(|row| !favorites_only || row.favorite)
        .collect();

    if rows.is_empty() {
        match search {
            Some(q) if !q.is_empty() => log::info!("No resorts match \"{}\".", q),
            _ if favorites_only => log::info!("No favorite resorts yet."),
            _ => log::info!("No resorts."),
        }
        return;
    }

    log::info!(
        "{} ({}, sorted {})",
        "Resorts".if_supports_color(Stdout, |t| t.bold()),
        rows.len(),
        sort.label().to_lowercase(),
    );
    log::info!("");

    let mut current_country = "";
    for row in rows {
        let resort = row.resort;
        if sort == SortOrder::ByCountry && resort.country != current_country {
            if !current_country.is_empty() {
                log::info!("");
            }
            current_country = &resort.country;
            log::info!(
                "{}:",
                current_country.if_supports_color(Stdout, |t| t.bold()),
            );
        }

        log::info!(
            "  {} [{}] {} {}{}",
            resort.name.if_supports_color(Stdout, |t| t.bold()),
            resort.id.if_supports_color(Stdout, |t| t.dimmed()),
            resort.country.if_supports_color(Stdout, |t| t.cyan()),
            resort.runs_label(),
            if row.favorite {
                format!(" {}", "♥".if_supports_color(Stdout, |t| t.red()))
            } else {
                String::new()
            },
        );
    }
}
