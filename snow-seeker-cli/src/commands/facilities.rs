use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use snow_seeker_lib::Facility;

pub(crate) fn run_facilities() {
    log::info!("{}", "Known facilities:".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");

    for facility in Facility::all() {
        log::info!(
            "  {} [{}]",
            facility.name().if_supports_color(Stdout, |t| t.green()),
            facility.icon().if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("    Dataset name: {}", facility.raw_name().unwrap_or_default());
        log::info!("    {}", facility.description());
    }
}
