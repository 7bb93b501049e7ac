//! Logger setup.
//!
//! All user-facing output goes through `log::info!`, so `--quiet` silences it
//! and `--logfile` captures it.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

pub(crate) fn init_logging(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = logfile.map(File::create).transpose()?.map(Mutex::new);

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if !quiet && !verbose {
        builder.parse_default_env();
    }
    builder.target(env_logger::Target::Stdout);
    builder.format(move |buf, record| {
        let line = if verbose {
            format!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                record.level(),
                record.target(),
                record.args()
            )
        } else {
            match record.level() {
                Level::Error => format!(
                    "{} {}",
                    "error:".if_supports_color(Stdout, |t| t.red()),
                    record.args()
                ),
                Level::Warn => format!(
                    "{} {}",
                    "warning:".if_supports_color(Stdout, |t| t.yellow()),
                    record.args()
                ),
                _ => record.args().to_string(),
            }
        };

        if let Some(file) = &file {
            let mut file = file.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            writeln!(file, "{}", strip_ansi_escapes::strip_str(&line))?;
        }
        writeln!(buf, "{}", line)
    });

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
