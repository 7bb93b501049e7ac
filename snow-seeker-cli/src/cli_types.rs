//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use snow_seeker_lib::SortOrder;

#[derive(Parser)]
#[command(name = "snow-seeker")]
#[command(about = "Browse ski resorts and keep track of your favorites", long_about = None)]
pub(crate) struct Cli {
    /// Directory for saved favorites (defaults to the settings file, then the OS data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Resort dataset to use instead of the bundled one (.json, .yaml or .yml)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List resorts, optionally filtered and sorted
    List {
        /// Only show resorts whose name contains this text (case and accents ignored)
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order: default, alphabetical or country
        #[arg(long, default_value = "default")]
        sort: SortOrder,

        /// Only show favorited resorts
        #[arg(short, long)]
        favorites: bool,
    },

    /// Show details for a single resort
    Show {
        /// Resort id (e.g., zermatt)
        id: String,
    },

    /// Manage favorite resorts
    Favorite {
        #[command(subcommand)]
        action: FavoriteCommand,
    },

    /// List all known facilities
    Facilities,

    /// Manage snow-seeker settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum FavoriteCommand {
    /// Add the resort if it is not a favorite, remove it if it is
    Toggle {
        /// Resort id
        id: String,
    },

    /// Mark a resort as favorite
    Add {
        /// Resort id
        id: String,
    },

    /// Remove a resort from favorites
    Remove {
        /// Resort id
        id: String,
    },

    /// List favorite resorts in catalog order
    List,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved locations
    Show,

    /// Print the settings file path
    Path,

    /// Save the directory favorites are stored in
    SetDataDir {
        /// Directory path
        dir: PathBuf,
    },

    /// Forget the saved data directory and use the default
    ClearDataDir,

    /// Save a resort dataset to use instead of the bundled one
    SetCatalog {
        /// Path to a .json, .yaml or .yml file
        path: PathBuf,
    },

    /// Forget the saved dataset and use the bundled one
    ClearCatalog,
}
