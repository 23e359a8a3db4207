//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use rungroup_catalog::{ClubCategory, RaceCategory};

#[derive(Parser)]
#[command(name = "rungroup")]
#[command(about = "Browse and manage the running club and race catalog", long_about = None)]
pub(crate) struct Cli {
    /// Path to the catalog database (default: $RUNGROUP_DB, then settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Paging arguments shared by the listing commands.
#[derive(Args, Clone)]
pub(crate) struct PageArgs {
    /// Page number, starting at 1
    #[arg(short, long, default_value_t = rungroup_lib::DEFAULT_PAGE, allow_negative_numbers = true)]
    pub page: i64,

    /// Entries per page (default: settings.toml, then 6)
    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the database and load the list of US states
    Init,

    /// Load states, cities, users, clubs and races from a directory of YAML files
    Seed {
        /// Directory containing states.yaml, cities.yaml, users.yaml, clubs.yaml, races.yaml
        dir: PathBuf,
    },

    /// List clubs one page at a time
    Clubs {
        #[command(flatten)]
        paging: PageArgs,

        /// Only show clubs of this kind (e.g., roadrunner, trail, city)
        #[arg(short, long)]
        category: Option<ClubCategory>,
    },

    /// List races one page at a time
    Races {
        #[command(flatten)]
        paging: PageArgs,

        /// Only show races of this distance (e.g., fivek, marathon)
        #[arg(short, long)]
        category: Option<RaceCategory>,
    },

    /// List clubs in a state, by full state name (e.g., "Indiana")
    ClubsByState {
        state: String,
    },

    /// List clubs whose city contains the given text
    ClubsByCity {
        city: String,
    },

    /// List races whose city contains the given text
    RacesByCity {
        city: String,
    },

    /// Find cities by zip-code prefix or exact city name
    Search {
        query: String,
    },

    /// List known states
    States,

    /// List cities in a state, by two-letter code
    Cities {
        state_code: String,
    },

    /// List registered users
    Users,

    /// Show one user's profile
    User {
        id: String,
    },

    /// Show the clubs and races a user created
    Dashboard {
        user_id: String,
    },

    /// Show catalog database statistics
    Stats,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each value came from
    Show,

    /// Print the settings file path
    Path,
}
