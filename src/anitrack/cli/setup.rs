use anitrack::commands::SortKey;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Log filter directives, e.g. `ANITRACK_LOG=anitrack=trace`.
pub const LOG_ENV: &str = "ANITRACK_LOG";

#[derive(Parser, Debug)]
#[command(name = "anitrack", bin_name = "anitrack", version)]
#[command(about = "Track the anime you are watching", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this data file instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a title to the list
    #[command(alias = "a")]
    Add {
        /// Title (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Release year
        #[arg(short, long)]
        year: Option<String>,

        /// Comma separated genres (e.g. "Action, Fantasy")
        #[arg(short, long)]
        genres: Option<String>,

        /// planned, watching, completed or dropped
        #[arg(short, long)]
        status: Option<String>,

        /// Rating from 0 to 5
        #[arg(short, long)]
        rating: Option<String>,
    },

    /// Delete a title (case-insensitive)
    #[command(alias = "rm")]
    Delete {
        /// Title (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List every title
    #[command(alias = "ls")]
    List {
        /// Sort column: title, year, genres, status or rating
        #[arg(long, value_parser = parse_sort_key)]
        sort: Option<SortKey>,

        /// Reverse the order
        #[arg(short = 'R', long)]
        reverse: bool,
    },

    /// Search titles and genres
    Search {
        /// Keyword; empty lists everything
        #[arg(num_args = 0..)]
        keyword: Vec<String>,
    },

    /// Show totals, average rating and top genres
    Stats,

    /// Suggest titles from the catalog based on your favourite genres
    #[command(alias = "rec")]
    Recommend {
        /// Number of suggestions (defaults to the configured limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Print the path to the data file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, recommend-limit, catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse::<SortKey>().map_err(|e| e.to_string())
}

/// Logs go to stderr. `ANITRACK_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "anitrack=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
