use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "libris", bin_name = "libris", version = get_version())]
#[command(about = "Keep a catalog of books in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (overrides the data-file config key)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Do not load the sample catalog when the store is empty
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default when no command is given)
    Menu,

    /// Add a book
    #[command(alias = "a", allow_negative_numbers = true)]
    Add {
        /// Unique id (greater than 0)
        id: i64,

        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Publication year (0 or later)
        year: i64,
    },

    /// List books in the order they were added
    #[command(alias = "ls")]
    List,

    /// Show one book
    #[command(alias = "show", allow_negative_numbers = true)]
    Get { id: i64 },

    /// Change fields of a book; omitted fields are kept
    #[command(alias = "u", allow_negative_numbers = true)]
    Update {
        id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New author
        #[arg(short, long)]
        author: Option<String>,

        /// New publication year
        #[arg(short, long)]
        year: Option<i64>,
    },

    /// Delete a book
    #[command(alias = "rm", allow_negative_numbers = true)]
    Delete { id: i64 },

    /// Load the sample catalog if the store is empty
    Seed,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, seed-on-empty)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

impl Commands {
    /// Commands that read or change the catalog and so trigger sample seeding.
    pub fn uses_catalog(&self) -> bool {
        !matches!(self, Commands::Seed | Commands::Config { .. })
    }
}
