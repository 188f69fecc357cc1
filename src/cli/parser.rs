use clap::{Parser, Subcommand};

/// Command-line interface definition for ritems
/// CLI application to manage a persisted list of named items with SQLite
#[derive(Parser)]
#[command(
    name = "ritems",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple item list CLI: add, list, rename and delete named items using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new item
    Add {
        /// Name of the item (stored as given, not trimmed)
        name: String,
    },

    /// List all items
    List {
        #[arg(long = "json", help = "Print items as a JSON array")]
        json: bool,
    },

    /// Rename an existing item by ID
    Rename {
        /// ID of the item to rename
        id: i64,

        /// New name for the item
        name: String,
    },

    /// Delete an item by ID
    Del {
        /// ID of the item to delete
        id: i64,
    },

    /// Open the interactive item screen
    Ui,
}
