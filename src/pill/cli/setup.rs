use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pill::model::parse_date;

#[derive(Parser, Debug)]
#[command(name = "pill", bin_name = "pill", version)]
#[command(about = "Track stock batches and their expiry dates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global inventory
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add stock, merging into an existing batch with the same expiry
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Item name
        name: String,

        /// Quantity to add
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,

        /// Expiry date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        expiry: Option<NaiveDate>,
    },

    /// Remove a batch
    #[command(alias = "rm", display_order = 2)]
    Delete {
        /// Item name
        name: String,

        /// Expiry date of the batch (YYYY-MM-DD); omit for the undated batch
        #[arg(value_parser = parse_date)]
        expiry: Option<NaiveDate>,
    },

    /// Overwrite the quantity of a batch
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// Item name
        name: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Expiry date of the batch (YYYY-MM-DD); omit for the undated batch
        #[arg(value_parser = parse_date)]
        expiry: Option<NaiveDate>,
    },

    /// Use stock, earliest expiry first
    #[command(alias = "u", display_order = 4)]
    Use {
        /// Item name
        name: String,

        /// Quantity to take out
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// List all batches
    #[command(alias = "ls", display_order = 10)]
    List,

    /// Find batches whose name contains a term (case-insensitive)
    #[command(alias = "f", display_order = 11)]
    Find {
        /// Search term
        term: String,
    },

    /// List batches that have already expired
    #[command(display_order = 12)]
    Expired,

    /// List batches expiring before a date
    #[command(display_order = 13)]
    Expiring {
        /// Cutoff date (YYYY-MM-DD), exclusive
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },

    /// List batches at or below a restock threshold
    #[command(display_order = 14)]
    Restock {
        /// Threshold; defaults to the configured restock-threshold
        #[arg(allow_negative_numbers = true)]
        threshold: Option<i64>,
    },

    /// Show the transaction log
    #[command(alias = "log", display_order = 15)]
    Transactions,

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (e.g. restock-threshold)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },

    /// Initialize the inventory directory
    #[command(display_order = 21)]
    Init,
}
