use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lunchvote")]
#[command(about = "Vote on lunch restaurant recommendations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the restaurant table (overrides the configured path)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a random restaurant to try today
    #[command(alias = "r")]
    Recommend,

    /// Show the top-voted restaurants
    #[command(alias = "b")]
    Board {
        /// How many restaurants to show (1 to 5)
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
    },

    /// Vote for a restaurant by its list position
    #[command(alias = "v")]
    Vote {
        /// Position as shown by `list` (1-based)
        position: usize,
    },

    /// Show the current voting results
    Results,

    /// List all restaurants in store order
    #[command(alias = "ls")]
    List,

    /// Password-gated table administration
    Admin {
        /// Admin password
        #[arg(short, long)]
        password: Option<String>,

        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// Show the editable table
    Show,

    /// Replace the table with the contents of an edited CSV file
    Save {
        /// Edited table file
        file: PathBuf,
    },
}
