//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "review")]
#[command(about = "Monthly self-review journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Review store file (overrides REVIEW_FILE and review.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initiate a new review or check when the next is due
    Review,

    /// List previous reviews which have been filled out
    List,

    /// Create an empty review store
    Init {
        /// Store file to create (default: configured store path)
        path: Option<PathBuf>,
    },
}
