//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookwright - draft books chapter by chapter with an editor in the loop
#[derive(Parser, Debug)]
#[command(name = "bookwright")]
#[command(about = "Draft books chapter by chapter with an editor in the loop", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file replacing ./bookwright.toml and the user config
    #[arg(long, global = true, env = "BOOKWRIGHT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every stage: outlines, chapters, then compilation
    Run,

    /// Draft outlines for books with outline notes
    Outline,

    /// Advance chapters for books in the chapter stage
    Chapters,

    /// Compile manuscripts for books ready for the final stage
    Compile,

    /// Print the chapters detected in an outline file
    ParseOutline {
        /// Path to a plain-text outline
        file: PathBuf,
    },

    /// Apply pending database migrations
    Migrate,
}
