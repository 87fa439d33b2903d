//! Bookwright CLI binary.
//!
//! This binary runs the editorial pipeline against the configured database:
//! - Draft outlines, chapters and manuscripts in one pass (`run`)
//! - Run a single stage (`outline`, `chapters`, `compile`)
//! - Inspect outline files and apply migrations

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, StageSelection, migrate, run_stages, show_outline};

    // Secrets such as GROQ_API_KEY and DATABASE_URL may live in .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    bookwright::init_telemetry(cli.verbose)?;

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Run => run_stages(StageSelection::All, config).await?,
        Commands::Outline => run_stages(StageSelection::Outline, config).await?,
        Commands::Chapters => run_stages(StageSelection::Chapters, config).await?,
        Commands::Compile => run_stages(StageSelection::Compile, config).await?,
        Commands::ParseOutline { file } => show_outline(&file)?,
        Commands::Migrate => migrate()?,
    }

    Ok(())
}
