//! trivia CLI - runs and administers the trivia API
//!
//! - `serve`: prepare the schema and serve HTTP until Ctrl+C/SIGTERM
//! - `migrate`: create the questions and categories tables
//! - `seed`: insert the standard categories

use anyhow::Result;
use clap::{Parser, Subcommand};
use trivia_server::Mode;

mod commands;
mod tracing_setup;

use commands::db::DbArgs;
use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "REST backend for the trivia game: questions, categories, and quizzes"
)]
struct Cli {
    /// Enable debug logging (also on by default in dev mode)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve(ServeArgs),
    /// Create database tables if they don't exist
    Migrate(DbArgs),
    /// Insert the standard categories (Science, Art, Geography, ...)
    Seed(DbArgs),
}

impl Commands {
    fn mode(&self) -> Mode {
        match self {
            Self::Serve(args) => args.database.mode,
            Self::Migrate(args) | Self::Seed(args) => args.database.mode,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug || cli.command.mode().is_debug(),
    })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Seed(args) => commands::run_seed(args).await,
    }
}
