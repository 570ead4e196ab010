//! Command implementations for the trivia CLI

pub mod db;
pub mod serve;

pub use db::{run_migrate, run_seed};
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use trivia_server::{DatabaseConfig, Mode};

/// Database selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Deployment mode; picks the PROD_*, DEV_* or TEST_* variables
    #[arg(long, short = 'm', default_value = "prod")]
    pub mode: Mode,

    /// Database URL (overrides the mode's environment variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl DatabaseArgs {
    /// Resolve the connection URL: explicit URL first, then `{MODE}_*` variables.
    pub fn resolve_url(&self) -> Result<String> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }

        let config = DatabaseConfig::from_env(self.mode)
            .with_context(|| format!("invalid {} database configuration", self.mode))?;
        tracing::debug!(?config, "database config loaded");
        Ok(config.url())
    }
}
