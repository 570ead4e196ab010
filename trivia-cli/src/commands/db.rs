//! Schema and seed commands

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, schema};

use super::DatabaseArgs;

/// Arguments for migrate and seed
#[derive(Parser, Debug)]
pub struct DbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the trivia tables if missing
pub async fn run_migrate(args: DbArgs) -> Result<()> {
    let pool = create_pool(&args.database.resolve_url()?)
        .await
        .context("Failed to create database pool")?;

    schema::migrate(&pool).await.context("Migration failed")?;
    println!("Schema is up to date");
    Ok(())
}

/// Create the tables, then insert the standard categories
pub async fn run_seed(args: DbArgs) -> Result<()> {
    let pool = create_pool(&args.database.resolve_url()?)
        .await
        .context("Failed to create database pool")?;

    schema::migrate(&pool).await.context("Migration failed")?;
    let inserted = schema::seed_categories(&pool)
        .await
        .context("Seeding categories failed")?;

    println!("Inserted {} categories", inserted);
    Ok(())
}
