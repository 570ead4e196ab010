//! Table creation and category seeding

use sqlx::PgPool;

use super::DbError;
use crate::models::DEFAULT_CATEGORIES;

/// Create the trivia tables if they don't exist yet.
pub async fn migrate(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}

/// Insert the standard categories, leaving existing rows untouched.
///
/// Returns the number of categories actually inserted.
pub async fn seed_categories(pool: &PgPool) -> Result<u64, DbError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for (id, kind) in DEFAULT_CATEGORIES {
        let result = sqlx::query(
            "INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(kind)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    // Explicit ids bypass the sequence; move it past them
    sqlx::query(
        r#"
        SELECT setval(
            pg_get_serial_sequence('categories', 'id'),
            (SELECT COALESCE(MAX(id), 1) FROM categories)
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(inserted, "categories seeded");
    Ok(inserted)
}
