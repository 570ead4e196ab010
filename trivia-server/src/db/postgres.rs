//! PostgreSQL store

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, TriviaStore};
use crate::models::{Category, CategoryFilter, NewQuestion, Question, SearchTerm};

/// Store backed by a sqlx connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        let categories: Vec<Category> =
            sqlx::query_as("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError> {
        let category: Option<Category> =
            sqlx::query_as("SELECT id, type FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(category)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        let questions: Vec<Question> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError> {
        let question: Option<Question> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        let inserted: Question = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.category())
        .bind(question.difficulty())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = inserted.id, "question inserted");
        Ok(inserted)
    }

    async fn update_question(&self, question: &Question) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE questions
            SET question = $2, answer = $3, category = $4, difficulty = $5
            WHERE id = $1
            "#,
        )
        .bind(question.id)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "question",
                id: question.id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_question(&self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let questions: Vec<Question> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escape_like(term.as_str()))
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        let questions: Vec<Question> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        // NULL category parameter means "any category"
        let questions: Vec<Question> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE NOT (id = ANY($1))
            AND ($2::INTEGER IS NULL OR category = $2)
            ORDER BY id
            "#,
        )
        .bind(exclude.to_vec())
        .bind(filter.category())
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }
}
