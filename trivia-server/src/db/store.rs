//! Data access interface shared by every handler

use async_trait::async_trait;

use crate::models::{Category, CategoryFilter, NewQuestion, Question, SearchTerm};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Question and category storage.
///
/// List operations return rows ordered by id.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError>;

    async fn list_questions(&self) -> Result<Vec<Question>, DbError>;

    async fn count_questions(&self) -> Result<i64, DbError>;

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError>;

    /// Insert a question, returning it with its assigned id.
    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError>;

    /// Overwrite every field of an existing question.
    ///
    /// Fails with `DbError::NotFound` when the id doesn't exist.
    async fn update_question(&self, question: &Question) -> Result<(), DbError>;

    /// Delete a question. Returns false when no row had that id.
    async fn delete_question(&self, id: i32) -> Result<bool, DbError>;

    /// Questions whose text contains the term, ignoring case.
    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError>;

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError>;

    /// Questions matching the filter whose ids are not in `exclude`.
    async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError>;
}
