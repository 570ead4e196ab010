//! Question endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PageQuery, PathId};
use crate::http::server::AppState;
use crate::models::{
    category_map, int_or_string, NewQuestion, Pagination, Question, SearchTerm,
};

/// Create question request
#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "int_or_string::deserialize")]
    pub difficulty: i32,
    #[serde(deserialize_with = "int_or_string::deserialize")]
    pub category: i32,
}

/// Search request
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// One page of all questions
#[derive(Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i32>,
    pub categories: BTreeMap<i32, String>,
}

/// Newly created question id plus the first page
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub current_category: Option<i32>,
    pub total_questions: usize,
}

/// One page of search matches
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub current_category: Option<i32>,
    pub total_questions: usize,
}

/// Deleted question id and the remaining count
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub question: i32,
    pub total_questions: i64,
}

/// GET /questions - all questions ordered by id, paginated
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let questions = state.store.list_questions().await?;
    let total_questions = questions.len();
    let current = page.paginate(questions);

    if current.is_empty() {
        return Err(ApiError::no_results("questions on this page"));
    }

    let categories = state.store.list_categories().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: current,
        total_questions,
        current_category: None,
        categories: category_map(&categories),
    }))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new = NewQuestion::new(&req.question, &req.answer, req.category, req.difficulty)?;

    let created = state
        .store
        .insert_question(new)
        .await
        .map_err(ApiError::Persistence)?;
    tracing::info!(id = created.id, category = created.category, "question created");

    let questions = state
        .store
        .list_questions()
        .await
        .map_err(ApiError::Persistence)?;
    let total_questions = questions.len();

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        questions: Pagination::default().paginate(questions),
        current_category: None,
        total_questions,
    }))
}

/// POST /questions/search - case-insensitive substring search, paginated
async fn search_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = SearchTerm::new(req.search_term)?;

    let matches = state.store.search_questions(&term).await?;
    let total_questions = matches.len();
    let current = page.paginate(matches);

    if current.is_empty() {
        return Err(ApiError::no_results("questions matching the search term"));
    }

    Ok(Json(SearchResponse {
        success: true,
        questions: current,
        current_category: None,
        total_questions,
    }))
}

/// DELETE /questions/{id} - delete a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !state.store.delete_question(id).await? {
        return Err(ApiError::not_found("question", id));
    }
    tracing::info!(id, "question deleted");

    let total_questions = state.store.count_questions().await?;

    Ok(Json(DeletedResponse {
        success: true,
        question: id,
        total_questions,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
