//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, PathId};
use crate::http::server::AppState;
use crate::models::{category_map, Question};

/// All categories as an `{id: type}` map
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
    pub total_categories: usize,
}

/// One page of a category's questions
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i32,
}

/// GET /categories - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .store
        .list_categories()
        .await
        .map_err(ApiError::Persistence)?;

    if categories.is_empty() {
        return Err(ApiError::no_results("categories"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    }))
}

/// GET /categories/{id}/questions - questions in one category, paginated
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    PathId(category_id): PathId,
    PageQuery(page): PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state
        .store
        .get_category(category_id)
        .await?
        .ok_or_else(|| ApiError::not_found("category", category_id))?;

    let questions = state.store.questions_in_category(category.id).await?;
    let total_questions = questions.len();
    let current = page.paginate(questions);

    if current.is_empty() {
        return Err(ApiError::no_results("questions on this page"));
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: current,
        total_questions,
        current_category: category.id,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
