//! Quiz play endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{int_or_string, CategoryFilter, Question};
use crate::quiz::QuizSelector;

/// Next-question request
#[derive(Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: QuizCategory,
}

/// Category chosen by the player; id 0 means all categories
#[derive(Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "int_or_string::deserialize")]
    pub id: i32,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Next question, omitted once the quiz is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// POST /quizzes - draw a random unseen question
async fn next_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let previous = req.previous_questions.unwrap_or_default();
    let filter = CategoryFilter::from_id(req.quiz_category.id);
    tracing::debug!(
        category = ?filter,
        category_type = ?req.quiz_category.kind,
        seen = previous.len(),
        "quiz question requested"
    );

    let selector = QuizSelector::new(state.store.as_ref(), state.picker.as_ref());
    let question = selector.next_question(filter, &previous).await?;

    if question.is_none() {
        tracing::debug!("quiz exhausted");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
