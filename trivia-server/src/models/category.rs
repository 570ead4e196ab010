//! Category records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category record; `kind` is the `type` column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// `{id: type}` map as returned by the category endpoints.
///
/// Integer keys serialize as JSON object keys (`{"1": "Science"}`).
pub fn category_map(categories: &[Category]) -> BTreeMap<i32, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// Categories every fresh trivia database starts with.
pub const DEFAULT_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];
