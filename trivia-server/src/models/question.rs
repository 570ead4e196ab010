//! Question records and validated input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Question record, also its JSON shape in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// A question that passed validation and can be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl NewQuestion {
    /// Validate raw fields.
    ///
    /// # Rules
    /// - question and answer are non-empty after trimming
    /// - category is a positive id (0 is the "all categories" sentinel)
    ///
    /// # Example
    /// ```
    /// use trivia_server::models::NewQuestion;
    ///
    /// assert!(NewQuestion::new("Who painted the Mona Lisa?", "Da Vinci", 2, 3).is_ok());
    /// assert!(NewQuestion::new("  ", "Da Vinci", 2, 3).is_err());
    /// assert!(NewQuestion::new("Who?", "Da Vinci", 0, 3).is_err());
    /// ```
    pub fn new(
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ValidationError::Empty { field: "question" });
        }

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(ValidationError::Empty { field: "answer" });
        }

        if category <= 0 {
            return Err(ValidationError::InvalidFormat {
                field: "category",
                reason: "must be a positive category id",
            });
        }

        Ok(Self {
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> i32 {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach the id assigned by the store.
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Which categories a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Category id 0: every question is eligible
    Any,
    Only(i32),
}

impl CategoryFilter {
    pub fn from_id(id: i32) -> Self {
        if id == 0 {
            Self::Any
        } else {
            Self::Only(id)
        }
    }

    /// The category id to filter on, if any.
    pub fn category(&self) -> Option<i32> {
        match self {
            Self::Any => None,
            Self::Only(id) => Some(*id),
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::Any => true,
            Self::Only(id) => question.category == *id,
        }
    }
}

/// Non-empty search term for question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: Option<String>) -> Result<Self, ValidationError> {
        match raw {
            Some(s) if !s.is_empty() => Ok(Self(s)),
            _ => Err(ValidationError::Empty { field: "searchTerm" }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive containment check against question text.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }
}

/// Serde helper accepting an integer either as a JSON number or a numeric string.
///
/// Browser forms post select values as strings (`"category": "3"`).
pub mod int_or_string {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => {
                i32::try_from(n).map_err(|_| de::Error::custom("integer out of range"))
            }
            Raw::Str(s) => s
                .trim()
                .parse::<i32>()
                .map_err(|_| de::Error::custom(format!("expected an integer, got '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_text_fields() {
        let q = NewQuestion::new("  What is H2O? ", " Water ", 1, 1).unwrap();
        assert_eq!(q.question(), "What is H2O?");
        assert_eq!(q.answer(), "Water");
    }

    #[test]
    fn rejects_empty_answer() {
        let err = NewQuestion::new("What is H2O?", "", 1, 1).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "answer" });
    }

    #[test]
    fn rejects_sentinel_category() {
        let err = NewQuestion::new("What is H2O?", "Water", 0, 1).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "category", .. }));
    }

    #[test]
    fn into_question_keeps_fields() {
        let q = NewQuestion::new("What is H2O?", "Water", 1, 2)
            .unwrap()
            .into_question(7);
        assert_eq!(q.id, 7);
        assert_eq!(q.category, 1);
        assert_eq!(q.difficulty, 2);
    }

    #[test]
    fn zero_is_any_category() {
        assert_eq!(CategoryFilter::from_id(0), CategoryFilter::Any);
        assert_eq!(CategoryFilter::from_id(4), CategoryFilter::Only(4));
        assert_eq!(CategoryFilter::Any.category(), None);
    }

    #[test]
    fn search_term_rejects_missing_and_empty() {
        assert!(SearchTerm::new(None).is_err());
        assert!(SearchTerm::new(Some(String::new())).is_err());
        assert!(SearchTerm::new(Some("title".into())).is_ok());
    }

    #[test]
    fn search_term_is_case_insensitive() {
        let term = SearchTerm::new(Some("TiTlE".into())).unwrap();
        assert!(term.matches("What movie earned Tom Hanks his third title?"));
        assert!(!term.matches("Who painted the Mona Lisa?"));
    }

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "int_or_string::deserialize")]
        value: i32,
    }

    #[test]
    fn int_or_string_accepts_both_forms() {
        let w: Wrapper = serde_json::from_str(r#"{"value": 3}"#).unwrap();
        assert_eq!(w.value, 3);
        let w: Wrapper = serde_json::from_str(r#"{"value": "4"}"#).unwrap();
        assert_eq!(w.value, 4);
        assert!(serde_json::from_str::<Wrapper>(r#"{"value": "four"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"value": 1.5}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"value": null}"#).is_err());
    }
}
