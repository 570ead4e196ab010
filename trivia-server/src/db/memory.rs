//! In-process store for tests and local development
//!
//! Mirrors `PgStore` semantics: ids are assigned sequentially and every
//! list comes back ordered by id. `set_unavailable` makes every call fail,
//! which is how tests reach the persistence-error paths.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::{DbError, TriviaStore};
use crate::models::{Category, CategoryFilter, NewQuestion, Question, SearchTerm};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    last_question_id: i32,
}

/// Store holding rows in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the given categories.
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = (i32, S)>,
        S: Into<String>,
    {
        let store = Self::new();
        if let Ok(mut tables) = store.tables.write() {
            for (id, kind) in categories {
                tables.categories.insert(id, Category::new(id, kind));
            }
        }
        store
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DbError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable("memory store marked unavailable".into()));
        }
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DbError> {
        self.check_available()?;
        self.tables
            .read()
            .map_err(|_| DbError::Unavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DbError> {
        self.check_available()?;
        self.tables
            .write()
            .map_err(|_| DbError::Unavailable("memory store lock poisoned".into()))
    }

    fn filter_questions<F>(&self, keep: F) -> Result<Vec<Question>, DbError>
    where
        F: Fn(&Question) -> bool,
    {
        let tables = self.read()?;
        Ok(tables
            .questions
            .values()
            .filter(|&q| keep(q))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, DbError> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        self.filter_questions(|_| true)
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        Ok(self.read()?.questions.len() as i64)
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.write()?;
        tables.last_question_id += 1;
        let question = question.into_question(tables.last_question_id);
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn update_question(&self, question: &Question) -> Result<(), DbError> {
        let mut tables = self.write()?;
        match tables.questions.get_mut(&question.id) {
            Some(row) => {
                *row = question.clone();
                Ok(())
            }
            None => Err(DbError::NotFound {
                resource: "question",
                id: question.id.to_string(),
            }),
        }
    }

    async fn delete_question(&self, id: i32) -> Result<bool, DbError> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        self.filter_questions(|q| term.matches(&q.question))
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, DbError> {
        self.filter_questions(|q| q.category == category)
    }

    async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        self.filter_questions(|q| filter.matches(q) && !exclude.contains(&q.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion::new(text, "answer", category, 1).unwrap()
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.insert_question(new_question("First?", 1)).await.unwrap();
        let b = store.insert_question(new_question("Second?", 1)).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let a = store.insert_question(new_question("First?", 1)).await.unwrap();
        assert!(store.delete_question(a.id).await.unwrap());
        let b = store.insert_question(new_question("Second?", 1)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn update_overwrites_fields() {
        let store = MemoryStore::new();
        let mut q = store.insert_question(new_question("Old?", 1)).await.unwrap();
        q.answer = "new answer".into();
        q.difficulty = 4;
        store.update_question(&q).await.unwrap();

        let stored = store.get_question(q.id).await.unwrap().unwrap();
        assert_eq!(stored, q);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = MemoryStore::new();
        let ghost = new_question("Ghost?", 1).into_question(42);
        let err = store.update_question(&ghost).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "question", .. }));
    }

    #[tokio::test]
    async fn quiz_candidates_filters_category_and_exclusions() {
        let store = MemoryStore::new();
        for (text, category) in [("A?", 1), ("B?", 2), ("C?", 1), ("D?", 1)] {
            store.insert_question(new_question(text, category)).await.unwrap();
        }

        let any: Vec<i32> = store
            .quiz_candidates(CategoryFilter::Any, &[2])
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(any, vec![1, 3, 4]);

        let science: Vec<i32> = store
            .quiz_candidates(CategoryFilter::Only(1), &[1])
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(science, vec![3, 4]);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryStore::with_categories([(1, "Science")]);
        store.set_unavailable(true);
        assert!(matches!(
            store.list_categories().await,
            Err(DbError::Unavailable(_))
        ));
        assert!(store.insert_question(new_question("X?", 1)).await.is_err());

        store.set_unavailable(false);
        assert_eq!(store.list_categories().await.unwrap().len(), 1);
    }
}
