//! Quiz question selection
//!
//! Provides:
//! - `IndexPicker`: uniform index draws, swappable for deterministic tests
//! - `QuizSelector`: filters eligible questions and draws one

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::db::{DbError, TriviaStore};
use crate::models::{CategoryFilter, Question};

/// Uniform random draw over `[0, len)`
pub trait IndexPicker: Send + Sync {
    /// Pick an index in `[0, len)`. Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Picker drawing from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible picker seeded with a fixed value
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Selects the next quiz question
pub struct QuizSelector<'a> {
    store: &'a dyn TriviaStore,
    picker: &'a dyn IndexPicker,
}

impl<'a> QuizSelector<'a> {
    pub fn new(store: &'a dyn TriviaStore, picker: &'a dyn IndexPicker) -> Self {
        Self { store, picker }
    }

    /// Draw one question matching `filter` that isn't in `previous`.
    ///
    /// Returns `None` once every eligible question has been served.
    pub async fn next_question(
        &self,
        filter: CategoryFilter,
        previous: &[i32],
    ) -> Result<Option<Question>, DbError> {
        let mut candidates = self.store.quiz_candidates(filter, previous).await?;
        if candidates.is_empty() {
            return Ok(None);
        }

        let len = candidates.len();
        let index = self.picker.pick(len);
        debug_assert!(index < len, "picker returned {index} for {len} candidates");
        tracing::debug!(eligible = len, index, "quiz question drawn");
        Ok(Some(candidates.swap_remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::NewQuestion;

    /// Always returns the same index
    struct FixedPicker(usize);

    impl IndexPicker for FixedPicker {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    async fn store_with(questions: &[(&str, i32)]) -> MemoryStore {
        let store = MemoryStore::with_categories([(1, "Science"), (2, "Art")]);
        for (text, category) in questions {
            store
                .insert_question(NewQuestion::new(text, "answer", *category, 1).unwrap())
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn picks_the_drawn_index() {
        let store = store_with(&[("A?", 1), ("B?", 1), ("C?", 1)]).await;
        let picker = FixedPicker(1);
        let selector = QuizSelector::new(&store, &picker);

        let q = selector.next_question(CategoryFilter::Any, &[]).await.unwrap();
        assert_eq!(q.unwrap().id, 2);
    }

    #[tokio::test]
    #[should_panic]
    async fn out_of_range_pick_panics() {
        let store = store_with(&[("A?", 1), ("B?", 1)]).await;
        let picker = FixedPicker(99);
        let selector = QuizSelector::new(&store, &picker);

        let _ = selector.next_question(CategoryFilter::Any, &[]).await;
    }

    #[tokio::test]
    async fn never_repeats_previous_questions() {
        let store = store_with(&[("A?", 1), ("B?", 2), ("C?", 1), ("D?", 2)]).await;
        let picker = SeededPicker::new(7);
        let selector = QuizSelector::new(&store, &picker);

        let mut previous = Vec::new();
        loop {
            let next = selector
                .next_question(CategoryFilter::Any, &previous)
                .await
                .unwrap();
            let Some(q) = next else { break };
            assert!(!previous.contains(&q.id));
            previous.push(q.id);
        }

        previous.sort_unstable();
        assert_eq!(previous, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn stays_within_category() {
        let store = store_with(&[("A?", 1), ("B?", 2), ("C?", 1), ("D?", 2)]).await;
        let picker = SeededPicker::new(42);
        let selector = QuizSelector::new(&store, &picker);

        let mut previous = Vec::new();
        loop {
            let next = selector
                .next_question(CategoryFilter::Only(2), &previous)
                .await
                .unwrap();
            let Some(q) = next else { break };
            assert_eq!(q.category, 2);
            previous.push(q.id);
        }
        assert_eq!(previous.len(), 2);
    }

    #[tokio::test]
    async fn empty_eligible_set_is_none() {
        let store = store_with(&[("A?", 1)]).await;
        let picker = ThreadRngPicker;
        let selector = QuizSelector::new(&store, &picker);

        assert!(selector
            .next_question(CategoryFilter::Any, &[1])
            .await
            .unwrap()
            .is_none());
        assert!(selector
            .next_question(CategoryFilter::Only(2), &[])
            .await
            .unwrap()
            .is_none());
    }

    #[test]
    fn seeded_picker_covers_every_index() {
        let picker = SeededPicker::new(1);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let i = picker.pick(5);
            assert!(i < 5);
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn seeded_pickers_are_reproducible() {
        let a = SeededPicker::new(99);
        let b = SeededPicker::new(99);
        let draws_a: Vec<usize> = (0..20).map(|_| a.pick(10)).collect();
        let draws_b: Vec<usize> = (0..20).map(|_| b.pick(10)).collect();
        assert_eq!(draws_a, draws_b);
    }
}
