//! Domain models with validation at construction
//!
//! Client input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod pagination;

pub use validation::ValidationError;
pub use category::{category_map, Category, DEFAULT_CATEGORIES};
pub use question::{int_or_string, CategoryFilter, NewQuestion, Question, SearchTerm};
pub use pagination::{Pagination, QUESTIONS_PER_PAGE};
