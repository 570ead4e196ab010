//! trivia-server: HTTP API for the trivia game
//!
//! Stores questions and categories in PostgreSQL and exposes endpoints to
//! list, paginate, search, create and delete questions, list categories,
//! and draw random quiz questions.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod quiz;

pub use config::{ConfigError, DatabaseConfig, Mode};
pub use db::{DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use quiz::{IndexPicker, QuizSelector, SeededPicker, ThreadRngPicker};
