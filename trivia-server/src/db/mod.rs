//! Database layer - connection pool, schema, and stores
//!
//! # Design Principles
//!
//! - Handlers only see the `TriviaStore` trait, injected through app state
//! - `PgStore` is the production store; `MemoryStore` backs tests
//! - Schema creation is idempotent (`IF NOT EXISTS`)

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use store::{DbError, TriviaStore};
