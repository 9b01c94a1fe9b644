//! Database layer - connection pool, table bootstrap and stores
//!
//! # Design Principles
//!
//! - Connection pool handle injected into handlers, no global connection
//! - Every statement uses bound parameters
//! - Handlers talk to `ProductStore`/`UserStore`, never to sqlx directly

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use schema::ensure_schema;
