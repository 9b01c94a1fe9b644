//! Repository traits and PostgreSQL implementations
//!
//! Each store follows these patterns:
//! - One statement per call, parameters always bound
//! - `update`/`delete` report affected rows; zero means the id is absent
//! - `create` returns the id assigned by storage

use async_trait::async_trait;

use crate::models::{ProductInput, UserInput};

pub mod products;
pub mod users;

pub use products::{Product, ProductRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("in-memory store lock poisoned")]
    Poisoned,
}

/// Product persistence
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, DbError>;

    async fn get(&self, id: i64) -> Result<Option<Product>, DbError>;

    async fn create(&self, input: &ProductInput) -> Result<i64, DbError>;

    /// Overwrite every mutable column. Returns affected rows.
    async fn update(&self, id: i64, input: &ProductInput) -> Result<u64, DbError>;

    /// Returns affected rows.
    async fn delete(&self, id: i64) -> Result<u64, DbError>;
}

/// User persistence. Reads never return the password.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DbError>;

    async fn get(&self, id: i64) -> Result<Option<User>, DbError>;

    async fn create(&self, input: &UserInput) -> Result<i64, DbError>;

    async fn update(&self, id: i64, input: &UserInput) -> Result<u64, DbError>;

    async fn delete(&self, id: i64) -> Result<u64, DbError>;
}
