//! User repository
//!
//! SELECTs name their columns so the password never leaves the database.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::{DbError, UserStore};
use crate::models::UserInput;

/// User record as exposed over HTTP (no password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// User repository over a shared pool
#[derive(Clone)]
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn get(&self, id: i64) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn create(&self, input: &UserInput) -> Result<i64, DbError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i64, input: &UserInput) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE users SET username = $1, email = $2, password = $3 WHERE id = $4",
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, ensure_schema};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn stored_password_is_not_selected() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        ensure_schema(&pool).await.expect("schema creation failed");
        let repo = UserRepo::new(pool);

        let input = UserInput {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
        };
        let id = repo.create(&input).await.expect("insert failed");

        let user = repo.get(id).await.expect("select failed").expect("row missing");
        let json = serde_json::to_value(&user).expect("serialize");
        assert!(json.get("password").is_none());

        repo.delete(id).await.expect("delete failed");
    }
}
