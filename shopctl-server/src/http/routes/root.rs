//! Plaintext welcome at `/`

use axum::{routing::get, Router};

pub const WELCOME: &str = "Welcome to the API!";

/// GET /
async fn welcome() -> &'static str {
    WELCOME
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn welcome_text() {
        assert_eq!(welcome().await, "Welcome to the API!");
    }
}
