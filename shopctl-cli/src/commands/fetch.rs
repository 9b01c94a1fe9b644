//! Fetch command - exercise a running shopctl API as a client
//!
//! Runs two passes against the server:
//! 1. List all users and all products
//! 2. Fetch one user and one product by id, then a user id that should not
//!    exist and confirm the server answers 404
//!
//! ```bash
//! shopctl serve --in-memory &
//! shopctl fetch --api-url http://localhost:19132
//! ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

/// Arguments for the fetch command
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Base URL of the running API
    #[arg(long, env = "SHOPCTL_API_URL", default_value = "http://localhost:19132")]
    pub api_url: String,

    /// User id expected to exist
    #[arg(long, default_value_t = 5)]
    pub user_id: i64,

    /// Product id expected to exist
    #[arg(long, default_value_t = 1)]
    pub product_id: i64,

    /// User id expected to be absent (exercises 404 handling)
    #[arg(long, default_value_t = 999)]
    pub missing_user_id: i64,
}

/// Outcome of a GET that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// 2xx with a JSON body
    Found(Value),
    /// 404 with the server's `message`
    NotFound(String),
    /// Any other status
    Failed { status: StatusCode, body: String },
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// Thin JSON client for the API
pub struct ApiClient {
    client: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_owned(),
        })
    }

    /// GET `path`. Transport failures are errors; HTTP statuses are not.
    pub async fn get(&self, path: &str) -> Result<Fetched> {
        let url = format!("{}{}", self.base, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status.is_success() {
            let value = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse response from {}", url))?;
            return Ok(Fetched::Found(value));
        }

        if status == StatusCode::NOT_FOUND {
            if let Ok(body) = serde_json::from_str::<MessageBody>(&text) {
                return Ok(Fetched::NotFound(body.message));
            }
        }

        Ok(Fetched::Failed { status, body: text })
    }

    /// GET a collection; anything but 2xx is an error.
    pub async fn list(&self, path: &str) -> Result<Value> {
        match self.get(path).await? {
            Fetched::Found(value) => Ok(value),
            Fetched::NotFound(message) => Err(anyhow!("{}: 404 {}", path, message)),
            Fetched::Failed { status, body } => Err(anyhow!("{}: {} {}", path, status, body)),
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Pass 1: every user, then every product.
pub async fn fetch_all_data(api: &ApiClient) -> Result<(Value, Value)> {
    let users = api.list("/users").await?;
    println!("Success: Fetched /users");
    println!("User Data: {}\n", pretty(&users));

    let products = api.list("/products").await?;
    println!("Success: Fetched /products");
    println!("Product Data: {}", pretty(&products));

    Ok((users, products))
}

/// Pass 2: single rows and the 404 path. Returns whether the absent user
/// was answered with a 404.
pub async fn fetch_dynamic_data(api: &ApiClient, args: &FetchArgs) -> bool {
    let user_path = format!("/users/{}", args.user_id);
    match api.get(&user_path).await {
        Ok(Fetched::Found(user)) => {
            println!("Success: Fetched {}", user_path);
            println!("Data for User {}: {}", args.user_id, pretty(&user));
        }
        Ok(other) => eprintln!("Error fetching {}: {:?}", user_path, other),
        Err(err) => eprintln!("Error fetching {}: {:#}", user_path, err),
    }

    let product_path = format!("/products/{}", args.product_id);
    match api.get(&product_path).await {
        Ok(Fetched::Found(product)) => {
            println!("\nSuccess: Fetched {}", product_path);
            println!("Data for Product {}: {}", args.product_id, pretty(&product));
        }
        Ok(other) => eprintln!("Note: Could not fetch {}: {:?}", product_path, other),
        Err(err) => eprintln!("Note: Could not fetch {}: {:#}", product_path, err),
    }

    println!("\nTesting error handling...");
    let missing_path = format!("/users/{}", args.missing_user_id);
    match api.get(&missing_path).await {
        Ok(Fetched::NotFound(message)) => {
            println!("Success: Handled 404 error gracefully.");
            println!("{}", message);
            true
        }
        Ok(Fetched::Found(user)) => {
            println!("Data for User {}: {}", args.missing_user_id, pretty(&user));
            false
        }
        Ok(Fetched::Failed { status, body }) => {
            eprintln!("An unexpected error occurred: {} {}", status, body);
            false
        }
        Err(err) => {
            eprintln!("An unexpected error occurred: {:#}", err);
            false
        }
    }
}

/// Run both passes. Failures are reported, never fatal.
pub async fn run_fetch(args: FetchArgs) -> Result<()> {
    let api = ApiClient::new(&args.api_url)?;
    tracing::debug!(api_url = %args.api_url, "Exercising API");

    println!("--- [Fetching All Data] ---");
    if let Err(err) = fetch_all_data(&api).await {
        eprintln!("Error in fetch_all_data: {:#}", err);
    }

    println!("\n\n--- [Fetching Dynamic Data] ---");
    fetch_dynamic_data(&api, &args).await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shopctl_server::http::{serve, AppState, ServerConfig};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// In-memory server on an ephemeral port; dropping the sender stops it.
    async fn spawn_server() -> (String, oneshot::Sender<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let shutdown = async {
                let _ = rx.await;
            };
            serve(listener, AppState::in_memory(), &ServerConfig::default(), shutdown)
                .await
                .expect("server failed");
        });

        (format!("http://{}", addr), tx)
    }

    fn args(api_url: &str) -> FetchArgs {
        FetchArgs {
            api_url: api_url.to_owned(),
            user_id: 1,
            product_id: 1,
            missing_user_id: 999,
        }
    }

    #[tokio::test]
    async fn lists_and_single_rows() {
        let (base, _shutdown) = spawn_server().await;
        let http = Client::new();

        http.post(format!("{}/users", base))
            .json(&json!({ "username": "ada", "email": "ada@example.com", "password": "pw" }))
            .send()
            .await
            .expect("create user");
        http.post(format!("{}/products", base))
            .json(&json!({ "name": "Pen", "description": "Blue ink", "price": 1.5, "stock_quantity": 100 }))
            .send()
            .await
            .expect("create product");

        let api = ApiClient::new(&base).unwrap();
        let (users, products) = fetch_all_data(&api).await.unwrap();
        assert_eq!(users, json!([{ "id": 1, "username": "ada", "email": "ada@example.com" }]));
        assert_eq!(products.as_array().map(Vec::len), Some(1));

        assert!(matches!(api.get("/products/1").await.unwrap(), Fetched::Found(_)));
    }

    #[tokio::test]
    async fn missing_user_is_handled_as_404() {
        let (base, _shutdown) = spawn_server().await;
        let api = ApiClient::new(&base).unwrap();

        assert_eq!(
            api.get("/users/999").await.unwrap(),
            Fetched::NotFound("User not found".into())
        );
        assert!(fetch_dynamic_data(&api, &args(&base)).await);
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = ApiClient::new(&format!("http://{}", addr)).unwrap();
        assert!(api.list("/users").await.is_err());
        assert!(run_fetch(args(&format!("http://{}", addr))).await.is_ok());
    }
}
