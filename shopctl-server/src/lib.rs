//! shopctl-server: product and user CRUD over HTTP
//!
//! Maps HTTP verbs onto single parameterized statements against two tables,
//! `products` and `users`, with presence validation and fixed status-code
//! mapping (400 validation, 404 absent id, 500 storage).

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, AppState, ServerConfig};
