//! Command implementations for shopctl CLI

pub mod fetch;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use fetch::run_fetch;
pub use serve::run_serve;
