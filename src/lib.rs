pub mod app;
pub mod config;
pub mod docs;
pub mod errors;
pub mod export;
pub mod extract;
pub mod models;
pub mod routes;
pub mod smoke;

// Re-export commonly used items for tests
pub use app::{create_app, AppState};
