//! HTTP server
//!
//! Router construction and the request handlers.

pub mod app;
pub mod handlers;

pub use app::{AppState, create_app, create_app_with_provider};
