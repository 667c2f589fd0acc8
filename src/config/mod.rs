//! Configuration management for the gateway
//!
//! This module handles loading and managing configuration settings for the
//! HTTP server, the upstream provider client and logging.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{LoggingSettings, ProviderSettings, ServerSettings, Settings};
