//! FlixHQ Gateway
//!
//! A stateless HTTP gateway exposing a uniform REST surface over the FlixHQ
//! media provider. Requests are validated, delegated to a single shared
//! [`MediaProvider`], and the outcome is mapped onto an HTTP response:
//!
//! - provider success: `200` with the provider payload unmodified
//! - invalid input: `400` with `{"message": ...}`, the provider is never called
//! - provider rejection: `404` with the rejection reason as `message`
//! - anything else: `500` with a fixed generic message
//!
//! # Usage
//!
//! ```bash
//! flixhq-gateway --port 3000 --host 0.0.0.0
//! ```
//!
//! # Examples
//!
//! ```rust
//! use flixhq_gateway::{Settings, server::create_app};
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = Settings::default();
//! let _app = create_app(&settings)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod provider;
pub mod server;
pub mod types;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use provider::{FlixHqClient, MediaProvider};
pub use types::{ErrorResponse, ProviderIntro, StreamingServer};
