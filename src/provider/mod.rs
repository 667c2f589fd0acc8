//! Provider capability
//!
//! The gateway talks to its content source only through [`MediaProvider`].
//! One provider instance is built at startup and shared read-only by every
//! request task.
//!
//! A provider reports an upstream failure it understands (unknown id, fetch
//! or parse failure) as [`Error::Rejected`](crate::Error::Rejected). Any
//! other error is treated by the handlers as an unexpected fault.
//!
//! # Examples
//!
//! ```rust
//! use async_trait::async_trait;
//! use flixhq_gateway::{Error, MediaProvider, Result, StreamingServer};
//! use serde_json::{Value, json};
//!
//! struct EmptyCatalog;
//!
//! #[async_trait]
//! impl MediaProvider for EmptyCatalog {
//!     async fn search(&self, _term: &str, page: u32) -> Result<Value> {
//!         Ok(json!({ "currentPage": page, "results": [] }))
//!     }
//!
//!     async fn fetch_media_info(&self, id: &str) -> Result<Value> {
//!         Err(Error::rejected(format!("{} not found", id)))
//!     }
//!
//!     async fn fetch_episode_sources(
//!         &self,
//!         _episode_id: &str,
//!         media_id: &str,
//!         _server: Option<StreamingServer>,
//!     ) -> Result<Value> {
//!         Err(Error::rejected(format!("{} not found", media_id)))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let page = EmptyCatalog.search("dune", 2).await?;
//! assert_eq!(page["currentPage"], 2);
//!
//! let err = EmptyCatalog.fetch_media_info("tv/watch-dark-18270").await.unwrap_err();
//! assert_eq!(err.rejection_reason(), Some("tv/watch-dark-18270 not found"));
//! # Ok::<(), Error>(())
//! # });
//! ```

pub mod flixhq;

pub use flixhq::FlixHqClient;

use crate::{Result, types::StreamingServer};
use async_trait::async_trait;
use serde_json::Value;

/// Operations offered by an upstream media provider
///
/// Payloads are opaque JSON and are passed to clients unmodified.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Search the catalog
    async fn search(&self, term: &str, page: u32) -> Result<Value>;

    /// Fetch title, description and episode structure for a media id
    async fn fetch_media_info(&self, id: &str) -> Result<Value>;

    /// Resolve stream sources for an episode
    ///
    /// When `server` is `None` the provider picks its default server.
    async fn fetch_episode_sources(
        &self,
        episode_id: &str,
        media_id: &str,
        server: Option<StreamingServer>,
    ) -> Result<Value>;

    /// Streaming servers this provider can resolve sources against
    fn supported_servers(&self) -> &[StreamingServer] {
        StreamingServer::ALL
    }

    /// Whether `server` belongs to [`supported_servers`](Self::supported_servers)
    fn supports_server(&self, server: StreamingServer) -> bool {
        self.supported_servers().contains(&server)
    }
}
