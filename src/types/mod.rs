//! Type definitions for the gateway
//!
//! This module contains the request parameters, response bodies and the
//! streaming server enumeration shared by the handlers and providers.

pub mod request;
pub mod response;
pub mod server;

pub use request::{InfoParams, SearchParams, SearchQuery, WatchParams};
pub use response::{ErrorResponse, GENERIC_FAILURE_MESSAGE, ProviderIntro};
pub use server::{StreamingServer, UnknownServer};
