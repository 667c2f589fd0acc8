//! Response type definitions
//!
//! Provider payloads pass through as opaque JSON; only the gateway's own
//! bodies are modelled here.

use serde::{Deserialize, Serialize};

/// Message sent for any fault that is not a provider rejection
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Error response for API errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The fixed body for unexpected faults
    pub fn generic() -> Self {
        Self::new(GENERIC_FAILURE_MESSAGE)
    }
}

/// Descriptor returned by `GET /flixhq`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIntro {
    /// Welcome text naming the provider
    pub intro: String,
    /// Routes served under the provider prefix
    pub routes: Vec<String>,
    /// Documentation link
    pub documentation: String,
}

impl ProviderIntro {
    /// Descriptor for the FlixHQ provider
    pub fn flixhq() -> Self {
        Self {
            intro: "Welcome to the flixhq provider: check out the provider's website @ https://flixhq.to/"
                .to_string(),
            routes: vec![
                "/:movie".to_string(),
                "/info".to_string(),
                "/watch/:episodeId".to_string(),
            ],
            documentation: "https://docs.consumet.org/#tag/flixhq".to_string(),
        }
    }
}
