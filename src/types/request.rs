//! Request type definitions
//!
//! Raw query parameters as they arrive on the wire, plus the validated
//! search query handed to the provider.

use serde::Deserialize;

/// Page used when the client gives none, or gives one that is not a positive integer
pub const DEFAULT_PAGE: u32 = 1;

/// Query parameters for `GET /flixhq/:movie`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Raw page number, parsed leniently
    pub page: Option<String>,
}

/// Query parameters for `GET /flixhq/info`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InfoParams {
    /// Provider media id
    pub id: Option<String>,
}

/// Query parameters for `GET /flixhq/watch/:episodeId`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchParams {
    /// Provider media id the episode belongs to
    #[serde(rename = "mediaId")]
    pub media_id: Option<String>,

    /// Optional streaming server token
    pub server: Option<String>,
}

/// A validated catalog search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search term, never empty
    pub term: String,
    /// Page number, always positive
    pub page: u32,
}

impl SearchQuery {
    /// Build a search query from a decoded term and the raw `page` parameter.
    ///
    /// Returns `None` when the term is empty. Whitespace is kept as given.
    pub fn new(term: impl Into<String>, raw_page: Option<&str>) -> Option<Self> {
        let term = term.into();
        if term.is_empty() {
            return None;
        }

        Some(Self {
            term,
            page: parse_page(raw_page),
        })
    }
}

/// Parse a page number, falling back to [`DEFAULT_PAGE`]
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(DEFAULT_PAGE)
}

/// Treat an empty string parameter the same as an absent one
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
