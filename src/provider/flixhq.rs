//! FlixHQ provider client
//!
//! Forwards the provider operations to an upstream FlixHQ extension service
//! that performs the actual scraping and answers with JSON:
//!
//! - `GET {base}/search/{term}?page={page}`
//! - `GET {base}/info?id={id}`
//! - `GET {base}/watch/{episodeId}?mediaId={mediaId}&server={server}`

use crate::{Error, Result, config::ProviderSettings, provider::MediaProvider, types::StreamingServer};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

/// HTTP client for the upstream FlixHQ service
#[derive(Debug, Clone)]
pub struct FlixHqClient {
    /// HTTP client
    client: Client,
    /// Base URL of the upstream service
    base_url: Url,
    /// Server used when a request names none
    default_server: StreamingServer,
}

impl FlixHqClient {
    /// Create a client from provider settings
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .build()?;

        Self::with_client(client, &settings.base_url, settings.default_server)
    }

    /// Create a client reusing an existing HTTP client
    pub fn with_client(
        client: Client,
        base_url: &str,
        default_server: StreamingServer,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Provider URL cannot be a base: {}",
                base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            default_server,
        })
    }

    /// Upstream base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an upstream URL from path segments, percent-encoding each one
    ///
    /// `.` and `..` cannot be carried as a path segment (URL parsing removes
    /// them even when percent-encoded), so they are rejected.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(Error::rejected(format!(
                "Unsupported path segment: {:?}",
                segment
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::internal(format!("Provider URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a GET request and decode the JSON payload
    async fn get_json(&self, url: Url, query: &[(&str, &str)]) -> Result<Value> {
        tracing::debug!("Upstream request: GET {}", url);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::rejected(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::rejected(rejection_reason(response).await));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::rejected(format!("Invalid provider response: {}", e)))
    }
}

/// Extract a human-readable rejection reason from a failed upstream response
async fn rejection_reason(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(&body)
        && let Some(Value::String(message)) = fields.get("message")
    {
        return message.clone();
    }

    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        body.to_string()
    }
}

#[async_trait]
impl MediaProvider for FlixHqClient {
    async fn search(&self, term: &str, page: u32) -> Result<Value> {
        let url = self.endpoint(&["search", term])?;
        let page = page.to_string();
        self.get_json(url, &[("page", page.as_str())]).await
    }

    async fn fetch_media_info(&self, id: &str) -> Result<Value> {
        let url = self.endpoint(&["info"])?;
        self.get_json(url, &[("id", id)]).await
    }

    async fn fetch_episode_sources(
        &self,
        episode_id: &str,
        media_id: &str,
        server: Option<StreamingServer>,
    ) -> Result<Value> {
        let url = self.endpoint(&["watch", episode_id])?;
        let server = server.unwrap_or(self.default_server);
        self.get_json(
            url,
            &[("mediaId", media_id), ("server", server.as_str())],
        )
        .await
    }
}
