//! HTTP request handlers
//!
//! Each handler validates its parameters, makes at most one provider call and
//! maps the outcome onto a response. Validation failures return before the
//! provider is touched.

use crate::{
    server::app::AppState,
    types::{
        ErrorResponse, InfoParams, ProviderIntro, SearchParams, SearchQuery, StreamingServer,
        WatchParams, request::non_empty,
    },
};
use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use axum_macros::debug_handler;
use serde_json::Value;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Result returned by the provider-backed handlers
pub type ApiResult = Result<Json<Value>, ApiError>;

/// Describe provider endpoint
///
/// GET /flixhq
pub async fn describe() -> Json<ProviderIntro> {
    Json(ProviderIntro::flixhq())
}

/// Search catalog endpoint
///
/// GET /flixhq/:movie?page=N
///
/// An absent, non-numeric or zero page falls back to page 1.
#[debug_handler]
pub async fn search(
    State(state): State<AppState>,
    term: Result<Path<String>, PathRejection>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult {
    let Path(term) = term.map_err(|e| bad_request(e.body_text()))?;
    let Query(params) = params.map_err(|e| bad_request(e.body_text()))?;

    let Some(query) = SearchQuery::new(term, params.page.as_deref()) else {
        return Err(bad_request("Missing search term"));
    };

    tracing::debug!("Searching for {:?} (page {})", query.term, query.page);

    state
        .provider
        .search(&query.term, query.page)
        .await
        .map(Json)
        .map_err(|e| provider_failure("search", e))
}

/// Fetch media info endpoint
///
/// GET /flixhq/info?id=
#[debug_handler]
pub async fn media_info(
    State(state): State<AppState>,
    params: Result<Query<InfoParams>, QueryRejection>,
) -> ApiResult {
    let Query(params) = params.map_err(|e| bad_request(e.body_text()))?;

    let Some(id) = non_empty(params.id) else {
        return Err(bad_request("Missing id query"));
    };

    tracing::debug!("Fetching media info for {}", id);

    state
        .provider
        .fetch_media_info(&id)
        .await
        .map(Json)
        .map_err(|e| provider_failure("media info", e))
}

/// Resolve episode sources endpoint
///
/// GET /flixhq/watch/:episodeId?mediaId=&server=
#[debug_handler]
pub async fn watch(
    State(state): State<AppState>,
    episode_id: Result<Path<String>, PathRejection>,
    params: Result<Query<WatchParams>, QueryRejection>,
) -> ApiResult {
    let Path(episode_id) = episode_id.map_err(|e| bad_request(e.body_text()))?;
    let Query(params) = params.map_err(|e| bad_request(e.body_text()))?;

    let (media_id, server) = validate_watch_params(&state, params)?;

    tracing::debug!(
        "Resolving sources for episode {} of {} (server: {:?})",
        episode_id,
        media_id,
        server
    );

    state
        .provider
        .fetch_episode_sources(&episode_id, &media_id, server)
        .await
        .map(Json)
        .map_err(|e| provider_failure("episode sources", e))
}

/// Check the watch query parameters
///
/// `mediaId` is required; `server`, when given, must be a server the provider supports.
fn validate_watch_params(
    state: &AppState,
    params: WatchParams,
) -> Result<(String, Option<StreamingServer>), ApiError> {
    let Some(media_id) = non_empty(params.media_id) else {
        return Err(bad_request("Missing mediaId query"));
    };

    let server = match non_empty(params.server) {
        None => None,
        Some(token) => match token.parse::<StreamingServer>() {
            Ok(server) if state.provider.supports_server(server) => Some(server),
            _ => {
                tracing::debug!("Rejecting unknown server token {:?}", token);
                return Err(bad_request("Invalid server query"));
            }
        },
    };

    Ok((media_id, server))
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// Map a provider error onto a response
///
/// Rejections become 404 with the rejection reason; anything else is logged
/// and answered with the generic 500 body.
fn provider_failure(operation: &str, error: crate::Error) -> ApiError {
    match error.rejection_reason() {
        Some(reason) => {
            tracing::warn!("Provider rejected {} request: {}", operation, reason);
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new(reason)))
        }
        None => {
            tracing::error!("Unexpected failure during {}: {}", operation, error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::generic()),
            )
        }
    }
}
