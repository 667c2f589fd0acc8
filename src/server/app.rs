//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::{
    Result,
    config::Settings,
    provider::{FlixHqClient, MediaProvider},
    types::ErrorResponse,
};
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::{any::Any, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Provider every request is delegated to
    pub provider: Arc<dyn MediaProvider>,
}

/// Create the main Axum application backed by the upstream FlixHQ client
pub fn create_app(settings: &Settings) -> Result<Router> {
    let provider = FlixHqClient::new(&settings.provider)?;
    tracing::info!("Using FlixHQ upstream at {}", provider.base_url());
    Ok(create_app_with_provider(settings, Arc::new(provider)))
}

/// Create the application around an existing provider
pub fn create_app_with_provider(settings: &Settings, provider: Arc<dyn MediaProvider>) -> Router {
    let state = AppState { provider };

    let routes = provider_routes();
    let router = match settings.server.mount_path.trim_end_matches('/') {
        "" => routes,
        mount => Router::new().nest(mount, routes),
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn provider_routes() -> Router<AppState> {
    Router::new()
        .route("/flixhq", get(super::handlers::describe))
        .route("/flixhq/info", get(super::handlers::media_info))
        .route("/flixhq/watch/{episode_id}", get(super::handlers::watch))
        .route("/flixhq/{movie}", get(super::handlers::search))
}

/// Answer a panicking request with the generic 500 body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::generic()),
    )
        .into_response()
}
