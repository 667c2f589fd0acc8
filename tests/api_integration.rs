//! HTTP API integration tests
//!
//! Drives the full router (mount prefix, middleware, handlers) against a
//! recording provider.

mod common;

use axum::http::StatusCode;
use common::{Behavior, Call, MockProvider, app_with, get_json};
use flixhq_gateway::{
    Settings, StreamingServer, server::create_app_with_provider, types::GENERIC_FAILURE_MESSAGE,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[tokio::test]
async fn test_describe_provider() {
    let provider = MockProvider::responding(json!(null));
    let (status, body) = get_json(app_with(&provider), "/movies/flixhq").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["routes"], json!(["/:movie", "/info", "/watch/:episodeId"]));
    assert_eq!(body["documentation"], "https://docs.consumet.org/#tag/flixhq");
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_search_passes_payload_through() {
    let payload = json!({
        "currentPage": 1,
        "hasNextPage": true,
        "results": [{ "id": "movie/watch-deadpool-19712", "title": "Deadpool" }]
    });
    let provider = MockProvider::responding(payload.clone());

    let (status, body) = get_json(app_with(&provider), "/movies/flixhq/deadpool?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
    assert_eq!(
        provider.calls(),
        vec![Call::Search {
            term: "deadpool".to_string(),
            page: 1
        }]
    );
}

#[tokio::test]
async fn test_search_decodes_term() {
    let provider = MockProvider::responding(json!({ "results": [] }));

    let (status, _) = get_json(app_with(&provider), "/movies/flixhq/the%20office?page=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        provider.calls(),
        vec![Call::Search {
            term: "the office".to_string(),
            page: 3
        }]
    );
}

#[tokio::test]
async fn test_search_whitespace_term_reaches_provider() {
    let provider = MockProvider::responding(json!({ "results": [] }));

    let (status, _) = get_json(app_with(&provider), "/movies/flixhq/%20%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        provider.calls(),
        vec![Call::Search {
            term: "  ".to_string(),
            page: 1
        }]
    );
}

#[rstest]
#[case("/movies/flixhq/dune", 1)]
#[case("/movies/flixhq/dune?page=", 1)]
#[case("/movies/flixhq/dune?page=abc", 1)]
#[case("/movies/flixhq/dune?page=0", 1)]
#[case("/movies/flixhq/dune?page=4", 4)]
#[tokio::test]
async fn test_search_page_defaulting(#[case] uri: &str, #[case] expected_page: u32) {
    let provider = MockProvider::responding(json!({ "results": [] }));

    let (status, _) = get_json(app_with(&provider), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        provider.calls(),
        vec![Call::Search {
            term: "dune".to_string(),
            page: expected_page
        }]
    );
}

#[tokio::test]
async fn test_search_is_idempotent() {
    let provider = MockProvider::responding(json!({ "results": [{ "id": "tv/watch-dark-1" }] }));
    let app = app_with(&provider);

    let first = get_json(app.clone(), "/movies/flixhq/dark").await;
    let second = get_json(app, "/movies/flixhq/dark").await;

    assert_eq!(first, second);
    assert_eq!(provider.calls().len(), 2);
}

#[tokio::test]
async fn test_search_rejection_is_404() {
    let provider = MockProvider::new(Behavior::Reject("upstream unreachable".to_string()));

    let (status, body) = get_json(app_with(&provider), "/movies/flixhq/deadpool").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "upstream unreachable" }));
}

#[tokio::test]
async fn test_info_missing_id() {
    let provider = MockProvider::responding(json!({}));

    let (status, body) = get_json(app_with(&provider), "/movies/flixhq/info").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Missing id query" }));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_info_success() {
    let payload = json!({ "id": "tv/watch-dark-18270", "title": "Dark", "episodes": [] });
    let provider = MockProvider::responding(payload.clone());

    let (status, body) = get_json(
        app_with(&provider),
        "/movies/flixhq/info?id=tv%2Fwatch-dark-18270",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
    assert_eq!(
        provider.calls(),
        vec![Call::Info {
            id: "tv/watch-dark-18270".to_string()
        }]
    );
}

#[tokio::test]
async fn test_info_rejection() {
    let provider = MockProvider::new(Behavior::Reject("not found".to_string()));

    let (status, body) = get_json(app_with(&provider), "/movies/flixhq/info?id=unknown-id").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "not found" }));
}

#[tokio::test]
async fn test_info_fault_is_generic_500() {
    let provider = MockProvider::new(Behavior::Fault("connection pool poisoned".to_string()));

    let (status, body) = get_json(app_with(&provider), "/movies/flixhq/info?id=m-1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": GENERIC_FAILURE_MESSAGE }));
}

#[tokio::test]
async fn test_watch_missing_media_id() {
    let provider = MockProvider::responding(json!({}));

    let (status, body) = get_json(app_with(&provider), "/movies/flixhq/watch/ep-1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Missing mediaId query" }));
    assert!(provider.calls().is_empty());
}

#[rstest]
#[case("bogus")]
#[case("UpCloud")]
#[case("upcloud ")]
#[tokio::test]
async fn test_watch_invalid_server(#[case] server: &str) {
    let provider = MockProvider::responding(json!({}));
    let uri = format!(
        "/movies/flixhq/watch/ep-1?mediaId=m-1&server={}",
        server.replace(' ', "%20")
    );

    let (status, body) = get_json(app_with(&provider), &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid server query" }));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_watch_success_with_server() {
    let payload = json!({
        "sources": [{ "url": "https://cdn.example/master.m3u8", "quality": "auto", "isM3U8": true }],
        "subtitles": [{ "url": "https://cdn.example/en.vtt", "lang": "English" }]
    });
    let provider = MockProvider::responding(payload.clone());

    let (status, body) = get_json(
        app_with(&provider),
        "/movies/flixhq/watch/10766?mediaId=tv%2Fwatch-dark-18270&server=vidcloud",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
    assert_eq!(
        provider.calls(),
        vec![Call::Sources {
            episode_id: "10766".to_string(),
            media_id: "tv/watch-dark-18270".to_string(),
            server: Some(StreamingServer::VidCloud),
        }]
    );
}

#[tokio::test]
async fn test_watch_without_server_leaves_default_to_provider() {
    let provider = MockProvider::responding(json!({ "sources": [] }));

    let (status, _) = get_json(app_with(&provider), "/movies/flixhq/watch/ep-1?mediaId=m-1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        provider.calls(),
        vec![Call::Sources {
            episode_id: "ep-1".to_string(),
            media_id: "m-1".to_string(),
            server: None,
        }]
    );
}

#[tokio::test]
async fn test_watch_rejection() {
    let provider = MockProvider::new(Behavior::Reject("episode not found".to_string()));

    let (status, body) = get_json(
        app_with(&provider),
        "/movies/flixhq/watch/ep-404?mediaId=m-1&server=upcloud",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "episode not found" }));
}

#[tokio::test]
async fn test_panicking_provider_is_generic_500() {
    let provider = MockProvider::new(Behavior::Panic);
    let app = app_with(&provider);

    let (status, body) = get_json(app.clone(), "/movies/flixhq/watch/ep-1?mediaId=m-1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": GENERIC_FAILURE_MESSAGE }));

    // The router keeps serving after a panic
    let (status, _) = get_json(app, "/movies/flixhq").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_root_mount() {
    let mut settings = Settings::default();
    settings.server.mount_path = "/".to_string();
    let provider = MockProvider::responding(json!({ "results": [] }));
    let app = create_app_with_provider(&settings, provider.clone());

    let (status, _) = get_json(app, "/flixhq/deadpool").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let provider = MockProvider::responding(json!({ "results": [] }));
    let app = app_with(&provider);

    let handles: Vec<_> = (1..=8)
        .map(|page| {
            let app = app.clone();
            tokio::spawn(async move {
                get_json(app, &format!("/movies/flixhq/dune?page={}", page)).await
            })
        })
        .collect();

    for handle in handles {
        let (status, _) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    let mut pages: Vec<u32> = provider
        .calls()
        .into_iter()
        .map(|call| match call {
            Call::Search { page, .. } => page,
            other => panic!("unexpected call {:?}", other),
        })
        .collect();
    pages.sort_unstable();
    assert_eq!(pages, (1..=8).collect::<Vec<_>>());
}
