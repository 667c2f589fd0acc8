//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use flixhq_gateway::{Error, MediaProvider, Result, Settings, StreamingServer};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// A provider call as observed by [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search { term: String, page: u32 },
    Info { id: String },
    Sources {
        episode_id: String,
        media_id: String,
        server: Option<StreamingServer>,
    },
}

/// How [`MockProvider`] answers every call
#[derive(Debug, Clone)]
pub enum Behavior {
    Respond(Value),
    Reject(String),
    Fault(String),
    Panic,
}

/// Provider that records its calls and answers with a fixed behavior
#[derive(Debug)]
pub struct MockProvider {
    behavior: Behavior,
    calls: Mutex<Vec<Call>>,
}

impl MockProvider {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn responding(payload: Value) -> Arc<Self> {
        Self::new(Behavior::Respond(payload))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> Result<Value> {
        self.calls.lock().unwrap().push(call);
        match &self.behavior {
            Behavior::Respond(payload) => Ok(payload.clone()),
            Behavior::Reject(reason) => Err(Error::rejected(reason.clone())),
            Behavior::Fault(detail) => Err(Error::internal(detail.clone())),
            Behavior::Panic => panic!("provider exploded"),
        }
    }
}

#[async_trait]
impl MediaProvider for MockProvider {
    async fn search(&self, term: &str, page: u32) -> Result<Value> {
        self.answer(Call::Search {
            term: term.to_string(),
            page,
        })
    }

    async fn fetch_media_info(&self, id: &str) -> Result<Value> {
        self.answer(Call::Info { id: id.to_string() })
    }

    async fn fetch_episode_sources(
        &self,
        episode_id: &str,
        media_id: &str,
        server: Option<StreamingServer>,
    ) -> Result<Value> {
        self.answer(Call::Sources {
            episode_id: episode_id.to_string(),
            media_id: media_id.to_string(),
            server,
        })
    }
}

/// Build the router with default settings around `provider`
pub fn app_with(provider: &Arc<MockProvider>) -> Router {
    flixhq_gateway::server::create_app_with_provider(&Settings::default(), provider.clone())
}

/// Send a GET request and decode the JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
