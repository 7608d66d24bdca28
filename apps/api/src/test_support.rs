//! Shared fixtures for handler tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crate::layout::default_page_config;
use crate::llm_client::{CompletionRequest, LlmError, Summarizer};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::MemoryStore;

/// Returns canned answers in order and records every prompt it receives.
#[derive(Default)]
pub struct FakeSummarizer {
    answers: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeSummarizer {
    pub fn answering(answers: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().map(|a| Ok(a.to_string())).collect()),
            prompts: Mutex::default(),
        }
    }

    pub fn failing(error: LlmError) -> Self {
        Self {
            answers: Mutex::new(VecDeque::from([Err(error)])),
            prompts: Mutex::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(request.prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub summarizer: Arc<FakeSummarizer>,
    pub router: Router,
}

impl TestApp {
    pub fn new(summarizer: FakeSummarizer) -> Self {
        let store = Arc::new(MemoryStore::new());
        let summarizer = Arc::new(summarizer);
        let state = AppState {
            reviews: store.clone(),
            reports: store.clone(),
            summarizer: summarizer.clone(),
            page_config: default_page_config(),
        };
        Self {
            store,
            summarizer,
            router: build_router(state),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
