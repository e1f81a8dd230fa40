//! Shared helpers for svcfind-axum integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use svcfind_axum::AxumContext;
use svcfind_core::ports::{ClassifierError, ClassifierPort, ClassifierResult};
use svcfind_core::{PromptManager, ServiceData, ServiceFinder};

pub const TEST_MODEL: &str = "openai/gpt-4o-mini";

/// Classifier returning a fixed answer and counting calls.
pub struct StubClassifier {
    answer: ClassifierResult<ServiceData>,
    pub calls: AtomicUsize,
}

impl StubClassifier {
    pub fn answering(data: ServiceData) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(data),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(err: ClassifierError) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(err),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClassifierPort for StubClassifier {
    async fn classify(&self, _model: &str, _prompt: &str) -> ClassifierResult<ServiceData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

/// Context wired with the default prompt manager and the given classifier.
pub fn context_with(classifier: Arc<StubClassifier>) -> AxumContext {
    AxumContext::new(ServiceFinder::new(
        classifier,
        Arc::new(PromptManager::new()),
        TEST_MODEL,
    ))
}

pub fn post_find_service(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/find-service")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Spawn `app` on an ephemeral localhost port and return its base URL.
pub async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
