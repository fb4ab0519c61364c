use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::advisor::{AdvisorError, CompletionRequest, CompletionUpstream};

#[derive(Debug, Clone)]
pub(super) enum StubReply {
    Json(Value),
    Status(u16),
    Malformed,
}

/// Upstream double that records forwarded requests and replays a canned outcome.
pub(super) struct StubUpstream {
    reply: StubReply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubUpstream {
    pub(super) fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("stub mutex poisoned").clone()
    }
}

#[async_trait]
impl CompletionUpstream for StubUpstream {
    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Value, AdvisorError> {
        self.requests
            .lock()
            .expect("stub mutex poisoned")
            .push(request.clone());

        match &self.reply {
            StubReply::Json(body) => Ok(body.clone()),
            StubReply::Status(status) => Err(AdvisorError::Upstream { status: *status }),
            StubReply::Malformed => Err(AdvisorError::MalformedUpstream),
        }
    }
}

pub(super) fn post_json(
    body: impl Into<axum::body::Body>,
) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/openai")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("json body")
}
