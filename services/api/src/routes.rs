use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use behavior_lab::workflows::advisor::{advisor_router, CompletionUpstream};
use behavior_lab::workflows::diagnostic::{diagnostic_router, QuestionBank};
use behavior_lab::workflows::directory::{directory_router, MemberDirectory};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn service_router<U>(
    bank: Arc<QuestionBank>,
    directory: Arc<MemberDirectory>,
    upstream: Arc<U>,
) -> Router
where
    U: CompletionUpstream + 'static,
{
    diagnostic_router(bank)
        .merge(directory_router(directory))
        .merge(advisor_router(upstream))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
