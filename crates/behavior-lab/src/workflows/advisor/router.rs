use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{debug, warn};

use super::error::AdvisorError;
use super::request::ChatProxyRequest;
use super::upstream::CompletionUpstream;

/// Router builder exposing the chat advisor proxy.
pub fn advisor_router<U>(upstream: Arc<U>) -> Router
where
    U: CompletionUpstream + 'static,
{
    Router::new()
        .route("/api/openai", post(proxy_handler::<U>))
        .with_state(upstream)
}

pub(crate) async fn proxy_handler<U>(
    State(upstream): State<Arc<U>>,
    payload: Result<Json<ChatProxyRequest>, JsonRejection>,
) -> Response
where
    U: CompletionUpstream + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return AdvisorError::InvalidBody(rejection.body_text()).into_response();
        }
    };

    let request = match request.validate(upstream.default_model()) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "advisor request rejected");
            return err.into_response();
        }
    };

    debug!(
        model = %request.model,
        messages = request.messages.len(),
        "forwarding advisor request"
    );

    match upstream.complete(&request).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => err.into_response(),
    }
}
