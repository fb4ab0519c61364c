use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{Member, MemberId, MemberTag};
use super::search::MemberDirectory;

/// Router builder exposing directory search and profile lookups.
pub fn directory_router(directory: Arc<MemberDirectory>) -> Router {
    Router::new()
        .route("/api/v1/members", get(search_handler))
        .route("/api/v1/members/tags", get(tags_handler))
        .route("/api/v1/members/:member_id", get(member_handler))
        .with_state(directory)
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberSearchParams {
    #[serde(default)]
    pub q: Option<String>,
    /// Comma-separated tag ids.
    #[serde(default)]
    pub tags: Option<String>,
}

impl MemberSearchParams {
    pub fn tag_ids(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct MemberSearchResponse {
    pub query: String,
    pub tags: Vec<String>,
    pub total: usize,
    pub members: Vec<Member>,
}

pub(crate) async fn search_handler(
    State(directory): State<Arc<MemberDirectory>>,
    Query(params): Query<MemberSearchParams>,
) -> Json<MemberSearchResponse> {
    let query = params.q.clone().unwrap_or_default();
    let tags = params.tag_ids();
    let members: Vec<Member> = directory
        .search(&query, &tags)
        .into_iter()
        .cloned()
        .collect();

    Json(MemberSearchResponse {
        query,
        tags,
        total: members.len(),
        members,
    })
}

pub(crate) async fn tags_handler(
    State(directory): State<Arc<MemberDirectory>>,
) -> Json<Vec<MemberTag>> {
    Json(directory.tags())
}

pub(crate) async fn member_handler(
    State(directory): State<Arc<MemberDirectory>>,
    Path(member_id): Path<String>,
) -> Response {
    let id = MemberId(member_id);
    match directory.find(&id) {
        Some(member) => (StatusCode::OK, Json(member.clone())).into_response(),
        None => {
            let payload = json!({
                "error": "member not found",
                "member_id": id.0,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
