use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use phonebook::{SearchCriteria, SearchError, UserRecord};
use serde_json::json;

/// Search the user directory
///
/// `GET /search` with optional query parameters `id`, `name`, `age`, and
/// `occupation`, in any combination. Responds with a JSON array of user
/// objects ordered by match priority; a record matched by several criteria
/// appears once per matched criterion. With no parameters at all the whole
/// directory comes back.
///
/// A query that matches nothing responds with `{"error": "User not found"}`.
/// Existing clients expect that body with a 200 status rather than a 404,
/// so the status is deliberately not elevated here.
pub async fn search_users(
    State(state): State<ServerState>,
    Query(criteria): Query<SearchCriteria>,
) -> ServerResult<Response> {
    match state.directory.search(&criteria) {
        Ok(hits) => {
            let users: Vec<UserRecord> = hits.into_iter().map(|hit| hit.user).collect();
            Ok(Json(users).into_response())
        }
        Err(err @ SearchError::NotFound) => {
            Ok(Json(json!({ "error": err.to_string() })).into_response())
        }
    }
}
