use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::db;
use crate::state::SharedState;

/// Accept a submission for any discriminator. The path segment becomes the
/// stored `type` verbatim; there is no whitelist, so new form types need no
/// server change. The body must be a JSON object or array; an empty body is
/// stored as `{}`.
pub async fn submit(
    State(state): State<SharedState>,
    Path(kind): Path<String>,
    body: Bytes,
) -> Response {
    let data = if body.is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) if value.is_object() || value.is_array() => value,
            Ok(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Expected a JSON object or array" })),
                )
                    .into_response();
            }
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid JSON body" })),
                )
                    .into_response();
            }
        }
    };

    match db::submissions::create(&state.pool, &kind, &data).await {
        Ok(submission) => (
            StatusCode::CREATED,
            Json(json!({ "success": true, "id": submission.id })),
        )
            .into_response(),
        Err(err) => {
            // Storage details stay in the log, not the response
            tracing::error!("Failed to save submission: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed to save submission" })),
            )
                .into_response()
        }
    }
}
