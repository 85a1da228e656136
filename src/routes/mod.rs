pub mod ingest;
pub mod submissions;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/submit/{type}", post(ingest::submit))
        .route("/api/submissions", get(submissions::list))
}
