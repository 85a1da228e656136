use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

pub async fn list(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = db::submissions::list(&state.pool, params.kind.as_deref()).await?;
    Ok(Json(submissions))
}
