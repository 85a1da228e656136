use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;

use crate::db;
use crate::error::AppError;
use crate::models::Submission;
use crate::routes::submissions::ListParams;
use crate::state::SharedState;

struct SubmissionRow {
    kind: String,
    created_at: String,
    cells: Vec<String>,
}

#[derive(Template)]
#[template(path = "submissions.html")]
struct SubmissionsTemplate {
    rows: Vec<SubmissionRow>,
    field_names: Vec<String>,
    kind_filter: String,
    total: usize,
}

pub async fn page(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, AppError> {
    let submissions = db::submissions::list(&state.pool, params.kind.as_deref()).await?;

    let field_names = collect_field_names(&submissions);
    let rows = submissions
        .iter()
        .map(|sub| SubmissionRow {
            kind: sub.kind.clone(),
            created_at: sub.created_at.to_rfc3339(),
            cells: field_names
                .iter()
                .map(|key| {
                    sub.data
                        .get(key)
                        .map(|v| match v {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .unwrap_or_default()
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    let page = SubmissionsTemplate {
        total: rows.len(),
        rows,
        field_names,
        kind_filter: params.kind.unwrap_or_default(),
    }
    .render()?;

    Ok(Html(page))
}

/// Union of payload field names across submissions, in first-seen order.
/// Payloads have no fixed schema, so the column set is derived per request.
fn collect_field_names(submissions: &[Submission]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for sub in submissions {
        if let Some(obj) = sub.data.as_object() {
            for key in obj.keys() {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
        }
    }
    keys
}
