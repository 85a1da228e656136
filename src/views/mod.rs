pub mod pages;
pub mod submissions;

use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::state::SharedState;

/// The routing table: declared once, each form page bound to the
/// discriminator it submits under.
pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/submit-project-details", get(pages::project_form))
        .route("/submit-gsoc-details", get(pages::gsoc_form))
        .route("/submit-competition-details", get(pages::competition_form))
        .route("/submissions", get(submissions::page))
}

/// Any path not claimed by the API, a view, or a static asset gets the entry
/// document so navigation never dead-ends in a 404. API-prefixed paths are
/// the one exception.
pub async fn spa_fallback(uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return AppError::NotFound("No such API route".to_string()).into_response();
    }

    match pages::home().await {
        Ok(html) => html.into_response(),
        Err(err) => err.into_response(),
    }
}
