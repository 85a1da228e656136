use std::sync::OnceLock;

use askama::Template;
use axum::response::Html;

use crate::error::AppError;

pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate;

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate;

#[derive(Template)]
#[template(path = "form.html")]
struct FormTemplate {
    title: &'static str,
    kind: &'static str,
    fields: &'static [FormField],
}

/// Render on first visit, serve the cached page afterwards. The factory runs
/// at most once per process; a lost race just discards a duplicate render.
fn render_cached(
    cell: &'static OnceLock<String>,
    render: impl FnOnce() -> askama::Result<String>,
) -> Result<Html<String>, AppError> {
    if let Some(page) = cell.get() {
        return Ok(Html(page.clone()));
    }
    let page = render()?;
    Ok(Html(cell.get_or_init(|| page).clone()))
}

static HOME: OnceLock<String> = OnceLock::new();
static ABOUT: OnceLock<String> = OnceLock::new();
static PROJECT: OnceLock<String> = OnceLock::new();
static GSOC: OnceLock<String> = OnceLock::new();
static COMPETITION: OnceLock<String> = OnceLock::new();

pub async fn home() -> Result<Html<String>, AppError> {
    render_cached(&HOME, || HomeTemplate.render())
}

pub async fn about() -> Result<Html<String>, AppError> {
    render_cached(&ABOUT, || AboutTemplate.render())
}

pub async fn project_form() -> Result<Html<String>, AppError> {
    render_cached(&PROJECT, || {
        FormTemplate {
            title: "Submit Project Details",
            kind: "project",
            fields: &[
                FormField { name: "name", label: "Project name", input: "text" },
                FormField { name: "description", label: "Description", input: "textarea" },
                FormField { name: "repoUrl", label: "Repository URL", input: "url" },
            ],
        }
        .render()
    })
}

pub async fn gsoc_form() -> Result<Html<String>, AppError> {
    render_cached(&GSOC, || {
        FormTemplate {
            title: "Submit Google Summer of Code Details",
            kind: "gsoc",
            fields: &[
                FormField { name: "name", label: "Full name", input: "text" },
                FormField { name: "email", label: "Email", input: "email" },
                FormField { name: "organization", label: "Organization", input: "text" },
                FormField { name: "proposalUrl", label: "Proposal URL", input: "url" },
            ],
        }
        .render()
    })
}

pub async fn competition_form() -> Result<Html<String>, AppError> {
    render_cached(&COMPETITION, || {
        FormTemplate {
            title: "Submit Competition Details",
            kind: "competition",
            fields: &[
                FormField { name: "teamName", label: "Team name", input: "text" },
                FormField { name: "competition", label: "Competition", input: "text" },
                FormField { name: "members", label: "Team members", input: "textarea" },
                FormField { name: "resultsUrl", label: "Results URL", input: "url" },
            ],
        }
        .render()
    })
}
