use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::{NewProject, ProjectId, ProjectView};
use super::repository::{ProjectRepository, RepositoryError};
use super::service::{ProjectService, ProjectServiceError};

/// Router exposing project intake and score lookups.
pub fn project_router<R>(service: Arc<ProjectService<R>>) -> Router
where
    R: ProjectRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/projects",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/v1/projects/:project_id", get(project_handler::<R>))
        .route(
            "/api/v1/projects/:project_id/scores",
            get(scores_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ProjectService<R>>>,
    axum::Json(submission): axum::Json<NewProject>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    match service.create(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ProjectService<R>>>) -> Response
where
    R: ProjectRepository + 'static,
{
    match service.list() {
        Ok(records) => {
            let views: Vec<ProjectView> = records.iter().map(|record| record.view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn project_handler<R>(
    State(service): State<Arc<ProjectService<R>>>,
    Path(project_id): Path<i64>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    match service.get(ProjectId(project_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn scores_handler<R>(
    State(service): State<Arc<ProjectService<R>>>,
    Path(project_id): Path<i64>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    match service.scores(ProjectId(project_id)) {
        Ok(scores) => (StatusCode::OK, axum::Json(scores)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ProjectServiceError) -> Response {
    let status = match &error {
        ProjectServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ProjectServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ProjectServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ProjectServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
