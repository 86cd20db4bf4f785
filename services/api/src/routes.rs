use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use feasibility::projects::{project_router, ProjectRepository, ProjectService};
use feasibility::scoring::{compute_scores, ScoreSet, ScoreSource};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) project_id: i64,
    pub(crate) project_name: String,
    #[serde(default)]
    pub(crate) stored_overall_score: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) project_id: i64,
    pub(crate) source: ScoreSource,
    #[serde(flatten)]
    pub(crate) scores: ScoreSet,
}

pub(crate) fn with_project_routes<R>(service: Arc<ProjectService<R>>) -> axum::Router
where
    R: ProjectRepository + 'static,
{
    project_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/scores", axum::routing::post(scores_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Scores an arbitrary id/name pair without touching the project store.
pub(crate) async fn scores_endpoint(Json(payload): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let ScoreRequest {
        project_id,
        project_name,
        stored_overall_score,
    } = payload;

    let scores = compute_scores(project_id, &project_name, stored_overall_score.as_deref());
    debug!(project_id, overall = %scores.overall, "computed ad-hoc scores");

    Json(ScoreResponse {
        project_id,
        source: ScoreSource::for_project_name(&project_name),
        scores,
    })
}
