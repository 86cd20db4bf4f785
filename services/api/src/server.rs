use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryProjectRepository};
use crate::routes::with_project_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use feasibility::config::AppConfig;
use feasibility::error::AppError;
use feasibility::projects::ProjectService;
use feasibility::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryProjectRepository::default());
    let project_service = Arc::new(ProjectService::new(repository));
    if config.projects.seed_samples {
        let seeded = project_service.seed_samples()?;
        info!(count = seeded.len(), "seeded sample projects");
    }

    let app = with_project_routes(project_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "feasibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
