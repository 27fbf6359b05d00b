use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use mindmetrics::assessments::attempts::AssessmentService;
use mindmetrics::config::{AppConfig, StorageConfig};
use mindmetrics::error::AppError;
use mindmetrics::telemetry;

use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryAccountGateway, InMemoryAssessmentRepository, JsonFileAssessmentRepository,
    SelectedRepository,
};
use crate::routes::with_assessment_routes;

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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = match &config.storage {
        StorageConfig::Memory => {
            SelectedRepository::Memory(InMemoryAssessmentRepository::default())
        }
        StorageConfig::File(path) => SelectedRepository::File(
            JsonFileAssessmentRepository::open(path)
                .map_err(|err| std::io::Error::other(err.to_string()))?,
        ),
    };

    let accounts = InMemoryAccountGateway::default();
    if let Some(pairs) = &config.api_tokens {
        accounts.seed_from_env_value(pairs);
    }

    let assessment_service = Arc::new(AssessmentService::new(
        Arc::new(repository),
        Arc::new(accounts),
    ));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "assessment platform ready");

    axum::serve(listener, app).await?;
    Ok(())
}
