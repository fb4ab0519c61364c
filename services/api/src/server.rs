use crate::cli::ServeArgs;
use crate::infra::{load_directory, AppState};
use crate::routes::service_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use behavior_lab::config::AppConfig;
use behavior_lab::error::AppError;
use behavior_lab::telemetry;
use behavior_lab::workflows::advisor::HttpCompletionUpstream;
use behavior_lab::workflows::diagnostic::QuestionBank;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = Arc::new(load_directory(&config.directory)?);
    let bank = Arc::new(QuestionBank::standard());

    if config.advisor.api_url.is_none() || config.advisor.api_key.is_none() {
        warn!("advisor proxy is not configured; /api/openai will answer with 500");
    }
    let upstream = Arc::new(HttpCompletionUpstream::new(config.advisor.clone())?);

    let app = service_router(bank, directory.clone(), upstream)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        members = directory.members().len(),
        "behavior lab service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
