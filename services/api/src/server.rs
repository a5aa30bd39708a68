use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryTravelStore};
use crate::routes::with_catalog_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use stayhub::catalog::TravelCatalogService;
use stayhub::config::AppConfig;
use stayhub::error::AppError;
use stayhub::telemetry;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = InMemoryTravelStore::default();
    let catalog_service = Arc::new(TravelCatalogService::new(
        Arc::new(store.clone()),
        Arc::new(store),
    ));

    let app = with_catalog_routes(catalog_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "travel catalog service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
