use crate::cli::ServeArgs;
use crate::infra::{AppState, FileDismissalStore, FilesystemAssetFetcher};
use crate::routes::app_router;
use axum_prometheus::PrometheusMetricLayer;
use heart_score::config::AppConfig;
use heart_score::error::AppError;
use heart_score::pwa::{InstallHint, OfflineAssetCache};
use heart_score::telemetry;
use std::sync::atomic::Ordering;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));

    let fetcher = FilesystemAssetFetcher::new(config.cache.asset_dir.clone());
    let mut assets = OfflineAssetCache::new(config.cache.version, fetcher);
    match assets.install() {
        Ok(()) => info!(cache = assets.current_cache(), "app shell precached"),
        // Requests still reach the filesystem directly; only the
        // offline fallback is degraded.
        Err(err) => warn!(%err, "app shell precache incomplete"),
    }
    assets.activate();

    let install_hint = InstallHint::new(FileDismissalStore::new(&config.cache.asset_dir));

    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        assets: Arc::new(assets),
        install_hint: Arc::new(install_hint),
    };

    let app = app_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "heart score calculator ready");

    axum::serve(listener, app).await?;
    Ok(())
}
