use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use heart_score::heart::heart_router;
use heart_score::pwa::detect_platform;
use serde::Deserialize;
use serde_json::json;

pub(crate) fn app_router(state: AppState) -> axum::Router {
    heart_router()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/pwa/install-hint",
            axum::routing::get(install_hint_endpoint),
        )
        .route(
            "/api/v1/pwa/install-hint/dismiss",
            axum::routing::post(dismiss_hint_endpoint),
        )
        .fallback(asset_endpoint)
        .layer(Extension(state))
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

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InstallHintQuery {
    /// Whether the client is already running in an installed,
    /// standalone display mode.
    #[serde(default)]
    pub(crate) standalone: bool,
}

pub(crate) async fn install_hint_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<InstallHintQuery>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let user_agent = header_str(&headers, header::USER_AGENT);
    let platform = header_str(&headers, header::HeaderName::from_static("sec-ch-ua-platform"));

    let family = detect_platform(user_agent, platform);
    let show = state.install_hint.should_show(family, query.standalone);

    Json(json!({
        "platform": family,
        "platform_label": family.label(),
        "show": show,
    }))
}

pub(crate) async fn dismiss_hint_endpoint(
    Extension(state): Extension<AppState>,
) -> impl IntoResponse {
    match state.install_hint.dismiss() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

/// Cache-first static shell. Unknown paths fall back to the cached
/// root document so deep links keep working offline.
pub(crate) async fn asset_endpoint(
    Extension(state): Extension<AppState>,
    uri: Uri,
) -> impl IntoResponse {
    match state.assets.fetch(uri.path()) {
        Some(asset) => {
            // Extension-less paths ("/" and deep links served via the
            // root-document fallback) are the HTML shell.
            let content_type = mime_guess::from_path(&asset.path)
                .first_or(mime_guess::mime::TEXT_HTML_UTF_8)
                .to_string();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                asset.body,
            )
                .into_response()
        }
        None => {
            let payload = json!({ "error": format!("asset {} not found", uri.path()) });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> &str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
