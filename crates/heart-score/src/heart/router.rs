use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use super::domain::RawInputs;
use super::views::assess;

/// Router builder exposing the scoring pipeline over HTTP.
pub fn heart_router() -> Router {
    Router::new().route("/api/v1/heart/score", post(score_handler))
}

pub(crate) async fn score_handler(Json(raw): Json<RawInputs>) -> Response {
    match assess(&raw) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response(),
    }
}
