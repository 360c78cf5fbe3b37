use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::dto::telegram_dto::Update;
use crate::services::{dispatcher::dispatch, webhook_secret::WebhookSecret};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/telegram/webhook", post(telegram_webhook))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/**
 * GET liveness check.
 */
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/**
 * POST an update pushed by Telegram. Acknowledged immediately; handled on
 * its own task.
 */
pub async fn telegram_webhook(
    Extension(state): Extension<AppState>,
    _secret: WebhookSecret,
    Json(update): Json<Update>,
) -> impl IntoResponse {
    info!("Received update {}.", update.update_id);
    tokio::spawn(async move {
        dispatch(&state, update).await;
    });
    StatusCode::OK
}
