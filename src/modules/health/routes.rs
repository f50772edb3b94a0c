use crate::{types::Context, utils::response::ApiResponse};
use axum::{extract::State, routing::get, Router};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

async fn root(State(ctx): State<Arc<Context>>) -> ApiResponse<Value> {
    tracing::info!("Serving root endpoint");

    ApiResponse::success_with_message(
        json!({
            "app": ctx.app.name,
            "version": VERSION,
            "status": "running",
        }),
        "Food items service is running",
    )
}

async fn health() -> ApiResponse<Value> {
    tracing::info!("Serving health check");

    ApiResponse::success_with_message(
        json!({
            "status": "UP",
            "timestamp": timestamp(),
        }),
        "Service healthy",
    )
}

async fn api_health() -> ApiResponse<Value> {
    tracing::info!("Serving API health check");

    ApiResponse::success_with_message(
        json!({
            "status": "UP",
            "timestamp": timestamp(),
            "api_version": VERSION,
        }),
        "API service healthy",
    )
}

/// Routes served at the root of the application.
pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Routes nested under `/api`.
pub fn get_api_router() -> Router<Arc<Context>> {
    Router::new().route("/health", get(api_health))
}
