use crate::state::AppState;
use axum::{
    extract::Extension,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::{encoding::text::encode, registry::Registry};
use shared::errors::{AppErrorHttp, ServiceError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

const OPENMETRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Metrics",
    responses((status = 200, description = "Prometheus metrics", body = String))
)]
pub async fn get_metrics(
    Extension(registry): Extension<Arc<Registry>>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let mut body = String::new();

    encode(&mut body, &registry).map_err(|e| {
        AppErrorHttp(ServiceError::Internal(format!("Failed to encode metrics: {e}")))
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)],
        body,
    ))
}

pub fn metrics_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/metrics", get(get_metrics))
        .layer(Extension(app_state.registry.clone()))
}
