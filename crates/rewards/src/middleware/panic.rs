use axum::response::{IntoResponse, Response};
use shared::errors::{AppErrorHttp, ServiceError};
use std::any::Any;
use tracing::error;

/// Renders a handler panic as the generic 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    error!("💥 Handler panicked: {detail}");

    AppErrorHttp(ServiceError::Internal("Internal Server Error".to_string())).into_response()
}
