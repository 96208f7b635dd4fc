use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

pub const REWARD_PROCESSING_ERROR: &str = "Reward Processing Error";
pub const TRANSACTION_NOT_FOUND: &str = "Transaction Not Found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl AppErrorHttp {
    pub fn status_and_category(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, REWARD_PROCESSING_ERROR),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, TRANSACTION_NOT_FOUND),
            ServiceError::StoreUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, REWARD_PROCESSING_ERROR)
            }
            ServiceError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, category) = self.status_and_category();

        let message = match self.0 {
            ServiceError::Validation(msg) => {
                warn!("📝 Validation failed: {msg}");
                msg
            }
            ServiceError::NotFound(msg) => {
                info!("🔍 Not found: {msg}");
                msg
            }
            ServiceError::StoreUnavailable(msg) => {
                error!("💾 Transaction store unavailable: {msg}");
                format!("Transaction store unavailable: {msg}")
            }
            ServiceError::Internal(msg) => {
                error!("🔥 Internal server error: {msg}");
                msg
            }
        };

        let body = Json(ErrorResponse {
            error: category.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(error: ServiceError) -> Self {
        AppErrorHttp(error)
    }
}
