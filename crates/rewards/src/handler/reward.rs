use crate::{middleware::json::JsonBody, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::reward::service::DynRewardService,
    domain::{
        requests::CalculateRewardsRequest,
        responses::{CustomerRewardResponse, RewardCalculationResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/rewards/calculate",
    tag = "Reward",
    request_body = CalculateRewardsRequest,
    responses(
        (status = 200, description = "Reward points per customer", body = RewardCalculationResponse),
        (status = 400, description = "Invalid transaction data", body = ErrorResponse),
        (status = 404, description = "No transactions supplied", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn calculate_rewards(
    Extension(service): Extension<DynRewardService>,
    JsonBody(body): JsonBody<CalculateRewardsRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.calculate_rewards(&body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/rewards/calculate/{customer_id}",
    tag = "Reward",
    params(("customer_id" = String, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Reward points for the last three months", body = CustomerRewardResponse),
        (status = 400, description = "Blank customer id", body = ErrorResponse),
        (status = 404, description = "No transactions found", body = ErrorResponse),
        (status = 503, description = "Transaction store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_customer_rewards(
    Extension(service): Extension<DynRewardService>,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_monthly_rewards(&customer_id).await?;
    Ok(Json(response))
}

/// `/rewards/calculate/` with no id segment; rejected like a blank id.
pub async fn get_customer_rewards_without_id(
    Extension(service): Extension<DynRewardService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_monthly_rewards("").await?;
    Ok(Json(response))
}

pub fn reward_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/rewards/calculate", post(calculate_rewards))
        .route("/rewards/calculate/", get(get_customer_rewards_without_id))
        .route("/rewards/calculate/{customer_id}", get(get_customer_rewards))
        .layer(Extension(app_state.di_container.reward_service.clone()))
}
