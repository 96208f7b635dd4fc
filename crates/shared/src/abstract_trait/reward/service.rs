use crate::{
    domain::{
        requests::CalculateRewardsRequest,
        responses::{CustomerRewardResponse, RewardCalculationResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRewardService = Arc<dyn RewardServiceTrait + Send + Sync>;

#[async_trait]
pub trait RewardServiceTrait {
    /// Batch mode: groups the inline transactions by customer and month.
    async fn calculate_rewards(
        &self,
        req: &CalculateRewardsRequest,
    ) -> Result<RewardCalculationResponse, ServiceError>;

    /// Single-customer mode: reads the trailing three months from the store.
    async fn get_monthly_rewards(
        &self,
        customer_id: &str,
    ) -> Result<CustomerRewardResponse, ServiceError>;
}
