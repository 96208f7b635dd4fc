use crate::model::reward::RewardSummary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummaryResponse {
    pub customer_id: String,
    pub total_points: i64,
    #[schema(example = json!({"2025-01": 150, "2025-02": 230}))]
    pub monthly_points: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RewardCalculationResponse {
    pub rewards: Vec<RewardSummaryResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerRewardResponse {
    pub reward: RewardSummaryResponse,
}

impl From<RewardSummary> for RewardSummaryResponse {
    fn from(value: RewardSummary) -> Self {
        RewardSummaryResponse {
            customer_id: value.customer_id,
            total_points: value.total_points,
            monthly_points: value.monthly_points,
        }
    }
}
