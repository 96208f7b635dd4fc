use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CalculateRewardsRequest {
    #[serde(default)]
    pub transactions: Option<Vec<TransactionRequest>>,
}

/// One inline purchase as submitted by the caller.
///
/// Every field is optional on the wire so that a missing value surfaces as a
/// reward processing error instead of a body rejection.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[validate(required)]
    #[schema(example = "C001")]
    pub customer_id: Option<String>,

    #[validate(required)]
    #[schema(example = 120.0)]
    pub amount_spent: Option<f64>,

    #[validate(required)]
    #[schema(example = "2025-01-10")]
    pub transaction_date: Option<String>,
}

impl TransactionRequest {
    pub fn new(
        customer_id: impl Into<String>,
        amount_spent: f64,
        transaction_date: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            amount_spent: Some(amount_spent),
            transaction_date: Some(transaction_date.into()),
        }
    }
}
