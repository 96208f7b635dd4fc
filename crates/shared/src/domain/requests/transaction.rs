use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored purchase as read from a seed file.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[validate(length(min = 1, message = "customerId must not be empty"))]
    pub customer_id: String,

    #[validate(range(min = 0.0, message = "amountSpent must not be negative"))]
    pub amount_spent: f64,

    pub transaction_date: NaiveDate,
}
