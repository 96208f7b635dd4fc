use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    pub customer_id: String,
    pub amount_spent: f64,
    pub transaction_date: NaiveDate,
}
