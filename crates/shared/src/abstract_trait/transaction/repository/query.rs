use crate::{errors::RepositoryError, model::transaction::TransactionModel};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    /// Rows for `customer_id` dated strictly after `since`.
    async fn find_by_customer_since(
        &self,
        customer_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;
}
