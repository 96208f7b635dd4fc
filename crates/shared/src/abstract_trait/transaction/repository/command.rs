use crate::{domain::requests::CreateTransactionRequest, errors::RepositoryError};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionCommandRepository =
    Arc<dyn TransactionCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandRepositoryTrait {
    /// Swaps every stored row for `req` atomically; on failure the old rows remain.
    async fn replace_all(&self, req: &[CreateTransactionRequest]) -> Result<u64, RepositoryError>;
}
