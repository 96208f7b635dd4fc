use crate::errors::ServiceError;
use anyhow::Result;
use async_trait::async_trait;
use std::{path::Path, sync::Arc};

pub type DynTransactionSeedService = Arc<dyn TransactionSeedServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionSeedServiceTrait {
    /// Replaces the stored transactions with the records in `path`.
    async fn seed_from_file(&self, path: &Path) -> Result<u64, ServiceError>;
}
