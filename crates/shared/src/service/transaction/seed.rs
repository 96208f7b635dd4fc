use crate::{
    abstract_trait::transaction::{
        repository::command::DynTransactionCommandRepository,
        service::seed::TransactionSeedServiceTrait,
    },
    domain::requests::CreateTransactionRequest,
    errors::{ServiceError, format_validation_errors},
};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use tracing::{error, info, instrument};
use validator::Validate;

pub struct TransactionSeedService {
    command: DynTransactionCommandRepository,
}

impl TransactionSeedService {
    pub fn new(command: DynTransactionCommandRepository) -> Self {
        Self { command }
    }

    /// Parses and validates a JSON array of transactions.
    pub fn parse_seed(content: &str) -> Result<Vec<CreateTransactionRequest>, ServiceError> {
        let records: Vec<CreateTransactionRequest> = serde_json::from_str(content)
            .map_err(|e| ServiceError::Validation(format!("Invalid seed data: {e}")))?;

        for (position, record) in records.iter().enumerate() {
            record.validate().map_err(|e| {
                ServiceError::Validation(format!(
                    "Invalid seed record #{position}: {}",
                    format_validation_errors(&e)
                ))
            })?;
        }

        Ok(records)
    }

    pub async fn replace_all(
        &self,
        records: &[CreateTransactionRequest],
    ) -> Result<u64, ServiceError> {
        let inserted = self.command.replace_all(records).await.map_err(|e| {
            error!("❌ Failed to replace stored transactions: {e:?}");
            ServiceError::StoreUnavailable(e.to_string())
        })?;

        info!("🌱 Loaded {inserted} seed transactions");

        Ok(inserted)
    }
}

#[async_trait]
impl TransactionSeedServiceTrait for TransactionSeedService {
    #[instrument(skip(self), level = "info")]
    async fn seed_from_file(&self, path: &Path) -> Result<u64, ServiceError> {
        info!("📂 Loading seed transactions from {}", path.display());

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("❌ Failed to read seed file {}: {e}", path.display());
            ServiceError::Internal(format!("Cannot read seed file {}: {e}", path.display()))
        })?;

        let records = Self::parse_seed(&content)?;

        self.replace_all(&records).await
    }
}
