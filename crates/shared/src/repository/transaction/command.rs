use crate::{
    abstract_trait::transaction::repository::command::TransactionCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::CreateTransactionRequest, errors::RepositoryError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct TransactionCommandRepository {
    db: ConnectionPool,
}

impl TransactionCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionCommandRepositoryTrait for TransactionCommandRepository {
    async fn replace_all(&self, req: &[CreateTransactionRequest]) -> Result<u64, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin seed transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        let removed = sqlx::query("DELETE FROM transactions")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Database error while clearing transactions: {e:?}");
                RepositoryError::Sqlx(e)
            })?
            .rows_affected();

        info!("🗑️ Removing {removed} stored transactions");

        let mut inserted = 0;

        for item in req {
            let result = sqlx::query(
                r#"
                INSERT INTO transactions (customer_id, amount_spent, transaction_date)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&item.customer_id)
            .bind(item.amount_spent)
            .bind(item.transaction_date)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    "❌ Database error inserting transaction for {}: {e:?}",
                    item.customer_id
                );
                RepositoryError::Sqlx(e)
            })?;

            inserted += result.rows_affected();
        }

        // dropping `tx` on any early return above rolls the delete back
        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit seed transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(inserted)
    }
}
