use crate::{
    abstract_trait::transaction::repository::query::TransactionQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::error;

pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_by_customer_since(
        &self,
        customer_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                id,
                customer_id,
                amount_spent,
                transaction_date
            FROM
                transactions
            WHERE
                customer_id = $1
                AND transaction_date > $2
            ORDER BY
                transaction_date, id
        "#;

        sqlx::query_as::<_, TransactionModel>(sql)
            .bind(customer_id)
            .bind(since)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_by_customer_since: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }
}
