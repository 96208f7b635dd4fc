use crate::{
    abstract_trait::{
        reward::service::RewardServiceTrait,
        transaction::repository::query::DynTransactionQueryRepository,
    },
    domain::{
        requests::CalculateRewardsRequest,
        responses::{CustomerRewardResponse, RewardCalculationResponse, RewardSummaryResponse},
    },
    errors::ServiceError,
    service::reward::calculator::{aggregate_rewards, summarize_customer},
    utils::{Method, Metrics, Status},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Months, NaiveDate, Utc};
use std::time::Instant;
use tracing::{error, info, instrument};

/// Length of the single-customer lookback window.
pub const LOOKBACK_MONTHS: u32 = 3;

pub struct RewardService {
    query: DynTransactionQueryRepository,
    metrics: Metrics,
}

impl RewardService {
    pub fn new(query: DynTransactionQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }

    /// Exclusive lower bound for the lookback window ending on `today`.
    pub fn cutoff_date(today: NaiveDate) -> Result<NaiveDate, ServiceError> {
        today
            .checked_sub_months(Months::new(LOOKBACK_MONTHS))
            .ok_or_else(|| {
                ServiceError::Internal(format!("Cannot compute reward window for {today}"))
            })
    }

    /// Single-customer rewards as of `today`.
    pub async fn get_monthly_rewards_as_of(
        &self,
        customer_id: &str,
        today: NaiveDate,
    ) -> Result<CustomerRewardResponse, ServiceError> {
        let customer_id = customer_id.trim();
        if customer_id.is_empty() {
            return Err(ServiceError::Validation(
                "Customer ID cannot be null or empty".to_string(),
            ));
        }

        let cutoff = Self::cutoff_date(today)?;

        info!("🔍 Fetching transactions for customer {customer_id} after {cutoff}");

        let transactions = self
            .query
            .find_by_customer_since(customer_id, cutoff)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch transactions for {customer_id}: {e:?}");
                ServiceError::StoreUnavailable(e.to_string())
            })?;

        info!(
            "✅ Found {} transactions for customer {customer_id}",
            transactions.len()
        );

        let summary = summarize_customer(customer_id, &transactions)?;

        Ok(CustomerRewardResponse {
            reward: RewardSummaryResponse::from(summary),
        })
    }

    fn observe<T>(&self, method: Method, started: Instant, result: &Result<T, ServiceError>) {
        let status = match result {
            Ok(_) => Status::Success,
            Err(_) => Status::Error,
        };
        self.metrics
            .record(method, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl RewardServiceTrait for RewardService {
    #[instrument(skip(self, req), level = "info")]
    async fn calculate_rewards(
        &self,
        req: &CalculateRewardsRequest,
    ) -> Result<RewardCalculationResponse, ServiceError> {
        let started = Instant::now();
        let count = req.transactions.as_ref().map_or(0, Vec::len);

        info!("🧮 Calculating rewards for {count} transactions");

        let result = aggregate_rewards(req.transactions.as_deref())
            .map(|summaries| RewardCalculationResponse {
                rewards: summaries
                    .into_iter()
                    .map(RewardSummaryResponse::from)
                    .collect(),
            })
            .inspect_err(|e| error!("❌ Failed to calculate rewards: {e}"));

        if let Ok(response) = &result {
            info!("✅ Calculated rewards for {} customers", response.rewards.len());
        }

        self.observe(Method::Calculate, started, &result);
        result
    }

    #[instrument(skip(self), level = "info")]
    async fn get_monthly_rewards(
        &self,
        customer_id: &str,
    ) -> Result<CustomerRewardResponse, ServiceError> {
        let started = Instant::now();
        let today = Utc::now().date_naive();

        let result = self.get_monthly_rewards_as_of(customer_id, today).await;

        self.observe(Method::Customer, started, &result);
        result
    }
}
