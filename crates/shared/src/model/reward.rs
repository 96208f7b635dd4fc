use std::collections::BTreeMap;

/// Points earned by one customer, broken down by `YYYY-MM` month key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardSummary {
    pub customer_id: String,
    pub total_points: i64,
    pub monthly_points: BTreeMap<String, i64>,
}

impl RewardSummary {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            total_points: 0,
            monthly_points: BTreeMap::new(),
        }
    }

    /// Adds `points` to both the running total and the month bucket,
    /// keeping `total_points` equal to the sum of `monthly_points`.
    pub fn record(&mut self, month_key: String, points: i64) {
        self.total_points = self.total_points.saturating_add(points);
        let bucket = self.monthly_points.entry(month_key).or_insert(0);
        *bucket = bucket.saturating_add(points);
    }
}
