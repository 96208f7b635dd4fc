//! Pure reward arithmetic: the points formula and the per-customer,
//! per-month aggregation. Nothing here touches I/O.

use crate::{
    domain::requests::TransactionRequest,
    errors::{ServiceError, format_validation_errors},
    model::{reward::RewardSummary, transaction::TransactionModel},
    utils::month_key,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use validator::Validate;

const LOWER_THRESHOLD: i64 = 50;
const UPPER_THRESHOLD: i64 = 100;
const UPPER_RATE: i64 = 2;

/// Points for a single purchase.
///
/// One point per whole dollar between 50 and 100, two points per whole dollar
/// above 100. The amount is truncated toward zero before the bands apply, and
/// both thresholds are exclusive.
pub fn calculate_points(amount_spent: f64) -> Result<i64, ServiceError> {
    if !amount_spent.is_finite() {
        return Err(ServiceError::Validation(format!(
            "Amount spent must be a finite number: {amount_spent}"
        )));
    }

    if amount_spent < 0.0 {
        return Err(ServiceError::Validation(format!(
            "Amount spent cannot be negative: {amount_spent}"
        )));
    }

    let whole = amount_spent.trunc() as i64;

    let above_upper = if amount_spent > UPPER_THRESHOLD as f64 {
        UPPER_RATE.saturating_mul(whole - UPPER_THRESHOLD)
    } else {
        0
    };

    let between = if amount_spent > LOWER_THRESHOLD as f64 {
        whole.min(UPPER_THRESHOLD) - LOWER_THRESHOLD
    } else {
        0
    };

    Ok(above_upper.saturating_add(between))
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Strict `YYYY-MM-DD`: chrono alone also accepts unpadded, padded or
/// sign-prefixed input, so the parsed date must print back as `raw`.
fn parse_transaction_date(raw: &str, customer_id: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == raw)
        .ok_or_else(|| {
            ServiceError::Validation(format!("Invalid date format: {raw} for {customer_id}"))
        })
}

/// Summaries keyed by customer, enumerated in first-seen order.
#[derive(Default)]
struct RewardLedger {
    index: HashMap<String, usize>,
    summaries: Vec<RewardSummary>,
}

impl RewardLedger {
    fn record(&mut self, customer_id: &str, month_key: String, points: i64) {
        let position = match self.index.get(customer_id) {
            Some(position) => *position,
            None => {
                self.summaries.push(RewardSummary::new(customer_id));
                let position = self.summaries.len() - 1;
                self.index.insert(customer_id.to_string(), position);
                position
            }
        };

        self.summaries[position].record(month_key, points);
    }

    fn into_summaries(self) -> Vec<RewardSummary> {
        self.summaries
    }
}

/// Batch mode: one summary per distinct customer id in `transactions`.
///
/// Stops at the first invalid transaction; no partial result is returned.
pub fn aggregate_rewards(
    transactions: Option<&[TransactionRequest]>,
) -> Result<Vec<RewardSummary>, ServiceError> {
    let transactions = match transactions {
        Some(items) if !items.is_empty() => items,
        _ => {
            return Err(ServiceError::NotFound(
                "No transactions found to process rewards.".to_string(),
            ));
        }
    };

    let mut ledger = RewardLedger::default();

    for item in transactions {
        let (customer_id, amount_spent, transaction_date) = required_fields(item)?;

        let points = calculate_points(amount_spent)?;
        let date = parse_transaction_date(transaction_date, customer_id)?;

        ledger.record(customer_id, month_key(date), points);
    }

    Ok(ledger.into_summaries())
}

fn required_fields(item: &TransactionRequest) -> Result<(&str, f64, &str), ServiceError> {
    item.validate().map_err(|e| {
        ServiceError::Validation(format!(
            "Transaction data is missing required fields: {}",
            format_validation_errors(&e)
        ))
    })?;

    match (
        item.customer_id.as_deref(),
        item.amount_spent,
        item.transaction_date.as_deref(),
    ) {
        (Some(customer_id), Some(amount_spent), Some(transaction_date))
            if !customer_id.trim().is_empty() =>
        {
            Ok((customer_id, amount_spent, transaction_date))
        }
        _ => Err(ServiceError::Validation(
            "Transaction data is missing required fields: customer_id: must not be blank"
                .to_string(),
        )),
    }
}

/// Single-customer mode: groups stored rows for `customer_id` by month.
pub fn summarize_customer(
    customer_id: &str,
    transactions: &[TransactionModel],
) -> Result<RewardSummary, ServiceError> {
    if transactions.is_empty() {
        return Err(ServiceError::NotFound("No transactions found".to_string()));
    }

    let mut summary = RewardSummary::new(customer_id);

    for item in transactions {
        let points = calculate_points(item.amount_spent)?;
        summary.record(month_key(item.transaction_date), points);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(summary: &RewardSummary) {
        let monthly: i64 = summary.monthly_points.values().sum();
        assert_eq!(summary.total_points, monthly);
    }

    fn stored(id: i64, amount_spent: f64, date: NaiveDate) -> TransactionModel {
        TransactionModel {
            id,
            customer_id: "C123".to_string(),
            amount_spent,
            transaction_date: date,
        }
    }

    #[test]
    fn points_follow_the_bands() {
        assert_eq!(calculate_points(0.0).unwrap(), 0);
        assert_eq!(calculate_points(40.0).unwrap(), 0);
        assert_eq!(calculate_points(50.0).unwrap(), 0);
        assert_eq!(calculate_points(75.0).unwrap(), 25);
        assert_eq!(calculate_points(100.0).unwrap(), 50);
        assert_eq!(calculate_points(120.0).unwrap(), 90);
        assert_eq!(calculate_points(150.0).unwrap(), 150);
        assert_eq!(calculate_points(400.0).unwrap(), 650);
    }

    #[test]
    fn points_truncate_the_fraction() {
        assert_eq!(calculate_points(120.9).unwrap(), 90);
        assert_eq!(calculate_points(50.5).unwrap(), 0);
        assert_eq!(calculate_points(100.5).unwrap(), 50);
        assert_eq!(calculate_points(99.99).unwrap(), 49);
    }

    #[test]
    fn points_never_decrease_as_amount_grows() {
        let mut previous = 0;
        for cents in (0..=30_000).step_by(7) {
            let points = calculate_points(cents as f64 / 100.0).unwrap();
            assert!(points >= previous, "dropped at {cents} cents");
            previous = points;
        }
    }

    #[test]
    fn negative_and_non_finite_amounts_are_rejected() {
        let err = calculate_points(-10.0).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref msg) if msg.contains("cannot be negative")));

        assert!(matches!(
            calculate_points(f64::NAN),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            calculate_points(f64::INFINITY),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn huge_amounts_saturate() {
        assert_eq!(calculate_points(1e30).unwrap(), i64::MAX);
    }

    #[test]
    fn aggregates_by_customer_and_month() {
        let batch = vec![
            TransactionRequest::new("C001", 150.0, "2025-01-10"),
            TransactionRequest::new("C001", 190.0, "2025-02-15"),
            TransactionRequest::new("C002", 120.0, "2025-05-25"),
            TransactionRequest::new("C002", 400.0, "2025-12-12"),
        ];

        let summaries = aggregate_rewards(Some(batch.as_slice())).unwrap();
        assert_eq!(summaries.len(), 2);

        let c001 = &summaries[0];
        assert_eq!(c001.customer_id, "C001");
        assert_eq!(c001.total_points, 380);
        assert_eq!(
            c001.monthly_points.keys().collect::<Vec<_>>(),
            vec!["2025-01", "2025-02"]
        );

        let c002 = &summaries[1];
        assert_eq!(c002.customer_id, "C002");
        assert_eq!(c002.total_points, 740);

        summaries.iter().for_each(assert_consistent);
    }

    #[test]
    fn output_follows_first_seen_customer_order() {
        let batch = vec![
            TransactionRequest::new("Z9", 60.0, "2025-03-01"),
            TransactionRequest::new("A1", 60.0, "2025-03-02"),
            TransactionRequest::new("Z9", 60.0, "2025-03-03"),
        ];

        let summaries = aggregate_rewards(Some(batch.as_slice())).unwrap();
        let ids: Vec<_> = summaries.iter().map(|s| s.customer_id.as_str()).collect();
        assert_eq!(ids, vec!["Z9", "A1"]);
        assert_eq!(summaries[0].monthly_points["2025-03"], 20);
    }

    #[test]
    fn empty_or_missing_batch_is_not_found() {
        assert!(matches!(
            aggregate_rewards(Some(&[][..])),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            aggregate_rewards(None),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn missing_customer_fails_the_whole_batch() {
        let batch = vec![
            TransactionRequest::new("C001", 120.0, "2025-02-10"),
            TransactionRequest {
                customer_id: None,
                amount_spent: Some(120.0),
                transaction_date: Some("2025-02-10".to_string()),
            },
        ];

        let err = aggregate_rewards(Some(batch.as_slice())).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref msg) if msg.contains("missing required fields")));
    }

    #[test]
    fn blank_customer_and_missing_date_are_rejected() {
        let blank = vec![TransactionRequest::new("   ", 120.0, "2025-02-10")];
        assert!(matches!(
            aggregate_rewards(Some(blank.as_slice())),
            Err(ServiceError::Validation(_))
        ));

        let no_date = vec![TransactionRequest {
            customer_id: Some("C001".to_string()),
            amount_spent: Some(10.0),
            transaction_date: None,
        }];
        assert!(matches!(
            aggregate_rewards(Some(no_date.as_slice())),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let batch = vec![TransactionRequest::new("C001", 120.0, "2025-02-30")];

        let err = aggregate_rewards(Some(batch.as_slice())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format: 2025-02-30 for C001"
        );
    }

    #[test]
    fn loosely_shaped_dates_are_rejected() {
        for raw in ["2025-2-3", " 2025-02-03", "+2025-02-03", "2025-02-03 "] {
            let batch = vec![TransactionRequest::new("C001", 120.0, raw)];

            let err = aggregate_rewards(Some(batch.as_slice())).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid date format: {raw} for C001"));
        }

        let batch = vec![TransactionRequest::new("C001", 120.0, "2025-02-03")];
        assert!(aggregate_rewards(Some(batch.as_slice())).is_ok());
    }

    #[test]
    fn negative_amount_aborts_the_batch() {
        let batch = vec![
            TransactionRequest::new("C001", 120.0, "2025-02-10"),
            TransactionRequest::new("C002", -5.0, "2025-02-11"),
        ];

        assert!(matches!(
            aggregate_rewards(Some(batch.as_slice())),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn summarizes_stored_rows_by_month() {
        let rows = vec![
            stored(1, 120.0, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()),
            stored(2, 75.0, NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()),
            stored(4, 30.0, NaiveDate::from_ymd_opt(2024, 12, 22).unwrap()),
        ];

        let summary = summarize_customer("C123", &rows).unwrap();
        assert_eq!(summary.total_points, 115);
        assert_eq!(summary.monthly_points["2025-01"], 90);
        assert_eq!(summary.monthly_points["2024-12"], 25);
        assert_consistent(&summary);
    }

    #[test]
    fn summarize_requires_rows_and_valid_amounts() {
        assert!(matches!(
            summarize_customer("C123", &[]),
            Err(ServiceError::NotFound(_))
        ));

        let rows = vec![stored(1, -1.0, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap())];
        assert!(matches!(
            summarize_customer("C123", &rows),
            Err(ServiceError::Validation(_))
        ));
    }
}
