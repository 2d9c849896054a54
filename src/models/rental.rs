//! Rental model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Rental row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rental {
    pub rental_id: i32,
    pub customer_id: i32,
    pub copy_id: i32,
    pub rent_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub penalty: Option<Decimal>,
}

/// Rental with book and customer details for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RentalDetails {
    pub rental_id: i32,
    pub customer_id: i32,
    pub copy_id: i32,
    pub rent_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub penalty: Option<Decimal>,
    pub book_title: String,
    pub isbn: String,
    pub customer_name: String,
}

/// Create rental request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRental {
    pub customer_id: i32,
    pub isbn: String,
}

/// Overdue penalty for a rental returned at `return_date`.
///
/// The rental duration is counted in whole days, any started day
/// counting as a full one. Days beyond the grace period are charged at
/// `daily_penalty_rate` each; within the grace period the penalty is
/// zero.
pub fn compute_penalty(
    rent_date: DateTime<Utc>,
    return_date: DateTime<Utc>,
    grace_period_days: i64,
    daily_penalty_rate: Decimal,
) -> Decimal {
    const SECS_PER_DAY: i64 = 86_400;

    let rented_secs = (return_date - rent_date).num_seconds().max(0);
    let rented_days = (rented_secs + SECS_PER_DAY - 1) / SECS_PER_DAY;
    let days_late = rented_days - grace_period_days;

    if days_late <= 0 {
        Decimal::ZERO
    } else {
        (daily_penalty_rate * Decimal::from(days_late)).round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn day_zero() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn no_penalty_within_grace_period() {
        let rent = day_zero();
        for days in [0, 1, 7, 14] {
            let penalty = compute_penalty(rent, rent + Duration::days(days), 14, dec("0.50"));
            assert_eq!(penalty, Decimal::ZERO, "day {}", days);
        }
    }

    #[test]
    fn six_days_late_at_fifty_cents() {
        let rent = day_zero();
        let penalty = compute_penalty(rent, rent + Duration::days(20), 14, dec("0.50"));
        assert_eq!(penalty, dec("3.00"));
    }

    #[test]
    fn penalty_strictly_increases_per_late_day() {
        let rent = day_zero();
        let mut previous = Decimal::ZERO;
        for days in 15..25 {
            let penalty = compute_penalty(rent, rent + Duration::days(days), 14, dec("0.50"));
            assert!(penalty > previous, "day {}", days);
            previous = penalty;
        }
    }

    #[test]
    fn started_day_counts_as_full_day() {
        let rent = day_zero();
        let returned = rent + Duration::days(14) + Duration::seconds(1);
        let penalty = compute_penalty(rent, returned, 14, dec("0.50"));
        assert_eq!(penalty, dec("0.50"));
    }

    #[test]
    fn negative_duration_is_treated_as_zero() {
        let rent = day_zero();
        let penalty = compute_penalty(rent, rent - Duration::days(1), 14, dec("0.50"));
        assert_eq!(penalty, Decimal::ZERO);
    }
}
