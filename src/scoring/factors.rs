//! The seven sub-score functions. Each one is pure, piecewise-linear, and
//! clamped to its own `[0, cap]` band; the caps sum to 100 so the aggregate
//! stays interpretable without any weighting pass.

use chrono::{DateTime, Utc};

const SECS_PER_DAY: i64 = 86_400;

/// Whole days between two instants, floored. Uses the absolute difference so
/// a due date or message timestamp in the future never yields a negative
/// day count.
pub fn days_between(now: DateTime<Utc>, target: DateTime<Utc>) -> u64 {
    let secs = (now - target).num_seconds().abs();
    (secs / SECS_PER_DAY) as u64
}

/// Trustworthiness: decays as the oldest open debt ages past a year,
/// reaching zero at five years. Cap 10.
pub fn debt_day_score(days: u64) -> f64 {
    if days <= 365 {
        10.0
    } else if days <= 1825 {
        10.0 - (days as f64 / 1825.0) * 10.0
    } else {
        0.0
    }
}

/// Buyer interest: full marks if the client wrote within a day, decaying to
/// zero after 90 days of silence. Cap 10.
pub fn message_day_score(days: u64) -> f64 {
    if days <= 1 {
        10.0
    } else if days <= 90 {
        10.0 - (days as f64 / 90.0) * 10.0
    } else {
        0.0
    }
}

/// Buyer interest: eight or more client messages earn full marks. Cap 10.
pub fn message_quantity_score(count: u64) -> f64 {
    if count >= 8 {
        10.0
    } else {
        (count as f64 / 8.0) * 10.0
    }
}

/// Purchasing power: can savings cover the down payment with a 20% cushion.
/// Cap 20.
pub fn upfront_score(savings: f64, upfront: f64, ufvalue: f64) -> f64 {
    let required = 1.2 * upfront * ufvalue;
    if savings >= required {
        20.0
    } else {
        (savings / required) * 20.0
    }
}

/// Trustworthiness: total debt against salary. Untouched up to 2x salary,
/// zero beyond 12x. Cap 10.
pub fn debt_score(salary: f64, total_debt: f64) -> f64 {
    if total_debt <= 2.0 * salary {
        10.0
    } else if total_debt <= 12.0 * salary {
        10.0 - (total_debt / (12.0 * salary)) * 10.0
    } else {
        0.0
    }
}

/// Purchasing power: does 30% of salary cover the credit over 120 monthly
/// installments (a 10-year mortgage). Cap 25.
pub fn salary_120_score(salary: f64, credit: f64) -> f64 {
    let capacity = 120.0 * 0.3 * salary;
    if capacity >= credit {
        25.0
    } else {
        (capacity / credit) * 25.0
    }
}

/// Same affordability check over 240 installments (20 years). Cap 15.
pub fn salary_240_score(salary: f64, credit: f64) -> f64 {
    let capacity = 240.0 * 0.3 * salary;
    if capacity >= credit {
        15.0
    } else {
        (capacity / credit) * 15.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_days_between_floors() {
        let now = Utc::now();
        let target = now - Duration::days(2) - Duration::hours(23);
        assert_eq!(days_between(now, target), 2);
    }

    #[test]
    fn test_days_between_future_target_is_absolute() {
        let now = Utc::now();
        let target = now + Duration::days(3);
        assert_eq!(days_between(now, target), 3);
    }

    #[test]
    fn test_debt_day_score_boundaries() {
        assert_eq!(debt_day_score(0), 10.0);
        assert_eq!(debt_day_score(365), 10.0);
        assert!(debt_day_score(366) < 10.0);
        assert_eq!(debt_day_score(1825), 0.0);
        assert_eq!(debt_day_score(1826), 0.0);
    }

    #[test]
    fn test_debt_day_score_midpoint() {
        // 730 days: 10 - (730/1825)*10 = 6
        assert!((debt_day_score(730) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_message_day_score_boundaries() {
        assert_eq!(message_day_score(0), 10.0);
        assert_eq!(message_day_score(1), 10.0);
        assert!(message_day_score(2) < 10.0);
        assert_eq!(message_day_score(90), 0.0);
        assert_eq!(message_day_score(91), 0.0);
    }

    #[test]
    fn test_message_quantity_score_boundaries() {
        assert_eq!(message_quantity_score(0), 0.0);
        assert_eq!(message_quantity_score(4), 5.0);
        assert_eq!(message_quantity_score(8), 10.0);
        assert_eq!(message_quantity_score(100), 10.0);
    }

    #[test]
    fn test_upfront_score_caps_at_20() {
        // required = 1.2 * 900 * 1000 = 1_080_000
        assert_eq!(upfront_score(1_080_000.0, 900.0, 1_000.0), 20.0);
        assert_eq!(upfront_score(2_000_000.0, 900.0, 1_000.0), 20.0);
        assert_eq!(upfront_score(540_000.0, 900.0, 1_000.0), 10.0);
        assert_eq!(upfront_score(0.0, 900.0, 1_000.0), 0.0);
    }

    #[test]
    fn test_debt_score_boundaries() {
        let salary = 1_000_000.0;
        assert_eq!(debt_score(salary, 0.0), 10.0);
        assert_eq!(debt_score(salary, 2_000_000.0), 10.0);
        // Just past 2x salary the middle branch takes over
        let just_over = debt_score(salary, 2_000_001.0);
        assert!(just_over < 10.0 && just_over > 8.0);
        assert_eq!(debt_score(salary, 12_000_000.0), 0.0);
        assert_eq!(debt_score(salary, 50_000_000.0), 0.0);
    }

    #[test]
    fn test_debt_score_zero_salary_never_divides() {
        // salary 0 and any positive debt falls through to the zero branch
        assert_eq!(debt_score(0.0, 1.0), 0.0);
        assert_eq!(debt_score(0.0, 0.0), 10.0);
    }

    #[test]
    fn test_salary_120_score() {
        // capacity = 120 * 0.3 * 1000 = 36_000
        assert_eq!(salary_120_score(1_000.0, 36_000.0), 25.0);
        assert_eq!(salary_120_score(1_000.0, 72_000.0), 12.5);
    }

    #[test]
    fn test_salary_240_score() {
        // capacity = 240 * 0.3 * 1000 = 72_000
        assert_eq!(salary_240_score(1_000.0, 72_000.0), 15.0);
        assert_eq!(salary_240_score(1_000.0, 144_000.0), 7.5);
    }

    #[test]
    fn test_all_factors_stay_in_band() {
        for days in [0u64, 1, 90, 91, 365, 366, 1000, 1825, 10_000] {
            let d = debt_day_score(days);
            assert!((0.0..=10.0).contains(&d), "debt_day_score({}) = {}", days, d);
            let m = message_day_score(days);
            assert!((0.0..=10.0).contains(&m), "message_day_score({}) = {}", days, m);
        }
        for count in 0u64..20 {
            let q = message_quantity_score(count);
            assert!((0.0..=10.0).contains(&q));
        }
        for savings in [0.0, 1e3, 1e6, 1e9, 1e12] {
            let u = upfront_score(savings, 900.0, 37_000.0);
            assert!((0.0..=20.0).contains(&u));
        }
        for debt in [0.0, 1e5, 1e6, 1e7, 1e8] {
            let d = debt_score(1_000_000.0, debt);
            assert!((0.0..=10.0).contains(&d), "debt_score(_, {}) = {}", debt, d);
        }
        for credit in [1.0, 1e6, 1e9, 1e12] {
            assert!((0.0..=25.0).contains(&salary_120_score(1e6, credit)));
            assert!((0.0..=15.0).contains(&salary_240_score(1e6, credit)));
        }
    }

    #[test]
    fn test_monotonicity_spot_checks() {
        // Older debt never scores higher
        let mut prev = f64::INFINITY;
        for days in [0u64, 100, 365, 400, 800, 1200, 1825, 3000] {
            let s = debt_day_score(days);
            assert!(s <= prev);
            prev = s;
        }
        // More messages never score lower
        let mut prev = -1.0;
        for count in 0u64..12 {
            let s = message_quantity_score(count);
            assert!(s >= prev);
            prev = s;
        }
        // More savings never score lower
        let mut prev = -1.0;
        for savings in [0.0, 1e4, 1e5, 1e6, 1e7, 1e8] {
            let s = upfront_score(savings, 900.0, 37_000.0);
            assert!(s >= prev);
            prev = s;
        }
    }
}
