//! Monthly leave accrual calculation.
//!
//! This module computes a full-time employee's monthly and yearly leave
//! entitlement from their tenure and the department's policy tiers. The
//! computation is pure: posting the result to a leave bank is the ledger's
//! job, not this module's.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::LeavePolicyConfig;
use crate::models::Employee;

/// Tier label for employees who do not accrue (PRN or no start date).
pub const TIER_NOT_APPLICABLE: &str = "N/A";
/// Tier label when the recorded start date does not parse.
pub const TIER_INVALID_DATE: &str = "Invalid Date";
/// Tier label when no policy tier qualifies.
pub const TIER_UNKNOWN: &str = "Unknown Tier";

/// The result of a monthly accrual computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAccrual {
    /// Vacation hours accrued this month, rounded to 4 decimal places.
    pub vacation_hours: Decimal,
    /// Personal hours accrued this month, rounded to 4 decimal places.
    pub personal_hours: Decimal,
    /// Sum of this month's vacation and personal hours.
    pub total_monthly: Decimal,
    /// Label of the selected tenure tier (e.g., "5+ Years"), or a sentinel
    /// when the employee does not accrue.
    pub tier_label: String,
    /// Whole years of service as of the reference date.
    pub years_of_service: u32,
    /// Total yearly allowance in hours, unrounded.
    pub yearly_allowance_hours: Decimal,
}

impl MonthlyAccrual {
    fn zero(tier_label: &str) -> Self {
        Self {
            vacation_hours: Decimal::ZERO,
            personal_hours: Decimal::ZERO,
            total_monthly: Decimal::ZERO,
            tier_label: tier_label.to_string(),
            years_of_service: 0,
            yearly_allowance_hours: Decimal::ZERO,
        }
    }
}

/// Computes whole years of service as of `reference_date`.
///
/// The year difference is decremented by one when the reference month/day
/// falls before the start month/day, since the anniversary has not occurred
/// yet this year. Clamped to a minimum of 0.
pub fn years_of_service(start_date: NaiveDate, reference_date: NaiveDate) -> u32 {
    let mut years = reference_date.year() - start_date.year();
    if (reference_date.month(), reference_date.day()) < (start_date.month(), start_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Derives the employee's shift length in hours from their schedule label.
///
/// The label is classified by substring: "10" means a 10-hour shift; "12" or
/// "48" (the 24/48 rotation) means a 12-hour shift. Anything else, including
/// a missing schedule, defaults to a 12-hour shift.
pub fn shift_hours_per_day(employee: &Employee) -> Decimal {
    match employee.schedule_label() {
        Some(label) if label.contains("10") => Decimal::from(10),
        Some(label) if label.contains("12") || label.contains("48") => Decimal::from(12),
        _ => Decimal::from(12),
    }
}

/// Computes an employee's monthly leave accrual as of `reference_date`.
///
/// PRN employees and employees without a recorded full-time start date do
/// not accrue and get an all-zero result labeled "N/A"; an unparseable start
/// date degrades to "Invalid Date" rather than failing. Tier selection picks
/// the policy tier with the greatest `min_years` not exceeding the
/// employee's years of service, regardless of tier order in the policy.
///
/// Monthly hours are one twelfth of the yearly day entitlement times the
/// shift length, rounded to 4 decimal places. The yearly allowance is left
/// unrounded since it is a whole-year total.
pub fn accrue(
    employee: &Employee,
    policy: &LeavePolicyConfig,
    reference_date: NaiveDate,
) -> MonthlyAccrual {
    if !employee.is_full_time() {
        return MonthlyAccrual::zero(TIER_NOT_APPLICABLE);
    }
    let Some(start_raw) = employee.ft_start_date.as_deref() else {
        return MonthlyAccrual::zero(TIER_NOT_APPLICABLE);
    };
    let Ok(start_date) = NaiveDate::parse_from_str(start_raw.trim(), "%Y-%m-%d") else {
        return MonthlyAccrual::zero(TIER_INVALID_DATE);
    };

    let years = years_of_service(start_date, reference_date);
    let shift_hours = shift_hours_per_day(employee);

    let Some(tier) = policy
        .tiers
        .iter()
        .filter(|t| t.min_years <= years)
        .max_by_key(|t| t.min_years)
    else {
        return MonthlyAccrual::zero(TIER_UNKNOWN);
    };

    let twelve = Decimal::from(12);
    let vacation_hours = (tier.vacation_days_per_year * shift_hours / twelve).round_dp(4);
    let personal_hours = (tier.personal_days_per_year * shift_hours / twelve).round_dp(4);
    let yearly_allowance_hours =
        (tier.vacation_days_per_year + tier.personal_days_per_year) * shift_hours;

    MonthlyAccrual {
        vacation_hours,
        personal_hours,
        total_monthly: vacation_hours + personal_hours,
        tier_label: format!("{}+ Years", tier.min_years),
        years_of_service: years,
        yearly_allowance_hours,
    }
}
