//! Monthly accrual posting and the department-wide batch run.
//!
//! Posting bridges the pure accrual calculator and the leave ledger: it
//! guards against double-posting within a month, appends the Accrual
//! transaction, and stamps the bank's last accrual date.

use chrono::NaiveDate;

use crate::config::LeavePolicyConfig;
use crate::models::{Employee, LeaveBank, TransactionKind};

use super::accrual::{self, MonthlyAccrual};
use super::ledger;

/// The outcome of a monthly accrual posting attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AccrualPosting {
    /// The accrual was posted; the caller persists the returned bank.
    Posted {
        /// The updated leave bank.
        bank: LeaveBank,
        /// The accrual that was posted.
        accrual: MonthlyAccrual,
    },
    /// An accrual was already posted for this month key; nothing changed.
    AlreadyPosted,
    /// The employee does not accrue (PRN, missing or invalid start date,
    /// or no qualifying tier); nothing changed.
    NotEligible {
        /// The sentinel tier label explaining why.
        reason: String,
    },
}

/// Aggregate counts from a department-wide accrual run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccrualRunSummary {
    /// Employees whose banks received an accrual posting.
    pub processed: usize,
    /// Employees already posted for this month key.
    pub already_posted: usize,
    /// Employees skipped because their PTO status is frozen.
    pub skipped_frozen: usize,
    /// Employees skipped as non-full-time or otherwise ineligible.
    pub skipped_ineligible: usize,
}

/// Posts one employee's monthly accrual, guarded by the month key.
///
/// The guard compares the bank's `last_accrual_date` against `month_key`
/// (a `"YYYY-MM"` string): when the last posting falls inside that month the
/// call reports [`AccrualPosting::AlreadyPosted`] without touching balances
/// or history, making the operation idempotent per month. An employee with
/// no bank yet gets one opened with this first posting.
pub fn post_monthly_accrual(
    employee: &Employee,
    policy: &LeavePolicyConfig,
    month_key: &str,
    posted_on: NaiveDate,
) -> AccrualPosting {
    let bank = employee.leave_bank.clone().unwrap_or_default();

    if let Some(last) = bank.last_accrual_date {
        if last.format("%Y-%m-%d").to_string().starts_with(month_key) {
            return AccrualPosting::AlreadyPosted;
        }
    }

    let accrual = accrual::accrue(employee, policy, posted_on);
    if accrual.tier_label == accrual::TIER_NOT_APPLICABLE
        || accrual.tier_label == accrual::TIER_INVALID_DATE
        || accrual.tier_label == accrual::TIER_UNKNOWN
    {
        return AccrualPosting::NotEligible {
            reason: accrual.tier_label,
        };
    }

    let mut updated = ledger::post(
        &bank,
        posted_on,
        TransactionKind::Accrual,
        accrual.vacation_hours,
        accrual.personal_hours,
        format!("Monthly accrual ({})", accrual.tier_label),
    );
    updated.last_accrual_date = Some(posted_on);

    AccrualPosting::Posted {
        bank: updated,
        accrual,
    }
}

/// Runs the monthly accrual across a department roster.
///
/// Frozen and non-full-time employees are skipped entirely: no transaction,
/// no date update. All postings are computed from the single `policy` and
/// `month_key` snapshot passed in. Returns the updated roster alongside the
/// aggregate counts; the input slice is never mutated.
pub fn run_monthly_accrual(
    employees: &[Employee],
    policy: &LeavePolicyConfig,
    month_key: &str,
    posted_on: NaiveDate,
) -> (Vec<Employee>, AccrualRunSummary) {
    let mut summary = AccrualRunSummary::default();
    let mut updated_roster = Vec::with_capacity(employees.len());

    for employee in employees {
        if employee.is_pto_frozen() {
            summary.skipped_frozen += 1;
            updated_roster.push(employee.clone());
            continue;
        }
        if !employee.is_full_time() {
            summary.skipped_ineligible += 1;
            updated_roster.push(employee.clone());
            continue;
        }

        match post_monthly_accrual(employee, policy, month_key, posted_on) {
            AccrualPosting::Posted { bank, .. } => {
                summary.processed += 1;
                let mut updated = employee.clone();
                updated.leave_bank = Some(bank);
                updated_roster.push(updated);
            }
            AccrualPosting::AlreadyPosted => {
                summary.already_posted += 1;
                updated_roster.push(employee.clone());
            }
            AccrualPosting::NotEligible { .. } => {
                summary.skipped_ineligible += 1;
                updated_roster.push(employee.clone());
            }
        }
    }

    (updated_roster, summary)
}
