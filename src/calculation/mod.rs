//! Calculation logic for the payroll engine.
//!
//! This module contains the worksheet row resolver with its override
//! precedence rules, the monthly leave accrual calculator, the leave ledger
//! operations (usage, manual adjustment, deletion with balance reversal),
//! the monthly accrual posting with its idempotency guard, and the
//! anniversary carry-over cap enforcement.

mod accrual;
mod accrual_posting;
mod anniversary_cap;
mod ledger;
mod pay_row;

pub use accrual::{
    MonthlyAccrual, TIER_INVALID_DATE, TIER_NOT_APPLICABLE, TIER_UNKNOWN, accrue,
    shift_hours_per_day, years_of_service,
};
pub use accrual_posting::{
    AccrualPosting, AccrualRunSummary, post_monthly_accrual, run_monthly_accrual,
};
pub use anniversary_cap::{CapCheck, check_anniversary_cap};
pub use ledger::{apply_usage, delete_transaction, manual_adjust};
pub use pay_row::{
    ALERT_EMPLOYEE_NOT_FOUND, ALERT_UNKNOWN_PAY_CODE, ALERT_ZERO_RATE, recompute_row, resolve,
};
