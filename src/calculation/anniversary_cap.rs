//! Anniversary carry-over cap enforcement.
//!
//! At each employee's anniversary the combined leave balance is checked
//! against the policy cap for their shift length; any excess is forfeited.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::LeavePolicyConfig;
use crate::models::{Employee, LeaveBank, TransactionKind};

use super::accrual::shift_hours_per_day;
use super::ledger;

/// The outcome of an anniversary cap check.
#[derive(Debug, Clone, PartialEq)]
pub enum CapCheck {
    /// The combined balance fits under the cap; nothing changed and no
    /// transaction was recorded.
    UnderCap,
    /// Excess hours were forfeited.
    Forfeited {
        /// The updated leave bank.
        bank: LeaveBank,
        /// Hours forfeited in total.
        forfeited: Decimal,
    },
}

/// Enforces the anniversary carry-over cap on an employee's leave bank.
///
/// The cap is selected by shift length: 12-hour personnel get
/// `cap_12_hour_shift`, everyone else `cap_10_hour_shift`. When the
/// combined vacation + personal balance exceeds the cap, the excess is
/// drained personal-first (the same order convention as usage) and recorded
/// as a single Adjustment transaction whose description names the cap.
/// Under the cap, or with no bank at all, the check is a no-op.
pub fn check_anniversary_cap(
    employee: &Employee,
    policy: &LeavePolicyConfig,
    date: NaiveDate,
) -> CapCheck {
    let Some(bank) = employee.leave_bank.as_ref() else {
        return CapCheck::UnderCap;
    };

    let cap = if shift_hours_per_day(employee) == Decimal::from(12) {
        policy.caps.cap_12_hour_shift
    } else {
        policy.caps.cap_10_hour_shift
    };

    let excess = bank.total_balance() - cap;
    if excess <= Decimal::ZERO {
        return CapCheck::UnderCap;
    }

    let (from_personal, from_vacation) = ledger::draw_personal_first(bank, excess);
    let updated = ledger::post(
        bank,
        date,
        TransactionKind::Adjustment,
        -from_vacation,
        -from_personal,
        format!("Anniversary carry-over cap ({} hours) forfeiture", cap),
    );

    CapCheck::Forfeited {
        bank: updated,
        forfeited: excess,
    }
}
