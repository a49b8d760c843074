//! Leave bank and transaction ledger models.
//!
//! This module defines the [`LeaveBank`] held by each full-time employee and
//! the append-only [`LeaveTransaction`] history backing its balances.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Monthly accrual posting.
    Accrual,
    /// Leave hours consumed.
    Usage,
    /// Manual correction or cap forfeiture.
    Adjustment,
}

/// A single entry in a leave bank's history.
///
/// Transactions are immutable once created. Each one records the *actual*
/// change applied to each bucket as an independent, absolute delta, never a
/// recomputed running state. This is a hard invariant of the model:
/// [`delete_transaction`](crate::calculation::delete_transaction) reverses a
/// deletion algebraically by subtracting the stored deltas, which is only
/// correct while deltas stay independent of one another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveTransaction {
    /// Unique identifier for this transaction.
    pub id: Uuid,
    /// The effective date of the transaction.
    pub date: NaiveDate,
    /// The kind of ledger entry.
    pub kind: TransactionKind,
    /// Change applied to the vacation bucket (signed).
    pub delta_vacation: Decimal,
    /// Change applied to the personal bucket (signed).
    pub delta_personal: Decimal,
    /// Human-readable description shown in the history view.
    pub description: String,
    /// Snapshot of the total balance immediately after this transaction.
    pub balance_after: Decimal,
}

/// An employee's leave bank: two balances plus the ledger backing them.
///
/// The history is ordered newest first. The balances are a materialized
/// cache of the ledger: they must always equal the cumulative sum of the
/// per-bucket deltas in `history`. Every operation in
/// [`crate::calculation`] maintains this in lockstep;
/// [`LeaveBank::is_reconciled`] checks it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveBank {
    /// Current vacation balance in hours.
    pub vacation_balance: Decimal,
    /// Current personal balance in hours.
    pub personal_balance: Decimal,
    /// The date the last monthly accrual was posted, if any.
    #[serde(default)]
    pub last_accrual_date: Option<NaiveDate>,
    /// Transaction history, newest first.
    #[serde(default)]
    pub history: Vec<LeaveTransaction>,
}

impl LeaveBank {
    /// Returns the combined vacation + personal balance.
    pub fn total_balance(&self) -> Decimal {
        self.vacation_balance + self.personal_balance
    }

    /// Returns true if the balances equal the cumulative sum of the
    /// history's per-bucket deltas.
    ///
    /// The ledger is the source of truth; a `false` here means some
    /// mutation path bypassed the transaction log.
    pub fn is_reconciled(&self) -> bool {
        let (vac, per) = self.history.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(vac, per), tx| (vac + tx.delta_vacation, per + tx.delta_personal),
        );
        vac == self.vacation_balance && per == self.personal_balance
    }
}
