//! Leave ledger operations: usage, manual adjustment, and deletion.
//!
//! Every operation takes the current [`LeaveBank`] by reference and returns
//! a fresh one with balances and history updated in lockstep. Callers are
//! responsible for persisting the returned value; discarding it aborts the
//! operation with no side effects.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{LeaveBank, LeaveTransaction, TransactionKind};

/// Splits a draw of `hours` across the two buckets, personal first.
///
/// Returns `(from_personal, from_vacation)` as non-negative magnitudes.
/// The personal share is limited to the positive part of the personal
/// balance, so an already-negative personal bucket never inflates the
/// vacation draw; the vacation share takes whatever remains and may push
/// that balance negative.
pub(crate) fn draw_personal_first(bank: &LeaveBank, hours: Decimal) -> (Decimal, Decimal) {
    let from_personal = hours.min(bank.personal_balance.max(Decimal::ZERO));
    let from_vacation = hours - from_personal;
    (from_personal, from_vacation)
}

/// Appends a transaction and applies its deltas, keeping the balance cache
/// and the ledger in lockstep. History is ordered newest first.
pub(crate) fn post(
    bank: &LeaveBank,
    date: NaiveDate,
    kind: TransactionKind,
    delta_vacation: Decimal,
    delta_personal: Decimal,
    description: String,
) -> LeaveBank {
    let mut updated = bank.clone();
    updated.vacation_balance += delta_vacation;
    updated.personal_balance += delta_personal;
    updated.history.insert(
        0,
        LeaveTransaction {
            id: Uuid::new_v4(),
            date,
            kind,
            delta_vacation,
            delta_personal,
            description,
            balance_after: updated.total_balance(),
        },
    );
    updated
}

/// Records leave usage, drawing down personal hours first.
///
/// Any remainder beyond the personal balance comes out of vacation, which
/// may go negative; over-draw is not blocked so retroactive corrections
/// stay possible. The Usage transaction records the amount actually drawn
/// from each bucket as negative deltas.
pub fn apply_usage(
    bank: &LeaveBank,
    hours_used: Decimal,
    date: NaiveDate,
    note: &str,
) -> LeaveBank {
    let (from_personal, from_vacation) = draw_personal_first(bank, hours_used);
    post(
        bank,
        date,
        TransactionKind::Usage,
        -from_vacation,
        -from_personal,
        note.to_string(),
    )
}

/// Applies a signed manual adjustment.
///
/// Positive amounts are always added to the vacation bucket. Negative
/// amounts are drawn personal-first, the same order as usage. The recorded
/// deltas equal the actual change to each bucket, which for a negative
/// amount may not match the signed input bucket-for-bucket.
pub fn manual_adjust(
    bank: &LeaveBank,
    signed_amount: Decimal,
    date: NaiveDate,
    note: &str,
) -> LeaveBank {
    let (delta_vacation, delta_personal) = if signed_amount >= Decimal::ZERO {
        (signed_amount, Decimal::ZERO)
    } else {
        let (from_personal, from_vacation) = draw_personal_first(bank, -signed_amount);
        (-from_vacation, -from_personal)
    };
    post(
        bank,
        date,
        TransactionKind::Adjustment,
        delta_vacation,
        delta_personal,
        note.to_string(),
    )
}

/// Removes a transaction from the history and reverses its effect.
///
/// The reversal is algebraic: the stored per-bucket deltas are subtracted
/// from the current balances. This relies on the model invariant that every
/// transaction records independent deltas (see
/// [`LeaveTransaction`](crate::models::LeaveTransaction)), which makes the
/// final balance independent of deletion order.
///
/// Returns [`PayrollError::TransactionNotFound`] when the id is not in the
/// history, so a caller never assumes a reversal happened when it did not.
pub fn delete_transaction(bank: &LeaveBank, transaction_id: Uuid) -> PayrollResult<LeaveBank> {
    let position = bank
        .history
        .iter()
        .position(|tx| tx.id == transaction_id)
        .ok_or(PayrollError::TransactionNotFound { id: transaction_id })?;

    let mut updated = bank.clone();
    let removed = updated.history.remove(position);
    updated.vacation_balance -= removed.delta_vacation;
    updated.personal_balance -= removed.delta_personal;
    Ok(updated)
}
