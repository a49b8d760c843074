//! Payroll worksheet row model.
//!
//! This module contains the [`PayrollRow`] type produced by the rate
//! resolver, along with the alert severity scale used for row-level
//! conditions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PayType;

/// Severity of a row-level alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Informational only.
    Info,
    /// Needs operator attention; the row still totals normally.
    Warning,
    /// The row could not be resolved (e.g., unknown pay code).
    Error,
}

/// One line of a payroll worksheet.
///
/// Rows are ephemeral: a recalculation pass rebuilds every row from its
/// original `(employee_name, code, quantity)` triple. The `id`,
/// `manual_rate_override`, `note`, and `shift_date` fields are outside the
/// resolver's authority and survive recomputation verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRow {
    /// Stable row identity across recomputes.
    pub id: Uuid,
    /// The resolved employee's stored full name, or the original query when
    /// no employee matched.
    pub employee_name: String,
    /// The pay level used for the matrix lookup.
    pub pay_level: String,
    /// The pay code's canonical display label (never the raw identifier
    /// passed in, so the worksheet always shows canonical names).
    pub code: String,
    /// Whether the code pays hourly or flat.
    pub pay_type: PayType,
    /// Hours for hourly codes; count for flat codes.
    pub quantity: Decimal,
    /// The resolved hourly/flat rate.
    pub rate: Decimal,
    /// `rate * quantity`.
    pub total: Decimal,
    /// Per-line rate override; supersedes `rate`/`total` when present.
    #[serde(default)]
    pub manual_rate_override: Option<Decimal>,
    /// Operator note attached to the row.
    #[serde(default)]
    pub note: Option<String>,
    /// The shift date recorded by the import, if any.
    #[serde(default)]
    pub shift_date: Option<NaiveDate>,
    /// Row-level alert text, if any condition was flagged.
    #[serde(default)]
    pub alert: Option<String>,
    /// Severity of `alert`.
    #[serde(default)]
    pub alert_severity: Option<AlertSeverity>,
}

impl PayrollRow {
    /// Returns the monetary total to display or print for this row.
    ///
    /// A manual override always wins over the resolved rate. Flat codes pay
    /// the override once regardless of quantity; hourly codes multiply it by
    /// the row's quantity. Every consumer showing a dollar amount must go
    /// through this method, never `rate * quantity` directly.
    pub fn effective_total(&self) -> Decimal {
        match self.manual_rate_override {
            Some(override_rate) => match self.pay_type {
                PayType::Flat => override_rate,
                PayType::Hourly => override_rate * self.quantity,
            },
            None => self.total,
        }
    }
}
