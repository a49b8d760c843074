//! Employee model and related types.
//!
//! This module defines the Employee struct, employment and PTO status enums,
//! and the per-employee payroll configuration used for custom pay scales.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::LeaveBank;

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment; accrues leave monthly.
    FullTime,
    /// As-needed (pro re nata) employment; no leave accrual.
    Prn,
}

/// Whether an employee's PTO accrual is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PtoStatus {
    /// Accruing normally.
    Active,
    /// Accrual suspended; skipped by the monthly batch entirely.
    Frozen,
}

impl Default for PtoStatus {
    fn default() -> Self {
        PtoStatus::Active
    }
}

/// Per-employee payroll configuration.
///
/// When `use_custom_pay_scale` is set, the employee's `custom_rates` map is
/// the sole rate source for every pay code: a code missing from the map
/// resolves to a rate of 0 and the department matrix is never consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// When true, rates come exclusively from `custom_rates`.
    #[serde(default)]
    pub use_custom_pay_scale: bool,
    /// Individual rate overrides keyed by pay code.
    #[serde(default)]
    pub custom_rates: HashMap<String, Decimal>,
}

/// Represents a department member subject to payroll resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's full name as stored (e.g., "John Doe").
    pub full_name: String,
    /// The pay level indexing into the rate matrix, if assigned.
    #[serde(default)]
    pub pay_level: Option<String>,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// The full-time start date as recorded in the personnel file.
    ///
    /// Legacy records carry free-form date strings, so this field is kept
    /// as-is and parsed at the accrual seam where an unparseable value
    /// degrades to a zero-accrual sentinel.
    #[serde(default)]
    pub ft_start_date: Option<String>,
    /// The employee's shift schedule (e.g., "24/48", "10-hour days").
    #[serde(default)]
    pub shift_schedule: Option<String>,
    /// Legacy name for the shift schedule field; read via [`Employee::schedule_label`].
    #[serde(default)]
    pub work_schedule: Option<String>,
    /// Whether PTO accrual is active or frozen.
    #[serde(default)]
    pub pto_status: PtoStatus,
    /// Custom pay scale configuration.
    #[serde(default)]
    pub payroll_config: PayrollConfig,
    /// The employee's leave bank, if one has been opened.
    #[serde(default)]
    pub leave_bank: Option<LeaveBank>,
}

impl Employee {
    /// Returns true if the employee is full-time.
    pub fn is_full_time(&self) -> bool {
        self.employment_type == EmploymentType::FullTime
    }

    /// Returns true if the employee's PTO accrual is frozen.
    pub fn is_pto_frozen(&self) -> bool {
        self.pto_status == PtoStatus::Frozen
    }

    /// Returns the shift schedule label, trying current and legacy field
    /// names in priority order.
    ///
    /// Personnel records written by older versions of the application stored
    /// the schedule under `work_schedule`; all fallback logic lives here so
    /// callers see one canonical value.
    pub fn schedule_label(&self) -> Option<&str> {
        self.shift_schedule
            .as_deref()
            .or(self.work_schedule.as_deref())
    }

    /// Returns true if `query` matches this employee's name.
    ///
    /// The query is trimmed and compared case-insensitively against three
    /// candidate forms: `"First Last"`, `"Last, First"`, and the stored full
    /// name. Import files commonly carry the `"Last, First"` form while
    /// personnel records store `"First Last"`.
    pub fn matches_name(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }

        let stored = self.full_name.trim();
        if stored.to_lowercase() == needle {
            return true;
        }

        let parts: Vec<&str> = stored.split_whitespace().collect();
        let (Some(first), Some(last)) = (parts.first(), parts.last()) else {
            return false;
        };
        if parts.len() < 2 {
            return false;
        }

        let first_last = format!("{} {}", first, last).to_lowercase();
        let last_first = format!("{}, {}", last, first).to_lowercase();
        needle == first_last || needle == last_first
    }
}
