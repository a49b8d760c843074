//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the worksheet and
//! leave endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, EmploymentType, LeaveBank, PayrollConfig, PayrollRow, PtoStatus};

/// Request body for the `/worksheet/resolve` endpoint.
///
/// Carries the personnel snapshot alongside the imported entries so the
/// engine never reads shared state mid-batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// The personnel roster to match names against.
    pub employees: Vec<EmployeeRequest>,
    /// The imported entries, one per worksheet row.
    pub rows: Vec<ImportRowRequest>,
}

/// One imported time entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRowRequest {
    /// The employee name as it appears in the import file.
    pub employee_name: String,
    /// The pay code identifier (code or display label).
    pub pay_code: String,
    /// Hours for hourly codes; count for flat codes.
    pub quantity: Decimal,
    /// The shift date recorded by the import, if any.
    #[serde(default)]
    pub shift_date: Option<NaiveDate>,
}

/// Request body for the `/worksheet/recompute` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeRequest {
    /// The personnel roster to match names against.
    pub employees: Vec<EmployeeRequest>,
    /// The prior rows to re-resolve; ids, overrides, notes, and shift dates
    /// survive recomputation verbatim.
    pub rows: Vec<PayrollRow>,
}

/// Request body for the `/leave/accrual-run` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrualRunRequest {
    /// The roster to run the accrual over.
    pub employees: Vec<EmployeeRequest>,
    /// Year-month guard key, e.g. "2026-03".
    pub month_key: String,
    /// Posting date; defaults to today when absent.
    #[serde(default)]
    pub posted_on: Option<NaiveDate>,
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's stored full name.
    pub full_name: String,
    /// The pay level indexing into the rate matrix, if assigned.
    #[serde(default)]
    pub pay_level: Option<String>,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// The recorded full-time start date (free-form; parsed at the accrual seam).
    #[serde(default)]
    pub ft_start_date: Option<String>,
    /// The employee's shift schedule.
    #[serde(default)]
    pub shift_schedule: Option<String>,
    /// Legacy name for the shift schedule field.
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

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            full_name: req.full_name,
            pay_level: req.pay_level,
            employment_type: req.employment_type,
            ft_start_date: req.ft_start_date,
            shift_schedule: req.shift_schedule,
            work_schedule: req.work_schedule,
            pto_status: req.pto_status,
            payroll_config: req.payroll_config,
            leave_bank: req.leave_bank,
        }
    }
}
