//! Domain models for the payroll engine.
//!
//! This module contains the employee, leave bank, and worksheet row types
//! shared by the resolution and ledger components.

mod employee;
mod leave;
mod payroll_row;

pub use employee::{Employee, EmploymentType, PayrollConfig, PtoStatus};
pub use leave::{LeaveBank, LeaveTransaction, TransactionKind};
pub use payroll_row::{AlertSeverity, PayrollRow};
