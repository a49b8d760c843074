//! Payroll row resolution.
//!
//! This module resolves one imported time entry (an employee name query, a
//! pay code identifier, and a quantity) into a worksheet row with an
//! authoritative rate and total, applying the custom-pay-scale override
//! precedence rules.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::{DEFAULT_PAY_LEVEL, PayType, RateCatalog};
use crate::models::{AlertSeverity, Employee, PayrollRow};

/// Alert text for a name query that matched no employee.
pub const ALERT_EMPLOYEE_NOT_FOUND: &str = "Employee not found";
/// Alert text for a pay code identifier with no catalog match.
pub const ALERT_UNKNOWN_PAY_CODE: &str = "Unknown Pay Code";
/// Advisory alert for a row that resolved to a zero rate.
pub const ALERT_ZERO_RATE: &str = "Zero Rate";

/// Resolves one imported entry into a payroll worksheet row.
///
/// The name query is trimmed and matched case-insensitively against each
/// employee's `"First Last"`, `"Last, First"`, and stored full name forms;
/// the first match in slice order wins (names are expected to be unique;
/// keeping them unique is the personnel record store's concern). The pay
/// code identifier matches either a code or a display label.
///
/// Rate determination uses two mutually exclusive strategies:
///
/// 1. When the employee's `use_custom_pay_scale` flag is set, the rate comes
///    from their `custom_rates` map: an explicit 0 counts, a missing entry
///    resolves to 0, and the matrix is never consulted.
/// 2. Otherwise the rate is read from the matrix at the employee's pay level
///    (defaulting to the "Hourly Only" sentinel level), with an absent cell
///    resolving to 0.
///
/// The total is always `rate * quantity`; flat codes rely on the caller
/// passing quantity = count. Unmatched names and codes are reported as row
/// alerts, never errors, so one bad line cannot block the rest of an import.
pub fn resolve(
    employee_name_query: &str,
    pay_code_identifier: &str,
    quantity: Decimal,
    employees: &[Employee],
    catalog: &RateCatalog,
) -> PayrollRow {
    let mut row = PayrollRow {
        id: Uuid::new_v4(),
        employee_name: employee_name_query.trim().to_string(),
        pay_level: String::new(),
        code: pay_code_identifier.trim().to_string(),
        pay_type: PayType::Hourly,
        quantity,
        rate: Decimal::ZERO,
        total: Decimal::ZERO,
        manual_rate_override: None,
        note: None,
        shift_date: None,
        alert: None,
        alert_severity: None,
    };

    let Some(employee) = employees.iter().find(|e| e.matches_name(employee_name_query))
    else {
        row.alert = Some(ALERT_EMPLOYEE_NOT_FOUND.to_string());
        row.alert_severity = Some(AlertSeverity::Warning);
        return row;
    };

    row.employee_name = employee.full_name.clone();
    let pay_level = employee
        .pay_level
        .clone()
        .unwrap_or_else(|| DEFAULT_PAY_LEVEL.to_string());
    row.pay_level = pay_level.clone();

    let Some(definition) = catalog.find_pay_code(pay_code_identifier) else {
        row.alert = Some(ALERT_UNKNOWN_PAY_CODE.to_string());
        row.alert_severity = Some(AlertSeverity::Error);
        return row;
    };

    // The worksheet always shows the canonical display label.
    row.code = definition.label.clone();
    row.pay_type = definition.pay_type;

    let rate = if employee.payroll_config.use_custom_pay_scale {
        // Strategy A: the custom scale is authoritative whenever the flag is
        // set, even when no custom rate exists for this code.
        employee
            .payroll_config
            .custom_rates
            .get(&definition.code)
            .copied()
            .unwrap_or(Decimal::ZERO)
    } else {
        // Strategy B: matrix lookup; absent cell means 0.
        catalog
            .rate_for(&pay_level, &definition.code)
            .unwrap_or(Decimal::ZERO)
    };

    row.rate = rate;
    row.total = rate * quantity;

    if row.rate.is_zero() && row.total.is_zero() {
        row.alert = Some(ALERT_ZERO_RATE.to_string());
        row.alert_severity = Some(AlertSeverity::Warning);
    }

    row
}

/// Re-resolves an existing worksheet row after catalog or employee changes.
///
/// The rate, total, pay level, and alerts are recomputed from the row's
/// original `(employee_name, code, quantity)` triple. Fields outside the
/// resolver's authority (the row id, manual rate override, note, and shift
/// date) are carried over from the prior row unchanged.
pub fn recompute_row(
    prior: &PayrollRow,
    employees: &[Employee],
    catalog: &RateCatalog,
) -> PayrollRow {
    let mut row = resolve(
        &prior.employee_name,
        &prior.code,
        prior.quantity,
        employees,
        catalog,
    );
    row.id = prior.id;
    row.manual_rate_override = prior.manual_rate_override;
    row.note = prior.note.clone();
    row.shift_date = prior.shift_date;
    row
}
