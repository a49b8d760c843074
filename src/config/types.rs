//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed rate catalog and leave policy
//! structures that are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{PayrollError, PayrollResult};

/// The pay level used when an employee has none assigned.
///
/// Hourly-only personnel are paid from this sentinel row of the matrix.
pub const DEFAULT_PAY_LEVEL: &str = "Hourly Only";

/// Whether a pay code pays by the hour or as a flat amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Paid per hour; total = rate * hours.
    Hourly,
    /// Paid per occurrence; the import passes quantity = count.
    Flat,
}

/// A category of compensation (e.g., Overtime, Vacation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayCodeDefinition {
    /// Stable identifier (e.g., "overtime").
    pub code: String,
    /// Display name; also accepted as a lookup key.
    pub label: String,
    /// Hourly or flat payment type.
    pub pay_type: PayType,
    /// Display color for the worksheet UI.
    pub color: String,
}

/// One rank of the rate matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayLevel {
    /// Sort order for display.
    pub rank: u32,
    /// Configured rates keyed by pay code. An absent entry means "no rate
    /// configured", which is distinct from an explicit 0.
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

/// Pay codes configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PayCodesConfig {
    /// All pay code definitions.
    pub pay_codes: Vec<PayCodeDefinition>,
}

/// Pay levels configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PayLevelsConfig {
    /// Map of pay level name to matrix row.
    pub pay_levels: HashMap<String, PayLevel>,
}

/// A tenure bracket defining yearly leave entitlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualTier {
    /// Minimum whole years of service for this tier.
    pub min_years: u32,
    /// Vacation days granted per year at this tier.
    pub vacation_days_per_year: Decimal,
    /// Personal days granted per year at this tier.
    pub personal_days_per_year: Decimal,
}

/// Maximum carry-over balances enforced at the employee's anniversary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarryOverCaps {
    /// Cap in hours for personnel on 10-hour shifts.
    pub cap_10_hour_shift: Decimal,
    /// Cap in hours for personnel on 12-hour shifts.
    pub cap_12_hour_shift: Decimal,
}

/// Leave accrual policy: tenure tiers plus anniversary carry-over caps.
///
/// Tiers may be supplied in any order; selection always picks the tier with
/// the greatest `min_years` not exceeding the employee's years of service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeavePolicyConfig {
    /// Tenure tiers, any order.
    pub tiers: Vec<AccrualTier>,
    /// Anniversary carry-over caps.
    pub caps: CarryOverCaps,
}

/// The department rate catalog: pay code definitions plus the rate matrix.
///
/// Pure lookup surface; edited out-of-band by the settings screens and
/// treated as immutable by the engine.
#[derive(Debug, Clone)]
pub struct RateCatalog {
    /// Pay code definitions in display order.
    pay_codes: Vec<PayCodeDefinition>,
    /// Rate matrix rows by pay level name.
    pay_levels: HashMap<String, PayLevel>,
}

impl RateCatalog {
    /// Creates a catalog, validating that no two definitions collide on a
    /// case-insensitive code or label.
    ///
    /// Labels are used interchangeably with codes as human lookup keys, so
    /// a collision would make [`RateCatalog::find_pay_code`] ambiguous.
    pub fn new(
        pay_codes: Vec<PayCodeDefinition>,
        pay_levels: HashMap<String, PayLevel>,
    ) -> PayrollResult<Self> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for def in &pay_codes {
            for key in [def.code.to_lowercase(), def.label.to_lowercase()] {
                match seen.get(key.as_str()).copied() {
                    // A definition's own label may equal its own code.
                    Some(owner) if owner == def.code => {}
                    Some(_) => {
                        return Err(PayrollError::DuplicatePayCode { identifier: key });
                    }
                    None => {
                        seen.insert(key, def.code.as_str());
                    }
                }
            }
        }

        Ok(Self {
            pay_codes,
            pay_levels,
        })
    }

    /// Finds a pay code definition by code or display label,
    /// case-insensitively.
    pub fn find_pay_code(&self, identifier: &str) -> Option<&PayCodeDefinition> {
        let needle = identifier.trim().to_lowercase();
        self.pay_codes.iter().find(|def| {
            def.code.to_lowercase() == needle || def.label.to_lowercase() == needle
        })
    }

    /// Returns the configured matrix rate for a pay level and code, or
    /// `None` when no rate is configured. Never defaults silently.
    pub fn rate_for(&self, pay_level: &str, pay_code: &str) -> Option<Decimal> {
        self.pay_levels
            .get(pay_level)
            .and_then(|level| level.rates.get(pay_code))
            .copied()
    }

    /// Returns all pay code definitions.
    pub fn pay_codes(&self) -> &[PayCodeDefinition] {
        &self.pay_codes
    }

    /// Returns the rate matrix rows by pay level name.
    pub fn pay_levels(&self) -> &HashMap<String, PayLevel> {
        &self.pay_levels
    }
}
