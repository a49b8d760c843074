//! Configuration for the payroll engine.
//!
//! This module provides the rate catalog (pay code definitions plus the pay
//! level rate matrix), the leave accrual policy, and the loader that reads
//! them from YAML files.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccrualTier, CarryOverCaps, DEFAULT_PAY_LEVEL, LeavePolicyConfig, PayCodeDefinition,
    PayCodesConfig, PayLevel, PayLevelsConfig, PayType, RateCatalog,
};
