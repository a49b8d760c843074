//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rate
//! catalog and leave policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{
    LeavePolicyConfig, PayCodesConfig, PayLevelsConfig, RateCatalog,
};

/// Loads and provides access to the department payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the validated [`RateCatalog`] and [`LeavePolicyConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/dept/
/// ├── pay_codes.yaml    # Pay code definitions
/// ├── pay_levels.yaml   # Rate matrix by pay level
/// └── leave_policy.yaml # Accrual tiers and carry-over caps
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dept").unwrap();
/// let overtime = loader.catalog().find_pay_code("Overtime").unwrap();
/// println!("Overtime pays {:?}", overtime.pay_type);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: RateCatalog,
    leave_policy: LeavePolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/dept")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Two pay code definitions collide on a case-insensitive identifier
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let pay_codes_path = path.join("pay_codes.yaml");
        let pay_codes = Self::load_yaml::<PayCodesConfig>(&pay_codes_path)?;

        let pay_levels_path = path.join("pay_levels.yaml");
        let pay_levels = Self::load_yaml::<PayLevelsConfig>(&pay_levels_path)?;

        let leave_policy_path = path.join("leave_policy.yaml");
        let leave_policy = Self::load_yaml::<LeavePolicyConfig>(&leave_policy_path)?;

        let catalog = RateCatalog::new(pay_codes.pay_codes, pay_levels.pay_levels)?;

        Ok(Self {
            catalog,
            leave_policy,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated rate catalog.
    pub fn catalog(&self) -> &RateCatalog {
        &self.catalog
    }

    /// Returns the leave accrual policy.
    pub fn leave_policy(&self) -> &LeavePolicyConfig {
        &self.leave_policy
    }
}
