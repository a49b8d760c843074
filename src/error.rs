//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during rate resolution and
//! leave ledger maintenance.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Note that
/// row-level conditions (unknown employee, unknown pay code, zero rate) are
/// *not* errors: they are encoded as alerts on the resolved row so one bad
/// import line never blocks the rest of the worksheet.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Two pay code definitions collide on a case-insensitive code or label.
    ///
    /// Labels are used interchangeably with codes as lookup keys, so the
    /// catalog refuses to load when a lookup would be ambiguous.
    #[error("Duplicate pay code identifier: {identifier}")]
    DuplicatePayCode {
        /// The identifier (code or label) that appears more than once.
        identifier: String,
    },

    /// A leave transaction id was not found in the bank's history.
    ///
    /// Deletion must signal this rather than silently succeeding, so a
    /// caller never assumes a balance reversal happened when it did not.
    #[error("Leave transaction not found: {id}")]
    TransactionNotFound {
        /// The transaction id that was not found.
        id: Uuid,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
