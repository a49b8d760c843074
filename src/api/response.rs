//! Response types for the payroll engine API.
//!
//! This module defines the success payloads for the worksheet and leave
//! endpoints, plus the error response structures and error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::AccrualRunSummary;
use crate::error::PayrollError;
use crate::models::{Employee, PayrollRow};

/// One resolved worksheet row plus its display total.
///
/// The `effective_total` is what every consumer must show or print: it
/// already prefers the manual override over the resolved rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedRow {
    /// The resolved row.
    #[serde(flatten)]
    pub row: PayrollRow,
    /// The monetary total honoring any manual override.
    pub effective_total: Decimal,
}

impl From<PayrollRow> for ResolvedRow {
    fn from(row: PayrollRow) -> Self {
        let effective_total = row.effective_total();
        Self {
            row,
            effective_total,
        }
    }
}

/// Response body for the worksheet endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetResponse {
    /// The resolved rows, in request order.
    pub rows: Vec<ResolvedRow>,
}

/// Response body for the accrual run endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrualRunResponse {
    /// The month key the run was guarded by.
    pub month_key: String,
    /// The updated roster; the storage collaborator persists this verbatim.
    pub employees: Vec<Employee>,
    /// Aggregate processed/skipped counts.
    pub summary: AccrualRunSummary,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        match error {
            PayrollError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            PayrollError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            PayrollError::DuplicatePayCode { identifier } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DUPLICATE_PAY_CODE",
                    format!("Duplicate pay code identifier: {}", identifier),
                    "Pay code codes and labels must be unique case-insensitively",
                ),
            },
            PayrollError::TransactionNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "TRANSACTION_NOT_FOUND",
                    format!("Leave transaction not found: {}", id),
                    "No reversal was applied",
                ),
            },
        }
    }
}
