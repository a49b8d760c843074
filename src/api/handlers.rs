//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{recompute_row, resolve, run_monthly_accrual};
use crate::models::Employee;

use super::request::{AccrualRunRequest, RecomputeRequest, ResolveRequest};
use super::response::{AccrualRunResponse, ApiError, ResolvedRow, WorksheetResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/worksheet/resolve", post(resolve_handler))
        .route("/worksheet/recompute", post(recompute_handler))
        .route("/leave/accrual-run", post(accrual_run_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an error response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /worksheet/resolve.
///
/// Resolves each imported entry against the roster and the loaded rate
/// catalog. Row-level conditions come back as alerts on the rows; the
/// request as a whole only fails on malformed input.
async fn resolve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        rows = request.rows.len(),
        employees = request.employees.len(),
        "Resolving worksheet rows"
    );

    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let catalog = state.config().catalog();

    let rows: Vec<ResolvedRow> = request
        .rows
        .into_iter()
        .map(|entry| {
            let mut row = resolve(
                &entry.employee_name,
                &entry.pay_code,
                entry.quantity,
                &employees,
                catalog,
            );
            // The shift date belongs to the import, not the resolver.
            row.shift_date = entry.shift_date;
            ResolvedRow::from(row)
        })
        .collect();

    let alerts = rows.iter().filter(|r| r.row.alert.is_some()).count();
    if alerts > 0 {
        warn!(
            correlation_id = %correlation_id,
            alerts,
            "Worksheet resolved with flagged rows"
        );
    }

    (StatusCode::OK, Json(WorksheetResponse { rows })).into_response()
}

/// Handler for POST /worksheet/recompute.
///
/// Re-resolves existing rows after catalog or personnel changes, carrying
/// row identity, manual overrides, notes, and shift dates over verbatim.
async fn recompute_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecomputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        rows = request.rows.len(),
        "Recomputing worksheet rows"
    );

    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let catalog = state.config().catalog();

    let rows: Vec<ResolvedRow> = request
        .rows
        .iter()
        .map(|prior| ResolvedRow::from(recompute_row(prior, &employees, catalog)))
        .collect();

    (StatusCode::OK, Json(WorksheetResponse { rows })).into_response()
}

/// Handler for POST /leave/accrual-run.
///
/// Runs the monthly accrual over the posted roster from a single policy and
/// month-key snapshot, returning the updated roster and aggregate counts.
async fn accrual_run_handler(
    State(state): State<AppState>,
    payload: Result<Json<AccrualRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    // The guard key must be exactly "YYYY-MM": the idempotency guard is a
    // starts-with comparison against zero-padded posted dates, so an
    // unpadded key like "2026-3" would never match and double-post.
    let month_key_valid = chrono::NaiveDate::parse_from_str(
        &format!("{}-01", request.month_key),
        "%Y-%m-%d",
    )
    .map(|first_of_month| first_of_month.format("%Y-%m").to_string() == request.month_key)
    .unwrap_or(false);
    if !month_key_valid {
        warn!(
            correlation_id = %correlation_id,
            month_key = %request.month_key,
            "Rejected accrual run with malformed month key"
        );
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError::validation_error(format!(
                "month_key must be formatted YYYY-MM, got '{}'",
                request.month_key
            ))),
        )
            .into_response();
    }

    let posted_on = request.posted_on.unwrap_or_else(|| Utc::now().date_naive());
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();

    let (updated, summary) = run_monthly_accrual(
        &employees,
        state.config().leave_policy(),
        &request.month_key,
        posted_on,
    );

    info!(
        correlation_id = %correlation_id,
        month_key = %request.month_key,
        processed = summary.processed,
        already_posted = summary.already_posted,
        skipped_frozen = summary.skipped_frozen,
        skipped_ineligible = summary.skipped_ineligible,
        "Accrual run complete"
    );

    (
        StatusCode::OK,
        Json(AccrualRunResponse {
            month_key: request.month_key,
            employees: updated,
            summary,
        }),
    )
        .into_response()
}
