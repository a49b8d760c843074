//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for resolving payroll worksheet
//! rows and running the monthly leave accrual.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AccrualRunRequest, EmployeeRequest, ImportRowRequest, RecomputeRequest, ResolveRequest};
pub use response::{AccrualRunResponse, ApiError, ResolvedRow, WorksheetResponse};
pub use state::AppState;
