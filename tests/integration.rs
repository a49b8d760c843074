//! Comprehensive integration tests for the payroll engine API.
//!
//! This test suite covers the worksheet and leave endpoints end to end:
//! - Import row resolution ("First Last" and "Last, First" queries)
//! - Custom pay scale precedence over the rate matrix
//! - Flat pay codes and manual override totals
//! - Row alerts (unknown employee, unknown pay code, zero rate)
//! - Worksheet recomputation with carried-over fields
//! - Monthly accrual runs, idempotency, and skip accounting
//! - Error cases (malformed JSON, bad month key)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/dept").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Parses a JSON value holding a decimal (serialized as a string).
fn decimal_field(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal field should be a string")).unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn ff1_employee(name: &str) -> Value {
    json!({
        "full_name": name,
        "pay_level": "FF-1",
        "employment_type": "full_time",
        "ft_start_date": "2022-06-01",
        "shift_schedule": "24/48"
    })
}

fn import_row(name: &str, code: &str, quantity: &str) -> Value {
    json!({
        "employee_name": name,
        "pay_code": code,
        "quantity": quantity
    })
}

// =============================================================================
// Worksheet resolution
// =============================================================================

#[tokio::test]
async fn test_resolve_last_first_import_row() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [ff1_employee("John Doe")],
        "rows": [import_row("Doe, John", "Overtime", "5")]
    });

    let (status, response) = post_json(router, "/worksheet/resolve", body).await;

    assert_eq!(status, StatusCode::OK);
    let row = &response["rows"][0];
    assert_eq!(row["employee_name"], "John Doe");
    assert_eq!(row["code"], "Overtime");
    assert_eq!(decimal_field(&row["rate"]), decimal("25"));
    assert_eq!(decimal_field(&row["total"]), decimal("125"));
    assert_eq!(decimal_field(&row["effective_total"]), decimal("125"));
    assert_eq!(row["alert"], Value::Null);
}

#[tokio::test]
async fn test_resolve_carries_shift_date_from_import() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [ff1_employee("John Doe")],
        "rows": [{
            "employee_name": "John Doe",
            "pay_code": "Training",
            "quantity": "8",
            "shift_date": "2026-03-14"
        }]
    });

    let (status, response) = post_json(router, "/worksheet/resolve", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["rows"][0]["shift_date"], "2026-03-14");
    assert_eq!(decimal_field(&response["rows"][0]["total"]), decimal("148"));
}

#[tokio::test]
async fn test_resolve_unknown_employee_flags_warning() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [ff1_employee("John Doe")],
        "rows": [import_row("Jane Roe", "Overtime", "5")]
    });

    let (status, response) = post_json(router, "/worksheet/resolve", body).await;

    assert_eq!(status, StatusCode::OK);
    let row = &response["rows"][0];
    assert_eq!(row["alert"], "Employee not found");
    assert_eq!(row["alert_severity"], "warning");
    assert_eq!(decimal_field(&row["total"]), decimal("0"));
}

#[tokio::test]
async fn test_resolve_unknown_pay_code_flags_error() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [ff1_employee("John Doe")],
        "rows": [import_row("John Doe", "Hazmat Bonus", "2")]
    });

    let (status, response) = post_json(router, "/worksheet/resolve", body).await;

    assert_eq!(status, StatusCode::OK);
    let row = &response["rows"][0];
    assert_eq!(row["alert"], "Unknown Pay Code");
    assert_eq!(row["alert_severity"], "error");
}

#[tokio::test]
async fn test_resolve_bad_row_does_not_block_others() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [ff1_employee("John Doe")],
        "rows": [
            import_row("Nobody Here", "Overtime", "1"),
            import_row("Doe, John", "Overtime", "2")
        ]
    });

    let (status, response) = post_json(router, "/worksheet/resolve", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["rows"][0]["alert"], "Employee not found");
    assert_eq!(response["rows"][1]["alert"], Value::Null);
    assert_eq!(
        decimal_field(&response["rows"][1]["total"]),
        decimal("50")
    );
}

#[tokio::test]
async fn test_resolve_custom_pay_scale_wins_over_matrix() {
    let router = create_router_for_test();
    let mut employee = ff1_employee("John Doe");
    employee["payroll_config"] = json!({
        "use_custom_pay_scale": true,
        "custom_rates": { "overtime": "40.00" }
    });
    let body = json!({
        "employees": [employee],
        "rows": [import_row("John Doe", "Overtime", "2")]
    });

    let (status, response) = post_json(router, "/worksheet/resolve", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&response["rows"][0]["rate"]), decimal("40"));
    assert_eq!(decimal_field(&response["rows"][0]["total"]), decimal("80"));
}

#[tokio::test]
async fn test_resolve_custom_scale_without_rate_is_zero() {
    let router = create_router_for_test();
    let mut employee = ff1_employee("John Doe");
    employee["payroll_config"] = json!({
        "use_custom_pay_scale": true,
        "custom_rates": {}
    });
    let body = json!({
        "employees": [employee],
        "rows": [import_row("John Doe", "Overtime", "8")]
    });

    let (status, response) = post_json(router, "/worksheet/resolve", body).await;

    assert_eq!(status, StatusCode::OK);
    let row = &response["rows"][0];
    // The matrix has a 25.00 rate, but the custom scale never falls back.
    assert_eq!(decimal_field(&row["rate"]), decimal("0"));
    assert_eq!(row["alert"], "Zero Rate");
    assert_eq!(row["alert_severity"], "warning");
}

#[tokio::test]
async fn test_resolve_flat_code_uses_canonical_label() {
    let router = create_router_for_test();
    let body = json!({
        "employees": [ff1_employee("John Doe")],
        "rows": [import_row("John Doe", "stipend", "1")]
    });

    let (status, response) = post_json(router, "/worksheet/resolve", body).await;

    assert_eq!(status, StatusCode::OK);
    let row = &response["rows"][0];
    assert_eq!(row["code"], "Officer Stipend");
    assert_eq!(row["pay_type"], "flat");
    assert_eq!(decimal_field(&row["total"]), decimal("150"));
}

#[tokio::test]
async fn test_resolve_unset_pay_level_is_hourly_only_zero() {
    let router = create_router_for_test();
    let employee = json!({
        "full_name": "Pat Kim",
        "employment_type": "prn"
    });
    let body = json!({
        "employees": [employee],
        "rows": [import_row("Pat Kim", "Overtime", "6")]
    });

    let (status, response) = post_json(router, "/worksheet/resolve", body).await;

    assert_eq!(status, StatusCode::OK);
    let row = &response["rows"][0];
    assert_eq!(row["pay_level"], "Hourly Only");
    assert_eq!(row["alert"], "Zero Rate");
}

// =============================================================================
// Worksheet recomputation
// =============================================================================

#[tokio::test]
async fn test_recompute_preserves_override_and_identity() {
    let router = create_router_for_test();

    // Resolve first so the row carries a real id.
    let body = json!({
        "employees": [ff1_employee("John Doe")],
        "rows": [import_row("Doe, John", "Overtime", "3")]
    });
    let (_, resolved) = post_json(create_router_for_test(), "/worksheet/resolve", body).await;
    let mut row = resolved["rows"][0].clone();
    let row_id = row["id"].clone();
    row["manual_rate_override"] = json!("50");
    row["note"] = json!("approved by duty officer");
    row.as_object_mut().unwrap().remove("effective_total");

    let body = json!({
        "employees": [ff1_employee("John Doe")],
        "rows": [row]
    });
    let (status, response) = post_json(router, "/worksheet/recompute", body).await;

    assert_eq!(status, StatusCode::OK);
    let recomputed = &response["rows"][0];
    assert_eq!(recomputed["id"], row_id);
    assert_eq!(recomputed["note"], "approved by duty officer");
    // Resolved 25/hr stands, but the effective total honors the override:
    // 50 * 3 hours.
    assert_eq!(decimal_field(&recomputed["rate"]), decimal("25"));
    assert_eq!(
        decimal_field(&recomputed["effective_total"]),
        decimal("150")
    );
}

#[tokio::test]
async fn test_recompute_flat_override_ignores_quantity() {
    let router = create_router_for_test();

    let (_, resolved) = post_json(
        create_router_for_test(),
        "/worksheet/resolve",
        json!({
            "employees": [ff1_employee("John Doe")],
            "rows": [import_row("John Doe", "Officer Stipend", "4")]
        }),
    )
    .await;
    let mut row = resolved["rows"][0].clone();
    row["manual_rate_override"] = json!("50");
    row.as_object_mut().unwrap().remove("effective_total");

    let (status, response) = post_json(
        router,
        "/worksheet/recompute",
        json!({
            "employees": [ff1_employee("John Doe")],
            "rows": [row]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        decimal_field(&response["rows"][0]["effective_total"]),
        decimal("50")
    );
}

#[tokio::test]
async fn test_recompute_applies_promotion() {
    let router = create_router_for_test();

    let (_, resolved) = post_json(
        create_router_for_test(),
        "/worksheet/resolve",
        json!({
            "employees": [ff1_employee("John Doe")],
            "rows": [import_row("Doe, John", "Overtime", "4")]
        }),
    )
    .await;
    let mut row = resolved["rows"][0].clone();
    row.as_object_mut().unwrap().remove("effective_total");

    // Promote to LT, then recompute the same row.
    let mut promoted = ff1_employee("John Doe");
    promoted["pay_level"] = json!("LT");
    let (status, response) = post_json(
        router,
        "/worksheet/recompute",
        json!({ "employees": [promoted], "rows": [row] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let recomputed = &response["rows"][0];
    assert_eq!(recomputed["id"], resolved["rows"][0]["id"]);
    assert_eq!(decimal_field(&recomputed["rate"]), decimal("31.50"));
    assert_eq!(decimal_field(&recomputed["total"]), decimal("126"));
}

// =============================================================================
// Accrual runs
// =============================================================================

#[tokio::test]
async fn test_accrual_run_posts_and_is_idempotent() {
    let body = json!({
        "employees": [ff1_employee("John Doe")],
        "month_key": "2026-03",
        "posted_on": "2026-03-01"
    });
    let (status, first) = post_json(create_router_for_test(), "/leave/accrual-run", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["summary"]["processed"], 1);
    let bank = &first["employees"][0]["leave_bank"];
    // Entry tier on a 24/48 schedule: 8 vacation + 4 personal hours.
    assert_eq!(decimal_field(&bank["vacation_balance"]), decimal("8"));
    assert_eq!(decimal_field(&bank["personal_balance"]), decimal("4"));
    assert_eq!(bank["history"].as_array().unwrap().len(), 1);
    assert_eq!(bank["history"][0]["kind"], "accrual");

    // Feed the updated roster straight back for the same month.
    let body = json!({
        "employees": first["employees"],
        "month_key": "2026-03",
        "posted_on": "2026-03-15"
    });
    let (status, second) = post_json(create_router_for_test(), "/leave/accrual-run", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["summary"]["processed"], 0);
    assert_eq!(second["summary"]["already_posted"], 1);
    let bank = &second["employees"][0]["leave_bank"];
    assert_eq!(bank["history"].as_array().unwrap().len(), 1);
    assert_eq!(decimal_field(&bank["vacation_balance"]), decimal("8"));
}

#[tokio::test]
async fn test_accrual_run_skips_frozen_and_prn() {
    let mut frozen = ff1_employee("Sam Hill");
    frozen["pto_status"] = json!("frozen");
    let prn = json!({
        "full_name": "Pat Kim",
        "employment_type": "prn"
    });
    let body = json!({
        "employees": [ff1_employee("John Doe"), frozen, prn],
        "month_key": "2026-03",
        "posted_on": "2026-03-01"
    });

    let (status, response) = post_json(create_router_for_test(), "/leave/accrual-run", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["summary"]["processed"], 1);
    assert_eq!(response["summary"]["skipped_frozen"], 1);
    assert_eq!(response["summary"]["skipped_ineligible"], 1);
    // Skipped employees keep no bank and get no transactions.
    assert_eq!(response["employees"][1]["leave_bank"], Value::Null);
    assert_eq!(response["employees"][2]["leave_bank"], Value::Null);
}

#[tokio::test]
async fn test_accrual_run_tenured_employee_gets_higher_tier() {
    let mut veteran = ff1_employee("Alex Stone");
    veteran["ft_start_date"] = json!("2014-01-15");
    let body = json!({
        "employees": [veteran],
        "month_key": "2026-03",
        "posted_on": "2026-03-01"
    });

    let (status, response) = post_json(create_router_for_test(), "/leave/accrual-run", body).await;

    assert_eq!(status, StatusCode::OK);
    let bank = &response["employees"][0]["leave_bank"];
    // 10+ tier on 12-hour shifts: 15 and 5 hours per month.
    assert_eq!(decimal_field(&bank["vacation_balance"]), decimal("15"));
    assert_eq!(decimal_field(&bank["personal_balance"]), decimal("5"));
    assert!(
        bank["history"][0]["description"]
            .as_str()
            .unwrap()
            .contains("10+ Years")
    );
}

#[tokio::test]
async fn test_accrual_run_rejects_unpadded_month_key() {
    // An unpadded month would parse as a date but never starts-with-match a
    // stored "YYYY-MM-DD" accrual date, defeating the idempotency guard.
    let body = json!({
        "employees": [ff1_employee("John Doe")],
        "month_key": "2026-3",
        "posted_on": "2026-03-01"
    });

    let (status, response) = post_json(create_router_for_test(), "/leave/accrual-run", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_accrual_run_rejects_bad_month_key() {
    let body = json!({
        "employees": [],
        "month_key": "March 2026"
    });

    let (status, response) = post_json(create_router_for_test(), "/leave/accrual-run", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Request validation
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/worksheet/resolve")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let body = json!({
        "rows": []
    });

    let (status, response) = post_json(create_router_for_test(), "/worksheet/resolve", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
    assert!(
        response["message"]
            .as_str()
            .unwrap()
            .contains("missing field")
    );
}
