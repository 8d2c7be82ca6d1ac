//! In-process smoke checks against the API router.

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy)]
struct Check {
    name: &'static str,
    uri: &'static str,
    expect_status: StatusCode,
    expect_field: Option<(&'static str, &'static str)>,
}

const CHECKS: [Check; 3] = [
    Check {
        name: "health reports healthy",
        uri: "/health",
        expect_status: StatusCode::OK,
        expect_field: Some(("status", "healthy")),
    },
    Check {
        name: "user 1 is served",
        uri: "/users/1",
        expect_status: StatusCode::OK,
        expect_field: Some(("username", "user1")),
    },
    Check {
        name: "unknown user is not found",
        uri: "/users/999",
        expect_status: StatusCode::NOT_FOUND,
        expect_field: None,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub name: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmokeReport {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CheckFailure>,
}

impl SmokeReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Run every check in order; a failing check does not stop the rest.
pub async fn run_smoke_checks(router: Router) -> SmokeReport {
    let mut report = SmokeReport::default();

    for check in CHECKS {
        match run_check(router.clone(), &check).await {
            Ok(()) => {
                tracing::info!(check = check.name, "passed");
                report.passed += 1;
            }
            Err(reason) => {
                tracing::error!(check = check.name, %reason, "failed");
                report.failed += 1;
                report.failures.push(CheckFailure {
                    name: check.name,
                    reason,
                });
            }
        }
    }

    report
}

async fn run_check(router: Router, check: &Check) -> Result<(), String> {
    let req = Request::builder()
        .method("GET")
        .uri(check.uri)
        .body(Body::empty())
        .map_err(|err| err.to_string())?;

    let resp = router.oneshot(req).await.map_err(|err| err.to_string())?;
    let status = resp.status();
    if status != check.expect_status {
        return Err(format!("expected status {}, got {}", check.expect_status, status));
    }

    let Some((field, expected)) = check.expect_field else {
        return Ok(());
    };

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .map_err(|err| err.to_string())?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|err| err.to_string())?;

    match value.get(field).and_then(Value::as_str) {
        Some(actual) if actual == expected => Ok(()),
        other => Err(format!("expected `{field}` to be {expected:?}, got {other:?}")),
    }
}
