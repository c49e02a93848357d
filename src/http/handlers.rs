//! Request handlers for the API routes.
//!
//! # Responsibilities
//! - Bind the number from the path segment or query parameter
//! - Validate it (parseable i64, strictly positive)
//! - Invoke the primality engine and shape the success payload
//!
//! # Design Decisions
//! - Path segments are bound as raw strings and parsed explicitly, so an
//!   unparseable value reports Invalid Number Format instead of a framework
//!   rejection
//! - Handlers are stateless; both entry points funnel into one check

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query};
use axum::http::Method;
use axum::Json;
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::response::PrimeCheckResponse;
use crate::prime;

/// Query parameters for `GET /prime`.
///
/// `number` is optional at the binding layer so its absence can be reported
/// as Missing Parameter rather than a generic rejection.
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    number: Option<String>,
}

/// `GET /prime/check/{number}` — primary entry point.
pub async fn check_prime_path(
    Path(number): Path<String>,
) -> Result<Json<PrimeCheckResponse>, ApiError> {
    let n = parse_number(&number)?;
    check(n).map(Json)
}

/// `GET /prime?number=N` — alternate entry point, identical semantics.
///
/// The extractor result is handled explicitly so a malformed query string
/// still produces a structured error instead of a framework rejection.
pub async fn check_prime_query(
    params: Result<Query<CheckParams>, QueryRejection>,
) -> Result<Json<PrimeCheckResponse>, ApiError> {
    let Query(params) = params.map_err(|_| ApiError::TypeMismatch("number".to_string()))?;
    let raw = params.number.ok_or(ApiError::MissingParameter("number"))?;
    let n = parse_number(&raw)?;
    check(n).map(Json)
}

/// `GET /health` — liveness probe.
pub async fn health() -> &'static str {
    "Prime Number API is running!"
}

/// Fallback for requests matching no route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method.to_string())
}

fn parse_number(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidNumberFormat)
}

fn check(n: i64) -> Result<PrimeCheckResponse, ApiError> {
    if n <= 0 {
        return Err(ApiError::InvalidArgument(
            "Number must be greater than 0".to_string(),
        ));
    }

    let prime = prime::is_prime(n);
    tracing::debug!(number = n, prime, "primality check");

    Ok(PrimeCheckResponse {
        number: n,
        prime,
        message: prime::describe(n, prime),
    })
}
