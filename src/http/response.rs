//! Wire types for API responses.
//!
//! # Responsibilities
//! - Shape the success payload for primality checks
//! - Shape the structured error payload
//! - Rename fields on the wire only (`is_prime`, `statusCode`)
//!
//! # Design Decisions
//! - Immutable value structs, built once per request and dropped after send
//! - Serde renames keep the Rust field names idiomatic while matching the
//!   published JSON contract

use serde::{Deserialize, Serialize};

/// Successful primality check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeCheckResponse {
    /// The queried value.
    pub number: i64,

    /// Whether the value is prime.
    #[serde(rename = "is_prime")]
    pub prime: bool,

    /// Human-readable verdict, a function of (number, prime).
    pub message: String,
}

/// Structured error payload returned for every recognized failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short taxonomy label, e.g. "Invalid Argument".
    pub category: String,

    /// Human-readable cause.
    pub detail: String,

    /// HTTP status code, always equal to the response status.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_check_wire_names() {
        let body = PrimeCheckResponse {
            number: 7,
            prime: true,
            message: "7 is a prime number".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "number": 7,
                "is_prime": true,
                "message": "7 is a prime number",
            })
        );
    }

    #[test]
    fn test_error_wire_names() {
        let body = ErrorResponse {
            category: "Not Found".to_string(),
            detail: "The requested resource was not found".to_string(),
            status_code: 404,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert!(json.get("status_code").is_none());
    }
}
