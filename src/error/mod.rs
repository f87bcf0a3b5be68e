//! Error handling module.
//!
//! This module provides unified error handling with proper HTTP status code mapping
//! and standardized API error responses, plus the rejection reasons reported by the
//! document validators.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub use codes::ErrorCode;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Authentication failed.
    #[error("Authentication failed")]
    Unauthorized,

    /// Presented API key does not match.
    #[error("Invalid API key")]
    InvalidToken,

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Required parameter missing.
    #[error("Missing parameter: {0}")]
    MissingParam(String),

    /// Parameter present but out of range or malformed.
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Unauthorized => ErrorCode::UNAUTHORIZED,
            Self::InvalidToken => ErrorCode::INVALID_TOKEN,
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::MissingParam(_) => ErrorCode::MISSING_PARAM,
            Self::InvalidParam(_) => ErrorCode::INVALID_PARAM,
            Self::NotFound(_) => ErrorCode::NOT_FOUND,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) | Self::MissingParam(_) | Self::InvalidParam(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().as_i32();
        let message = self.to_string();

        tracing::error!(
            error_code = code,
            status = %status,
            message = %message,
            "Request failed"
        );

        let body = Json(json!({
            "code": code,
            "message": message,
            "data": null
        }));

        (status, body).into_response()
    }
}

/// Reason a candidate CPF or CNPJ was rejected.
///
/// Rules are checked in order (length, repeated digits, first check digit,
/// second check digit) and the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TaxIdError {
    /// Wrong number of digits after stripping punctuation.
    #[error("expected {expected} digits, found {found}")]
    InvalidLength {
        /// Required digit count.
        expected: usize,
        /// Digits actually present.
        found: usize,
    },

    /// Digit count matches no document kind, so none could be checked.
    #[error("expected 11 or 14 digits, found {found}")]
    UnrecognizedLength {
        /// Digits actually present.
        found: usize,
    },

    /// Every digit is the same.
    #[error("all digits are identical")]
    RepeatedDigits,

    /// A check digit does not match the computed value.
    #[error("check digit at position {position} should be {expected}, found {found}")]
    CheckDigitMismatch {
        /// Zero-based index of the check digit.
        position: usize,
        /// Computed check digit.
        expected: u8,
        /// Digit present in the input.
        found: u8,
    },
}

impl TaxIdError {
    /// Machine-readable reason, as exposed by the API.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } | Self::UnrecognizedLength { .. } => "invalid_length",
            Self::RepeatedDigits => "repeated_digits",
            Self::CheckDigitMismatch { .. } => "check_digit_mismatch",
        }
    }

    /// Get the error code for this rejection.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidLength { .. } | Self::UnrecognizedLength { .. } => {
                ErrorCode::INVALID_LENGTH
            }
            Self::RepeatedDigits => ErrorCode::REPEATED_DIGITS,
            Self::CheckDigitMismatch { .. } => ErrorCode::CHECK_DIGIT_MISMATCH,
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
