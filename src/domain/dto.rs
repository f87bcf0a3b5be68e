//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::document::{DocumentKind, UNKNOWN_DOCUMENT_MESSAGE};
use crate::error::TaxIdError;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Request to validate one document.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    /// Document kind; detected from the digit count when absent.
    #[serde(rename = "type", default)]
    pub document_type: Option<DocumentKind>,

    /// Raw user input, punctuation allowed.
    pub value: String,
}

/// Outcome of validating one document.
///
/// An invalid document is a normal outcome, not an API error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the document passed every check.
    pub valid: bool,

    /// Kind the value was validated as (null if it could not be determined).
    #[serde(rename = "type")]
    pub document_type: Option<DocumentKind>,

    /// Bare digits (valid documents only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<String>,

    /// Canonical mask (valid documents only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,

    /// Machine-readable rejection reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Numeric rejection code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,

    /// Localized message for the form field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResponse {
    /// Response for a document that passed validation.
    #[must_use]
    pub const fn accepted(kind: DocumentKind, digits: String, formatted: String) -> Self {
        Self {
            valid: true,
            document_type: Some(kind),
            digits: Some(digits),
            formatted: Some(formatted),
            reason: None,
            code: None,
            message: None,
        }
    }

    /// Response for a rejected document.
    #[must_use]
    pub fn rejected(kind: Option<DocumentKind>, error: &TaxIdError) -> Self {
        let message = kind.map_or(UNKNOWN_DOCUMENT_MESSAGE, DocumentKind::invalid_message);

        Self {
            valid: false,
            document_type: kind,
            digits: None,
            formatted: None,
            reason: Some(error.reason().to_string()),
            code: Some(error.error_code().as_i32()),
            message: Some(message.to_string()),
        }
    }
}

/// Request to validate several documents at once.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchValidateRequest {
    /// Documents to validate, answered in the same order.
    pub items: Vec<ValidateRequest>,
}

/// Response for a batch validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchValidateResponse {
    /// Per-item outcomes, in request order.
    pub results: Vec<ValidationResponse>,

    /// Number of valid items.
    pub valid_count: usize,

    /// Number of invalid items.
    pub invalid_count: usize,
}

impl BatchValidateResponse {
    /// Build a batch response, tallying the outcomes.
    #[must_use]
    pub fn new(results: Vec<ValidationResponse>) -> Self {
        let valid_count = results.iter().filter(|r| r.valid).count();
        let invalid_count = results.len() - valid_count;
        Self {
            results,
            valid_count,
            invalid_count,
        }
    }
}

/// Response with a list of generated documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedIdsResponse {
    /// Document kind generated.
    #[serde(rename = "type")]
    pub document_type: DocumentKind,

    /// Generated documents.
    pub ids: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,
}
