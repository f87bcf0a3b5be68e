//! Domain models for the tax-ID worker.
//!
//! This module contains the document kinds and the API contracts.

pub mod document;
pub mod dto;

pub use document::{DocumentKind, UNKNOWN_DOCUMENT_MESSAGE};
pub use dto::{
    ApiResponse, BatchValidateRequest, BatchValidateResponse, GeneratedIdsResponse,
    HealthResponse, ValidateRequest, ValidationResponse,
};
