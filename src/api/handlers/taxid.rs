//! Document validation and generation handlers.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::Uri,
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::domain::{
    ApiResponse, BatchValidateRequest, BatchValidateResponse, DocumentKind, GeneratedIdsResponse,
    ValidateRequest, ValidationResponse,
};
use crate::error::{AppError, Result};

/// Query parameters for single validation.
#[derive(Debug, Deserialize)]
pub struct ValidateQuery {
    /// Document kind; detected when absent.
    #[serde(rename = "type", default)]
    pub document_type: Option<DocumentKind>,

    /// Raw value to validate.
    pub value: Option<String>,
}

/// Query parameters for generation.
#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    /// Document kind to generate.
    #[serde(rename = "type", default)]
    pub document_type: Option<DocumentKind>,

    /// Number of documents to generate (default: 1).
    #[serde(default = "default_count")]
    pub count: u32,

    /// Apply the canonical mask.
    #[serde(default)]
    pub formatted: bool,
}

const fn default_count() -> u32 {
    1
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidParam(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Validate a document given in the query string.
pub async fn validate_query(
    State(state): State<AppState>,
    query: std::result::Result<Query<ValidateQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<ValidationResponse>>> {
    let Query(query) = query?;
    let value = query
        .value
        .ok_or_else(|| AppError::MissingParam("value".to_string()))?;

    let response = state
        .validation_service
        .validate(query.document_type, &value);

    Ok(Json(ApiResponse::success(response)))
}

/// Validate a document given as a JSON body.
pub async fn validate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ValidationResponse>>> {
    let Json(request) = payload?;

    let response = state
        .validation_service
        .validate(request.document_type, &request.value);

    Ok(Json(ApiResponse::success(response)))
}

/// Validate several documents in one request.
pub async fn validate_batch(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BatchValidateRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BatchValidateResponse>>> {
    let Json(request) = payload?;

    let response = state.validation_service.validate_batch(&request.items)?;

    Ok(Json(ApiResponse::success(response)))
}

/// Generate random valid documents.
pub async fn generate(
    State(state): State<AppState>,
    query: std::result::Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<GeneratedIdsResponse>>> {
    let Query(query) = query?;
    let document_type = query
        .document_type
        .ok_or_else(|| AppError::MissingParam("type".to_string()))?;

    let ids = state
        .validation_service
        .generate(document_type, query.count, query.formatted)?;

    Ok(Json(ApiResponse::success(GeneratedIdsResponse {
        document_type,
        ids,
    })))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
