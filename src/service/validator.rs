//! Validation service.
//!
//! Resolves the document kind, runs the matching validator and shapes the
//! outcome for the API. Also fronts the generator with request limits.

use crate::config::ValidationConfig;
use crate::domain::{BatchValidateResponse, DocumentKind, ValidateRequest, ValidationResponse};
use crate::error::{AppError, Result, TaxIdError};
use crate::service::cnpj::check_cnpj;
use crate::service::cpf::check_cpf;
use crate::service::generator::{generate_cnpj, generate_cpf};

/// Service for document validation and generation.
pub struct ValidationService {
    /// Maximum items accepted in one batch.
    max_batch_size: usize,
    /// Maximum documents generated per request.
    max_generate_count: u32,
}

impl ValidationService {
    /// Create a new validation service.
    #[must_use]
    pub const fn new(config: &ValidationConfig) -> Self {
        Self {
            max_batch_size: config.max_batch_size,
            max_generate_count: config.max_generate_count,
        }
    }

    /// Validate one document.
    ///
    /// When `kind` is `None` the kind is detected from the digit count; input
    /// matching neither kind is rejected with an `invalid_length` reason.
    #[must_use]
    pub fn validate(&self, kind: Option<DocumentKind>, raw: &str) -> ValidationResponse {
        let resolved = kind.or_else(|| DocumentKind::detect(raw));

        let response = match resolved {
            Some(DocumentKind::Cpf) => match check_cpf(raw) {
                Ok(cpf) => {
                    ValidationResponse::accepted(DocumentKind::Cpf, cpf.digits(), cpf.to_string())
                }
                Err(err) => ValidationResponse::rejected(resolved, &err),
            },
            Some(DocumentKind::Cnpj) => match check_cnpj(raw) {
                Ok(cnpj) => ValidationResponse::accepted(
                    DocumentKind::Cnpj,
                    cnpj.digits(),
                    cnpj.to_string(),
                ),
                Err(err) => ValidationResponse::rejected(resolved, &err),
            },
            None => {
                let found = raw.bytes().filter(u8::is_ascii_digit).count();
                ValidationResponse::rejected(None, &TaxIdError::UnrecognizedLength { found })
            }
        };

        // Raw values are personal data; never log them.
        let kind_label = resolved.map_or("unknown", DocumentKind::as_str);
        let valid_label = if response.valid { "true" } else { "false" };
        tracing::debug!(
            document_type = kind_label,
            valid = response.valid,
            reason = response.reason.as_deref(),
            "Document validated"
        );
        metrics::counter!(
            "taxid_validations_total",
            "type" => kind_label,
            "valid" => valid_label
        )
        .increment(1);

        response
    }

    /// Validate several documents, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` if the batch is empty or exceeds the configured size.
    pub fn validate_batch(&self, items: &[ValidateRequest]) -> Result<BatchValidateResponse> {
        if items.is_empty() {
            return Err(AppError::BadRequest("items must not be empty".to_string()));
        }
        if items.len() > self.max_batch_size {
            return Err(AppError::BadRequest(format!(
                "batch cannot exceed {} items",
                self.max_batch_size
            )));
        }

        let results = items
            .iter()
            .map(|item| self.validate(item.document_type, &item.value))
            .collect();

        Ok(BatchValidateResponse::new(results))
    }

    /// Generate random valid documents.
    ///
    /// # Arguments
    ///
    /// * `kind` - Document kind to generate
    /// * `count` - Number of documents
    /// * `formatted` - Render with the canonical mask instead of bare digits
    ///
    /// # Errors
    ///
    /// Returns `InvalidParam` if `count` is zero or above the configured maximum.
    pub fn generate(&self, kind: DocumentKind, count: u32, formatted: bool) -> Result<Vec<String>> {
        if count == 0 {
            return Err(AppError::InvalidParam("count must be at least 1".to_string()));
        }
        if count > self.max_generate_count {
            return Err(AppError::InvalidParam(format!(
                "count cannot exceed {}",
                self.max_generate_count
            )));
        }

        let mut rng = rand::rng();
        let ids = (0..count)
            .map(|_| match (kind, formatted) {
                (DocumentKind::Cpf, true) => generate_cpf(&mut rng).to_string(),
                (DocumentKind::Cpf, false) => generate_cpf(&mut rng).digits(),
                (DocumentKind::Cnpj, true) => generate_cnpj(&mut rng).to_string(),
                (DocumentKind::Cnpj, false) => generate_cnpj(&mut rng).digits(),
            })
            .collect();

        metrics::counter!("taxid_generated_total", "type" => kind.as_str())
            .increment(u64::from(count));

        Ok(ids)
    }
}
