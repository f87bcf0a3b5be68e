//! CPF (Cadastro de Pessoas Físicas) validation.
//!
//! A CPF is 11 digits: a 9-digit base followed by two check digits. Each check
//! digit weights the digits before it from `len + 1` down to 2.

use std::fmt;
use std::str::FromStr;

use crate::error::TaxIdError;
use crate::service::checksum;

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// A CPF that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
    /// Wrap digits whose check digits are already known to be correct.
    pub(crate) const fn from_valid_digits(digits: [u8; CPF_LEN]) -> Self {
        Self(digits)
    }

    /// Bare 11-digit string.
    #[must_use]
    pub fn digits(&self) -> String {
        checksum::to_digit_string(&self.0)
    }
}

/// Renders the canonical `000.000.000-00` mask.
impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        checksum::write_masked(f, &self.0, &[(3, '.'), (6, '.'), (9, '-')])
    }
}

impl FromStr for Cpf {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_cpf(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = TaxIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        check_cpf(value)
    }
}

/// Check digit for the leading digits of a CPF.
pub(crate) fn check_digit_for(body: &[u8]) -> u8 {
    let sum: usize = body
        .iter()
        .zip((2..=body.len() + 1).rev())
        .map(|(&digit, weight)| usize::from(digit) * weight)
        .sum();
    checksum::check_digit(sum)
}

/// Validate a CPF, reporting why it was rejected.
///
/// Punctuation and any other non-digit characters are ignored.
///
/// # Errors
///
/// Returns a [`TaxIdError`] describing the first rule the input breaks.
pub fn check_cpf(raw: &str) -> Result<Cpf, TaxIdError> {
    checksum::validate_digits::<CPF_LEN>(raw, check_digit_for).map(Cpf)
}

/// Whether `raw` is a valid CPF.
#[must_use]
pub fn validate_cpf(raw: &str) -> bool {
    check_cpf(raw).is_ok()
}
