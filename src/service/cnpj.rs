//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation.
//!
//! A CNPJ is 14 digits: an 8-digit root, a 4-digit branch number and two check
//! digits.

use std::fmt;
use std::str::FromStr;

use crate::error::TaxIdError;
use crate::service::checksum;

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

/// A CNPJ that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cnpj([u8; CNPJ_LEN]);

impl Cnpj {
    /// Wrap digits whose check digits are already known to be correct.
    pub(crate) const fn from_valid_digits(digits: [u8; CNPJ_LEN]) -> Self {
        Self(digits)
    }

    /// Bare 14-digit string.
    #[must_use]
    pub fn digits(&self) -> String {
        checksum::to_digit_string(&self.0)
    }

    /// The 4-digit branch number (`0001` for headquarters).
    #[must_use]
    pub fn branch(&self) -> String {
        checksum::to_digit_string(&self.0[8..12])
    }
}

/// Renders the canonical `00.000.000/0000-00` mask.
impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        checksum::write_masked(f, &self.0, &[(2, '.'), (5, '.'), (8, '/'), (12, '-')])
    }
}

impl FromStr for Cnpj {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_cnpj(s)
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = TaxIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        check_cnpj(value)
    }
}

/// Check digit for the leading digits of a CNPJ.
///
/// The weight starts at `len - 7` and counts down, wrapping back to 9 after 2.
/// For the 12-digit pass that is `5,4,3,2,9,8,7,6,5,4,3,2`; the 13-digit pass
/// starts at 6.
pub(crate) fn check_digit_for(body: &[u8]) -> u8 {
    let mut factor = body.len().saturating_sub(7);
    let mut sum = 0usize;

    for &digit in body {
        sum += usize::from(digit) * factor;
        factor = if factor <= 2 { 9 } else { factor - 1 };
    }

    checksum::check_digit(sum)
}

/// Validate a CNPJ, reporting why it was rejected.
///
/// Punctuation and any other non-digit characters are ignored.
///
/// # Errors
///
/// Returns a [`TaxIdError`] describing the first rule the input breaks.
pub fn check_cnpj(raw: &str) -> Result<Cnpj, TaxIdError> {
    checksum::validate_digits::<CNPJ_LEN>(raw, check_digit_for).map(Cnpj)
}

/// Whether `raw` is a valid CNPJ.
#[must_use]
pub fn validate_cnpj(raw: &str) -> bool {
    check_cnpj(raw).is_ok()
}
