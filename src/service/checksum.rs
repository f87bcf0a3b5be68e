//! Modulo-11 check digit arithmetic shared by the CPF and CNPJ validators.
//!
//! Both documents follow the same shape: a fixed number of decimal digits whose
//! last two are check digits, each computed from every digit before it. Only the
//! weighting differs, so the document modules supply a `check_digit_for` routine
//! and reuse the pipeline here.

use std::fmt;

use crate::error::TaxIdError;

/// Computes the check digit for the given leading digits.
pub type CheckDigitFn = fn(&[u8]) -> u8;

/// Collect the ASCII digits of `raw` into a fixed-size buffer.
///
/// Every other character is discarded. The whole input is scanned so that the
/// reported count is exact even when the input is far too long.
///
/// # Errors
///
/// Returns [`TaxIdError::InvalidLength`] unless exactly `N` digits are present.
pub fn extract_digits<const N: usize>(raw: &str) -> Result<[u8; N], TaxIdError> {
    let mut digits = [0u8; N];
    let mut found = 0usize;

    // ASCII digits never occur inside a multi-byte UTF-8 sequence.
    for byte in raw.bytes().filter(u8::is_ascii_digit) {
        if let Some(slot) = digits.get_mut(found) {
            *slot = byte - b'0';
        }
        found += 1;
    }

    if found == N {
        Ok(digits)
    } else {
        Err(TaxIdError::InvalidLength { expected: N, found })
    }
}

/// Whether every digit in the sequence is the same.
#[must_use]
pub fn is_repeated(digits: &[u8]) -> bool {
    digits
        .split_first()
        .is_none_or(|(first, rest)| rest.iter().all(|d| d == first))
}

/// Reduce a weighted sum to a check digit.
///
/// Remainders 0 and 1 map to 0; anything else maps to `11 - remainder`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn check_digit(sum: usize) -> u8 {
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Validate an `N`-digit document whose final two digits are check digits.
///
/// # Errors
///
/// Returns the first rule the input breaks: digit count, repeated digits, then
/// each check digit in order.
pub fn validate_digits<const N: usize>(
    raw: &str,
    check_digit_for: CheckDigitFn,
) -> Result<[u8; N], TaxIdError> {
    let digits = extract_digits::<N>(raw)?;

    if is_repeated(&digits) {
        return Err(TaxIdError::RepeatedDigits);
    }

    for position in [N - 2, N - 1] {
        let expected = check_digit_for(&digits[..position]);
        let found = digits[position];
        if expected != found {
            return Err(TaxIdError::CheckDigitMismatch {
                position,
                expected,
                found,
            });
        }
    }

    Ok(digits)
}

/// Fill the final two positions of `digits` with their check digits.
pub fn complete<const N: usize>(digits: &mut [u8; N], check_digit_for: CheckDigitFn) {
    for position in [N - 2, N - 1] {
        digits[position] = check_digit_for(&digits[..position]);
    }
}

/// Render digits as a bare numeric string.
#[must_use]
pub fn to_digit_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Write digits, inserting `separators` before the listed positions.
///
/// # Errors
///
/// Propagates formatter errors.
pub fn write_masked(
    f: &mut fmt::Formatter<'_>,
    digits: &[u8],
    separators: &[(usize, char)],
) -> fmt::Result {
    use fmt::Write;

    for (index, &digit) in digits.iter().enumerate() {
        if let Some(&(_, sep)) = separators.iter().find(|(at, _)| *at == index) {
            f.write_char(sep)?;
        }
        f.write_char(char::from(b'0' + digit))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_digits_strips_punctuation() {
        let digits = extract_digits::<4>("1.2-3/4").unwrap();
        assert_eq!(digits, [1, 2, 3, 4]);
    }

    #[test]
    fn test_extract_digits_counts_everything() {
        assert_eq!(
            extract_digits::<4>("123"),
            Err(TaxIdError::InvalidLength {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            extract_digits::<4>("1234567890"),
            Err(TaxIdError::InvalidLength {
                expected: 4,
                found: 10
            })
        );
        assert_eq!(
            extract_digits::<4>(""),
            Err(TaxIdError::InvalidLength {
                expected: 4,
                found: 0
            })
        );
    }

    #[test]
    fn test_extract_digits_ignores_non_ascii() {
        // Arabic-Indic and full-width digits are not decimal ASCII digits.
        let digits = extract_digits::<2>("١2３4").unwrap();
        assert_eq!(digits, [2, 4]);
    }

    #[test]
    fn test_is_repeated() {
        assert!(is_repeated(&[7, 7, 7]));
        assert!(is_repeated(&[]));
        assert!(!is_repeated(&[7, 7, 8]));
    }

    #[test]
    fn test_check_digit_reduction() {
        assert_eq!(check_digit(22), 0); // remainder 0
        assert_eq!(check_digit(23), 0); // remainder 1
        assert_eq!(check_digit(24), 9); // remainder 2
        assert_eq!(check_digit(32), 1); // remainder 10
        assert_eq!(check_digit(162), 3);
    }

    #[test]
    fn test_to_digit_string() {
        assert_eq!(to_digit_string(&[0, 1, 9]), "019");
    }
}
