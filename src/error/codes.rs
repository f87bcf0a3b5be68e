//! Error code constants.
//!
//! Error codes are organized by category:
//! - 2xxx: Authentication/Authorization errors
//! - 3xxx: Validation errors (31xx: document rejection reasons)
//! - 4xxx: Resource errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Authentication/Authorization Errors (2xxx) =====

    /// Authentication required.
    pub const UNAUTHORIZED: Self = Self(2001);

    /// Invalid API key.
    pub const INVALID_TOKEN: Self = Self(2003);

    // ===== Validation Errors (3xxx) =====

    /// Bad request / invalid parameters.
    pub const BAD_REQUEST: Self = Self(3001);

    /// Missing required parameter.
    pub const MISSING_PARAM: Self = Self(3002);

    /// Invalid parameter value.
    pub const INVALID_PARAM: Self = Self(3003);

    /// Document has the wrong number of digits.
    pub const INVALID_LENGTH: Self = Self(3101);

    /// Document is a single digit repeated.
    pub const REPEATED_DIGITS: Self = Self(3102);

    /// Document check digit does not match.
    pub const CHECK_DIGIT_MISMATCH: Self = Self(3103);

    // ===== Resource Errors (4xxx) =====

    /// Resource not found.
    pub const NOT_FOUND: Self = Self(4001);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::UNAUTHORIZED.as_i32(), 2001);
        assert_eq!(ErrorCode::BAD_REQUEST.as_i32(), 3001);
        assert_eq!(ErrorCode::CHECK_DIGIT_MISMATCH.as_i32(), 3103);
        assert_eq!(ErrorCode::NOT_FOUND.as_i32(), 4001);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::REPEATED_DIGITS.to_string(), "3102");
        assert_eq!(i32::from(ErrorCode::INVALID_TOKEN), 2003);
    }
}
