//! Document kinds.

use serde::{Deserialize, Deserializer, Serialize};

/// Message shown when the document kind cannot be determined.
pub const UNKNOWN_DOCUMENT_MESSAGE: &str = "Documento inválido.";

/// Brazilian taxpayer document kind.
///
/// Serialized lowercase; parsed case-insensitively from strings and from
/// JSON or query parameters alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Individual taxpayer (11 digits).
    Cpf,
    /// Legal entity (14 digits).
    Cnpj,
}

impl DocumentKind {
    /// Lowercase identifier, as used on the wire and in metric labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
        }
    }

    /// Number of digits a document of this kind carries.
    #[must_use]
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Cpf => crate::service::cpf::CPF_LEN,
            Self::Cnpj => crate::service::cnpj::CNPJ_LEN,
        }
    }

    /// Localized message displayed next to the form field on rejection.
    #[must_use]
    pub const fn invalid_message(self) -> &'static str {
        match self {
            Self::Cpf => "CPF inválido.",
            Self::Cnpj => "CNPJ inválido.",
        }
    }

    /// Guess the kind from the number of digits in `raw`.
    ///
    /// Returns `None` unless the digit count matches exactly one kind.
    #[must_use]
    pub fn detect(raw: &str) -> Option<Self> {
        let count = raw.bytes().filter(u8::is_ascii_digit).count();
        [Self::Cpf, Self::Cnpj]
            .into_iter()
            .find(|kind| kind.digit_count() == count)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            _ => Err(format!("unknown document type: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for DocumentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(
            DocumentKind::detect("111.444.777-35"),
            Some(DocumentKind::Cpf)
        );
        assert_eq!(
            DocumentKind::detect("11.222.333/0001-81"),
            Some(DocumentKind::Cnpj)
        );
        assert_eq!(DocumentKind::detect("123"), None);
        assert_eq!(DocumentKind::detect(""), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&DocumentKind::Cnpj).unwrap(),
            "\"cnpj\""
        );
        for spelling in ["\"cpf\"", "\"CPF\"", "\"Cpf\""] {
            let kind: DocumentKind = serde_json::from_str(spelling).unwrap();
            assert_eq!(kind, DocumentKind::Cpf);
        }
        assert!(serde_json::from_str::<DocumentKind>("\"rg\"").is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Cnpj".parse::<DocumentKind>(), Ok(DocumentKind::Cnpj));
        assert!("rg".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_serde_and_from_str_agree() {
        for spelling in ["cpf", "CPF", "Cpf", "cNpJ", "CNPJ", "rg", ""] {
            let parsed = spelling.parse::<DocumentKind>().ok();
            let deserialized = serde_json::from_value::<DocumentKind>(spelling.into()).ok();
            assert_eq!(parsed, deserialized, "{spelling:?}");
        }
    }

    #[test]
    fn test_invalid_messages() {
        assert_eq!(DocumentKind::Cpf.invalid_message(), "CPF inválido.");
        assert_eq!(DocumentKind::Cnpj.invalid_message(), "CNPJ inválido.");
    }
}
