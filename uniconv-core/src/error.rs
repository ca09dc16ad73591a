//! Structured errors for the presentation layer
//!
//! Errors never crash the process. They are values handed back to the
//! caller, which shows them inline and keeps accepting input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Input value is empty, non-numeric, NaN or infinite
    InvalidValue,
    /// Unit not recognized within the selected category
    UnknownUnit,
    /// Source and target unit belong to different categories
    IncompatibleUnits,
    /// Category name does not match any catalog category
    UnknownCategory,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidValue => "INVALID_VALUE",
            ErrorKind::UnknownUnit => "UNKNOWN_UNIT",
            ErrorKind::IncompatibleUnits => "INCOMPATIBLE_UNITS",
            ErrorKind::UnknownCategory => "UNKNOWN_CATEGORY",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Conversion failure, always user-correctable
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("[{kind}] {message}")]
pub struct ConversionError {
    /// Machine-readable kind, serialized as `code`
    #[serde(rename = "code")]
    pub kind: ErrorKind,

    /// Human-readable message
    pub message: String,

    /// Suggestion for fixing the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ConversionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_value(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidValue, format!("Invalid value: {}", details.into()))
            .with_suggestion("Enter a finite number such as 12.5 or -3e4")
    }

    pub fn unknown_unit(unit: &str, category: &str) -> Self {
        Self::new(
            ErrorKind::UnknownUnit,
            format!("Unknown unit '{}' for category {}", unit, category),
        )
        .with_suggestion(format!("Pick one of the {} units", category))
    }

    pub fn unknown_unit_anywhere(unit: &str) -> Self {
        Self::new(ErrorKind::UnknownUnit, format!("Unknown unit '{}'", unit))
            .with_suggestion("Check the spelling or list the units of a category")
    }

    pub fn incompatible_units(
        from: &str,
        from_category: &str,
        to: &str,
        to_category: &str,
    ) -> Self {
        Self::new(
            ErrorKind::IncompatibleUnits,
            format!(
                "Cannot convert {} ({}) to {} ({})",
                from, from_category, to, to_category
            ),
        )
        .with_suggestion("Source and target must belong to the same category")
    }

    pub fn unknown_category(name: &str, available: &[&str]) -> Self {
        Self::new(ErrorKind::UnknownCategory, format!("Unknown category '{}'", name))
            .with_suggestion(format!("Available: {}", available.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ErrorKind::InvalidValue.code(), "INVALID_VALUE");
        assert_eq!(ErrorKind::UnknownUnit.code(), "UNKNOWN_UNIT");
        assert_eq!(ErrorKind::IncompatibleUnits.code(), "INCOMPATIBLE_UNITS");
        assert_eq!(ErrorKind::UnknownCategory.code(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_display() {
        let err = ConversionError::unknown_unit("bogus", "Length");
        assert_eq!(err.to_string(), "[UNKNOWN_UNIT] Unknown unit 'bogus' for category Length");
    }

    #[test]
    fn test_serialize() {
        let err = ConversionError::invalid_value("NaN");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_VALUE");
        assert!(json.get("kind").is_none());
        assert_eq!(json["message"], "Invalid value: NaN");
        assert!(json["suggestion"].is_string());

        let bare = ConversionError::new(ErrorKind::UnknownUnit, "x");
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("suggestion").is_none());
    }
}
