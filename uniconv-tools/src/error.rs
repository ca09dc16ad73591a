//! Tool errors

use thiserror::Error;
use uniconv_core::ConversionError;

/// Failure of a tool call
///
/// Argument problems are protocol errors; a `Conversion` failure is a
/// normal outcome the user fixes and retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("{tool}: missing argument '{arg}'")]
    MissingArgument { tool: &'static str, arg: &'static str },

    #[error("{tool}: invalid argument '{arg}': {reason}")]
    InvalidArgument {
        tool: &'static str,
        arg: &'static str,
        reason: String,
    },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String, similar: Vec<String> },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl ToolError {
    pub fn missing(tool: &'static str, arg: &'static str) -> Self {
        ToolError::MissingArgument { tool, arg }
    }

    pub fn invalid(tool: &'static str, arg: &'static str, reason: impl Into<String>) -> Self {
        ToolError::InvalidArgument {
            tool,
            arg,
            reason: reason.into(),
        }
    }

    /// True when the error should be shown to the user inline rather
    /// than reported as a malformed call
    pub fn is_conversion(&self) -> bool {
        matches!(self, ToolError::Conversion(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniconv_core::ErrorKind;

    #[test]
    fn test_display() {
        assert_eq!(
            ToolError::missing("convert", "from").to_string(),
            "convert: missing argument 'from'"
        );
        assert_eq!(
            ToolError::invalid("history", "limit", "must be a non-negative integer").to_string(),
            "history: invalid argument 'limit': must be a non-negative integer"
        );
    }

    #[test]
    fn test_conversion_is_transparent() {
        let err: ToolError = ConversionError::invalid_value("empty input").into();
        assert!(err.is_conversion());
        assert_eq!(err.to_string(), "[INVALID_VALUE] Invalid value: empty input");
        match err {
            ToolError::Conversion(e) => assert_eq!(e.kind, ErrorKind::InvalidValue),
            other => panic!("unexpected {:?}", other),
        }
    }
}
