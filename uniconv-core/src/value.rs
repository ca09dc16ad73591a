//! Validation of user-supplied numeric values

use crate::ConversionError;

/// Parse a value typed by the user.
///
/// Accepts anything `f64::from_str` accepts after trimming, then rejects
/// the non-finite results (`NaN`, `inf`) the same way as empty or
/// non-numeric text.
pub fn parse_value(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::invalid_value("empty input"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::invalid_value(format!("'{}' is not a number", trimmed)))?;

    ensure_finite(value)
}

/// Reject NaN and infinities
pub fn ensure_finite(value: f64) -> Result<f64, ConversionError> {
    if value.is_nan() {
        Err(ConversionError::invalid_value("NaN"))
    } else if value.is_infinite() {
        Err(ConversionError::invalid_value("infinite"))
    } else {
        Ok(value)
    }
}
