//! Significant-digit formatting for displayed results

use serde::{Deserialize, Serialize};

/// Number of significant digits used for displayed results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPrecision(u32);

impl DisplayPrecision {
    pub const MIN: u32 = 1;
    /// f64 round-trips with 17 digits; more is noise
    pub const MAX: u32 = 17;

    /// Chart labels are shorter than the headline result
    pub const CHART: DisplayPrecision = DisplayPrecision(4);

    pub fn new(digits: u32) -> Self {
        DisplayPrecision(digits.clamp(Self::MIN, Self::MAX))
    }

    pub fn digits(&self) -> u32 {
        self.0
    }

    pub fn format(&self, value: f64) -> String {
        format_sig(value, self.0)
    }
}

impl Default for DisplayPrecision {
    fn default() -> Self {
        DisplayPrecision(6)
    }
}

/// Format `value` with `digits` significant digits, `%g` style.
///
/// Trailing zeros are dropped. Scientific notation with a signed,
/// two-digit exponent is used when the decimal exponent is below -4 or
/// at least `digits`.
pub fn format_sig(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }

    let digits = digits.clamp(DisplayPrecision::MIN, DisplayPrecision::MAX) as usize;

    // Round once in scientific form so the exponent reflects the rounded value
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        strip_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
