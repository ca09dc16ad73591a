//! Free-text parsing - quantities like "5 km" and queries like "100 km to mi"

use uniconv_core::{parse_value, ConversionError, ErrorKind};
use crate::{ConversionRequest, Unit, UnitCatalog};

/// Separators accepted between source and target unit, in priority order
const SEPARATORS: [&str; 5] = ["->", "→", " to ", " in ", " as "];

/// Parse a conversion like "km->mi", "C → F" or "kg to lb"
pub fn parse_conversion<'a>(
    catalog: &'a UnitCatalog,
    s: &str,
) -> Result<(&'a Unit, &'a Unit), ConversionError> {
    let (from, to) = split_conversion(s)?;
    let from_unit = lookup(catalog, from)?;
    let to_unit = lookup(catalog, to)?;
    Ok((from_unit, to_unit))
}

/// Parse a quantity string like "5 m", "100kg" or "-3.5e2 °F"
pub fn parse_quantity<'a>(
    catalog: &'a UnitCatalog,
    s: &str,
) -> Result<(f64, &'a Unit), ConversionError> {
    let s = s.trim();
    let (number, unit) = split_number(s).ok_or_else(|| {
        ConversionError::invalid_value(format!("no number found in '{}'", s))
    })?;

    let value = parse_value(number)?;
    let unit = lookup(catalog, unit)?;
    Ok((value, unit))
}

/// Parse a complete query like "100 km to mi".
///
/// The category is taken from the source unit; the facade still checks
/// that the target belongs to it.
pub fn parse_query(catalog: &UnitCatalog, s: &str) -> Result<ConversionRequest, ConversionError> {
    let (quantity, target) = split_conversion(s)?;
    let (value, from) = parse_quantity(catalog, quantity)?;

    Ok(ConversionRequest::new(from.category, from.key, target.trim(), value))
}

fn lookup<'a>(catalog: &'a UnitCatalog, name: &str) -> Result<&'a Unit, ConversionError> {
    catalog
        .lookup(name)
        .ok_or_else(|| ConversionError::unknown_unit_anywhere(name.trim()))
}

/// Split on the last occurrence of the highest-priority separator present,
/// so "5 in in cm" reads as ("5 in", "cm")
fn split_conversion(s: &str) -> Result<(&str, &str), ConversionError> {
    let s = s.trim();
    let invalid = || {
        ConversionError::new(
            ErrorKind::UnknownUnit,
            format!("invalid conversion format: '{}'", s),
        )
        .with_suggestion("Use 'from -> to', e.g. 'km -> mi' or '100 km to mi'")
    };

    let (left, right) = SEPARATORS
        .iter()
        .find_map(|sep| s.rfind(sep).map(|pos| (&s[..pos], &s[pos + sep.len()..])))
        .ok_or_else(invalid)?;

    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        return Err(invalid());
    }
    Ok((left, right))
}

/// Split "12.5e3km" into ("12.5e3", "km").
///
/// An exponent marker only counts when a digit precedes it and a digit
/// (optionally signed) follows, so "5 eggs" is not eaten.
fn split_number(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' => end += 1,
            b'e' | b'E' if seen_digit => {
                let mut next = end + 1;
                if matches!(bytes.get(next), Some(b'+') | Some(b'-')) {
                    next += 1;
                }
                if matches!(bytes.get(next), Some(b'0'..=b'9')) {
                    end = next;
                } else {
                    break;
                }
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    Some((&s[..end], s[end..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn catalog() -> UnitCatalog {
        UnitCatalog::standard().unwrap()
    }

    #[test]
    fn test_parse_conversion() {
        let cat = catalog();
        let (from, to) = parse_conversion(&cat, "km->mi").unwrap();
        assert_eq!(from.key, "kilometer");
        assert_eq!(to.key, "mile");

        let (from, to) = parse_conversion(&cat, "C → F").unwrap();
        assert_eq!(from.key, "celsius");
        assert_eq!(to.key, "fahrenheit");

        let (from, to) = parse_conversion(&cat, "pounds to kg").unwrap();
        assert_eq!(from.key, "pound");
        assert_eq!(to.key, "kilogram");
    }

    #[test]
    fn test_parse_conversion_errors() {
        let cat = catalog();
        assert!(parse_conversion(&cat, "km mi").is_err());
        assert!(parse_conversion(&cat, "-> mi").is_err());
        let err = parse_conversion(&cat, "km -> parsecs").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownUnit);
    }

    #[test]
    fn test_parse_quantity() {
        let cat = catalog();
        let (value, unit) = parse_quantity(&cat, "5 m").unwrap();
        assert_eq!(value, 5.0);
        assert_eq!(unit.key, "meter");

        let (value, unit) = parse_quantity(&cat, "100kg").unwrap();
        assert_eq!(value, 100.0);
        assert_eq!(unit.key, "kilogram");

        let (value, unit) = parse_quantity(&cat, "-3.5e2 °F").unwrap();
        assert_eq!(value, -350.0);
        assert_eq!(unit.key, "fahrenheit");

        let (value, unit) = parse_quantity(&cat, "2 fl oz").unwrap();
        assert_eq!(value, 2.0);
        assert_eq!(unit.key, "fluid_ounce");
    }

    #[test]
    fn test_parse_quantity_errors() {
        let cat = catalog();
        assert_eq!(parse_quantity(&cat, "km").unwrap_err().kind, ErrorKind::InvalidValue);
        assert_eq!(parse_quantity(&cat, "1.2.3 km").unwrap_err().kind, ErrorKind::InvalidValue);
        assert_eq!(parse_quantity(&cat, "5").unwrap_err().kind, ErrorKind::UnknownUnit);
        assert_eq!(parse_quantity(&cat, "5 eggs").unwrap_err().kind, ErrorKind::UnknownUnit);
    }

    #[test]
    fn test_parse_query() {
        let cat = catalog();
        let request = parse_query(&cat, "100 km to mi").unwrap();
        assert_eq!(request.category, Category::Length);
        assert_eq!(request.from, "kilometer");
        assert_eq!(request.to, "mi");
        assert_eq!(request.value, 100.0);

        let request = parse_query(&cat, "5 in in cm").unwrap();
        assert_eq!(request.from, "inch");
        assert_eq!(request.to, "cm");
        assert_eq!(request.value, 5.0);

        let request = parse_query(&cat, "98.6 °F -> °C").unwrap();
        assert_eq!(request.category, Category::Temperature);
    }

    #[test]
    fn test_split_number() {
        assert_eq!(split_number("12.5e3km"), Some(("12.5e3", "km")));
        assert_eq!(split_number("5 eggs"), Some(("5", "eggs")));
        assert_eq!(split_number("7e"), Some(("7", "e")));
        assert_eq!(split_number("-2 K"), Some(("-2", "K")));
        assert_eq!(split_number("abc"), None);
    }
}
