//! A value expressed in every unit of its category

use serde::Serialize;
use tracing::debug;
use uniconv_core::ConversionError;
use uniconv_units::{Category, Converter};

/// One row of a comparison: the value in a single unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    /// Catalog key of the unit
    pub unit: String,
    pub symbol: String,
    /// Display label ("Cubic Meter")
    pub label: String,
    pub value: f64,
    /// True for the unit the input was expressed in
    pub is_source: bool,
}

/// Express `value` (in `unit`) in every unit of `category`.
///
/// Entries follow the catalog's declared order and include the source
/// unit itself, whose value is passed through unchanged. A single-unit
/// category yields a single entry.
pub fn build_comparison(
    converter: &Converter,
    category: Category,
    value: f64,
    unit: &str,
) -> Result<Vec<ComparisonEntry>, ConversionError> {
    let source = converter.catalog().unit_in(category, unit)?;

    let entries = converter
        .catalog()
        .units(category)
        .iter()
        .map(|target| {
            let converted = converter.convert_value(category, source.key, target.key, value)?;
            Ok(ComparisonEntry {
                unit: target.key.to_string(),
                symbol: target.symbol.to_string(),
                label: target.display_name(),
                value: converted.value,
                is_source: target.key == source.key,
            })
        })
        .collect::<Result<Vec<_>, ConversionError>>()?;

    debug!(category = %category, unit = source.key, entries = entries.len(), "comparison built");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use uniconv_core::ErrorKind;
    use uniconv_units::{Unit, UnitCatalog};

    fn converter() -> Converter {
        Converter::new(Arc::new(UnitCatalog::standard().unwrap()))
    }

    #[test]
    fn test_one_entry_per_unit_in_order() {
        let c = converter();
        for category in Category::ALL {
            let units = c.catalog().units(category);
            let entries = build_comparison(&c, category, 3.0, units[0].key).unwrap();
            let keys: Vec<_> = entries.iter().map(|e| e.unit.as_str()).collect();
            let expected: Vec<_> = units.iter().map(|u| u.key).collect();
            assert_eq!(keys, expected, "{}", category);
        }
    }

    #[test]
    fn test_source_entry_is_unchanged() {
        let c = converter();
        let entries = build_comparison(&c, Category::Length, 0.1, "km").unwrap();
        let source: Vec<_> = entries.iter().filter(|e| e.is_source).collect();
        assert_eq!(source.len(), 1);
        assert_eq!(source[0].unit, "kilometer");
        assert_eq!(source[0].value.to_bits(), 0.1f64.to_bits());

        let meters = entries.iter().find(|e| e.unit == "meter").unwrap();
        assert!((meters.value - 100.0).abs() < 1e-9);
        assert_eq!(meters.label, "Meter");
    }

    #[test]
    fn test_temperature_comparison() {
        let c = converter();
        let entries = build_comparison(&c, Category::Temperature, 100.0, "celsius").unwrap();
        let values: Vec<_> = entries.iter().map(|e| e.value).collect();
        assert!((values[0] - 373.15).abs() < 1e-9);
        assert_eq!(values[1], 100.0);
        assert!((values[2] - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_unit_category() {
        let catalog = UnitCatalog::from_groups(vec![(
            Category::Data,
            vec![Unit::new("byte", "B", "byte", Category::Data, 1.0)],
        )])
        .unwrap();
        let c = Converter::new(Arc::new(catalog));
        let entries = build_comparison(&c, Category::Data, 42.0, "byte").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, 42.0);
        assert!(entries[0].is_source);
    }

    #[test]
    fn test_errors() {
        let c = converter();
        let err = build_comparison(&c, Category::Length, 1.0, "gram").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownUnit);

        let err = build_comparison(&c, Category::Length, f64::NAN, "meter").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidValue);
    }

    #[test]
    fn test_deterministic() {
        let c = converter();
        let a = build_comparison(&c, Category::Energy, 12.5, "kcal").unwrap();
        let b = build_comparison(&c, Category::Energy, 12.5, "kcal").unwrap();
        assert_eq!(a, b);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.value.to_bits(), y.value.to_bits());
        }
    }
}
