//! Chart artifact handed to the rendering front end

use serde::Serialize;
use uniconv_core::{ConversionError, DisplayPrecision};
use uniconv_units::{Category, ConversionResult, Converter};
use crate::ComparisonEntry;

/// Neutral colour for bars that are not highlighted
const MUTED_COLOR: &str = "#888888";

/// Single bar: label on the axis, magnitude, and the text printed on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub text: String,
    pub color: String,
}

/// Bar chart comparing one quantity across units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub category: Category,
    pub bars: Vec<Bar>,
}

impl ComparisonChart {
    /// Chart of a full comparison; the source unit gets the category colour
    pub fn from_comparison(category: Category, entries: &[ComparisonEntry]) -> Self {
        let source = entries
            .iter()
            .find(|e| e.is_source)
            .map(|e| e.label.as_str())
            .unwrap_or("");

        let bars = entries
            .iter()
            .map(|e| Bar {
                label: e.label.clone(),
                value: e.value,
                text: format!("{} {}", DisplayPrecision::CHART.format(e.value), e.symbol),
                color: (if e.is_source { category.color() } else { MUTED_COLOR }).to_string(),
            })
            .collect();

        ComparisonChart {
            title: format!("{} Comparison: {} in every unit", category, source),
            x_title: "Units".to_string(),
            y_title: "Value".to_string(),
            category,
            bars,
        }
    }

    /// Two-bar chart of a single conversion: input next to result
    pub fn pair(converter: &Converter, result: &ConversionResult) -> Result<Self, ConversionError> {
        let catalog = converter.catalog();
        let from = catalog.unit_in(result.category, &result.from)?;
        let to = catalog.unit_in(result.category, &result.to)?;
        let (from_label, to_label) = (from.display_name(), to.display_name());
        let chart = DisplayPrecision::CHART;

        Ok(ComparisonChart {
            title: format!("{} Conversion: {} to {}", result.category, from_label, to_label),
            x_title: "Units".to_string(),
            y_title: "Value".to_string(),
            category: result.category,
            bars: vec![
                Bar {
                    text: format!("{} {}", chart.format(result.input), from_label),
                    label: from_label,
                    value: result.input,
                    color: result.category.color().to_string(),
                },
                Bar {
                    text: format!("{} {}", chart.format(result.value), to_label),
                    label: to_label,
                    value: result.value,
                    color: MUTED_COLOR.to_string(),
                },
            ],
        })
    }
}
