//! Text renderer
//!
//! Renders a chart as markdown so terminal and chat clients see it too.

use uniconv_core::DisplayPrecision;
use crate::ComparisonChart;

/// Chart renderer for plain-text front ends
pub struct TextRenderer {
    width: usize,
    precision: DisplayPrecision,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            width: 30,
            precision: DisplayPrecision::default(),
        }
    }

    /// Longest bar, in characters
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn with_precision(mut self, precision: DisplayPrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Markdown table with one row per bar
    pub fn render_table(&self, chart: &ComparisonChart) -> String {
        let mut output = String::new();
        output.push_str(&format!("### {}\n\n", chart.title));
        output.push_str(&format!(
            "| {} | {} |\n",
            chart.x_title.to_lowercase(),
            chart.y_title.to_lowercase()
        ));
        output.push_str("|------|-------|\n");
        for bar in &chart.bars {
            output.push_str(&format!("| {} | {} |\n", bar.label, self.precision.format(bar.value)));
        }
        output
    }

    /// Horizontal bars, length proportional to |value| / max |value|
    pub fn render_bars(&self, chart: &ComparisonChart) -> String {
        let label_width = chart
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);
        let max = chart
            .bars
            .iter()
            .map(|b| b.value.abs())
            .fold(0.0_f64, f64::max);

        let mut output = String::new();
        for bar in &chart.bars {
            let len = if max > 0.0 {
                ((bar.value.abs() / max) * self.width as f64).round() as usize
            } else {
                0
            };
            // Tiny but non-zero values still get a visible sliver
            let len = if len == 0 && bar.value != 0.0 { 1 } else { len };

            output.push_str(&format!(
                "{:<lw$} | {} {}\n",
                bar.label,
                "█".repeat(len),
                bar.text,
                lw = label_width
            ));
        }
        output
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniconv_units::Category;
    use crate::Bar;

    fn chart(values: &[(&str, f64)]) -> ComparisonChart {
        ComparisonChart {
            title: "Test".to_string(),
            x_title: "Units".to_string(),
            y_title: "Value".to_string(),
            category: Category::Length,
            bars: values
                .iter()
                .map(|(label, value)| Bar {
                    label: label.to_string(),
                    value: *value,
                    text: value.to_string(),
                    color: "#000000".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_render_table() {
        let chart = chart(&[("Meter", 1000.0), ("Kilometer", 1.0)]);
        let out = TextRenderer::new().render_table(&chart);
        assert!(out.starts_with("### Test\n\n| units | value |\n"));
        assert!(out.contains("| Meter | 1000 |\n"));
        assert!(out.contains("| Kilometer | 1 |\n"));
    }

    #[test]
    fn test_render_bars_scale() {
        let out = TextRenderer::new()
            .with_width(10)
            .render_bars(&chart(&[("Meter", 1000.0), ("Kilometer", 1.0), ("Zero", 0.0)]));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("Meter     | {} 1000", "█".repeat(10)));
        // 1/1000 of the width rounds to zero but stays visible
        assert_eq!(lines[1], "Kilometer | █ 1");
        assert_eq!(lines[2], "Zero      |  0");
    }

    #[test]
    fn test_render_bars_all_zero() {
        let out = TextRenderer::new().render_bars(&chart(&[("A", 0.0)]));
        assert_eq!(out, "A |  0\n");
    }

    #[test]
    fn test_negative_values_use_magnitude() {
        let out = TextRenderer::new()
            .with_width(4)
            .render_bars(&chart(&[("Celsius", -40.0), ("Kelvin", 233.15)]));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1], format!("Kelvin  | {} 233.15", "█".repeat(4)));
        assert!(lines[0].starts_with("Celsius | █ -40"));
    }
}
