//! Comparison chart tool

use serde_json::{json, Value as JsonValue};
use uniconv_chart::{build_comparison, ComparisonChart, TextRenderer};
use crate::helpers::{extract_number, extract_text, infer_category, tool_result};
use crate::{ArgMeta, Session, ToolError, ToolMeta, ToolPlugin};

pub struct Compare;

static COMPARE_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "number", "Value to compare (number or numeric text)"),
    ArgMeta::required("unit", "string", "Unit the value is expressed in"),
    ArgMeta::optional("category", "string", "Category; inferred from the unit when omitted"),
];

static COMPARE_EXAMPLES: [&str; 2] = [
    "compare(value=1, unit=\"kg\") → 1000 g, 1 kg, 1e+06 mg, ...",
    "compare(value=25, unit=\"°C\") → 298.15 K, 25 °C, 77 °F",
];

impl ToolPlugin for Compare {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "compare",
            description:
                "Show a value expressed in every unit of its category, as a table and a bar chart",
            args: &COMPARE_ARGS,
            examples: &COMPARE_EXAMPLES,
        }
    }

    fn call(&self, args: &JsonValue, session: &mut Session) -> Result<JsonValue, ToolError> {
        let value = extract_number(args, "compare", "value")?;
        let unit = extract_text(args, "compare", "unit")?;
        let category = infer_category(args, "compare", unit, session)?;

        let entries = build_comparison(session.converter(), category, value, unit)?;
        let chart = ComparisonChart::from_comparison(category, &entries);

        let renderer = TextRenderer::new().with_precision(session.precision());
        let text = format!("{}\n{}", renderer.render_table(&chart), renderer.render_bars(&chart));

        Ok(tool_result(
            text,
            json!({
                "entries": entries,
                "chart": chart,
            }),
        ))
    }
}
