//! Conversion tools

use serde_json::{json, Value as JsonValue};
use tracing::debug;
use uniconv_chart::{ComparisonChart, TextRenderer};
use uniconv_units::{parse_query, ConversionRequest};
use crate::helpers::{
    extract_number, extract_optional_text, extract_text, infer_category, tool_result,
};
use crate::{ArgMeta, Session, ToolError, ToolMeta, ToolPlugin};

/// A two-bar chart needs less room than a full comparison
const PAIR_BAR_WIDTH: usize = 20;

/// Explicit value/from/to arguments, with the category inferred when absent
fn explicit_request(
    args: &JsonValue,
    tool: &'static str,
    session: &Session,
) -> Result<ConversionRequest, ToolError> {
    let value = extract_number(args, tool, "value")?;
    let from = extract_text(args, tool, "from")?;
    let to = extract_text(args, tool, "to")?;
    let category = infer_category(args, tool, from, session)?;
    Ok(ConversionRequest::new(category, from, to, value))
}

/// Convert, record the result in history and build the tool output
fn run(request: &ConversionRequest, session: &mut Session) -> Result<JsonValue, ToolError> {
    let converter = session.converter();
    let result = converter.convert(request)?;
    let details = converter.details(&result, session.precision())?;
    let chart = ComparisonChart::pair(converter, &result)?;

    let bars = TextRenderer::new()
        .with_width(PAIR_BAR_WIDTH)
        .with_precision(session.precision())
        .render_bars(&chart);
    let text = format!("{}\n{}\n\n{}", details.formula, details.factor, bars);

    session.record(&result);

    Ok(tool_result(
        text,
        json!({
            "result": result,
            "formula": details.formula,
            "factor": details.factor,
            "chart": chart,
        }),
    ))
}

// ============ convert ============

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 5] = [
    ArgMeta::optional("value", "number", "Value to convert (number or numeric text)"),
    ArgMeta::optional("from", "string", "Source unit (e.g. \"km\", \"Celsius\")"),
    ArgMeta::optional("to", "string", "Target unit (e.g. \"mi\", \"°F\")"),
    ArgMeta::optional("category", "string", "Category; inferred from the source unit when omitted"),
    ArgMeta::optional(
        "query",
        "string",
        "Free-text query instead of value/from/to (e.g. \"100 km to mi\")",
    ),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(value=100, from=\"km\", to=\"mi\") → 62.1371",
    "convert(value=0, from=\"C\", to=\"F\") → 32",
    "convert(query=\"1 GB in MB\") → 1024",
];

impl ToolPlugin for Convert {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "convert",
            description: "Convert a value from one unit to another within a category",
            args: &CONVERT_ARGS,
            examples: &CONVERT_EXAMPLES,
        }
    }

    fn call(&self, args: &JsonValue, session: &mut Session) -> Result<JsonValue, ToolError> {
        let request = match extract_optional_text(args, "convert", "query")? {
            Some(query) => {
                let mut request = parse_query(session.catalog(), query)?;
                if let Some(name) = extract_optional_text(args, "convert", "category")? {
                    request.category = session.catalog().parse_category(name)?;
                }
                request
            }
            None => explicit_request(args, "convert", session)?,
        };
        run(&request, session)
    }
}

// ============ swap ============

pub struct Swap;

static SWAP_ARGS: [ArgMeta; 4] = [
    ArgMeta::optional(
        "value",
        "number",
        "Value to convert; defaults to the last conversion's input",
    ),
    ArgMeta::optional("from", "string", "Current source unit (becomes the target)"),
    ArgMeta::optional("to", "string", "Current target unit (becomes the source)"),
    ArgMeta::optional("category", "string", "Category; inferred from the units when omitted"),
];

static SWAP_EXAMPLES: [&str; 2] = [
    "swap() → repeats the last conversion the other way round",
    "swap(value=1, from=\"kg\", to=\"lb\") → 0.453592",
];

impl ToolPlugin for Swap {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "swap",
            description: "Exchange source and target units and convert again",
            args: &SWAP_ARGS,
            examples: &SWAP_EXAMPLES,
        }
    }

    fn call(&self, args: &JsonValue, session: &mut Session) -> Result<JsonValue, ToolError> {
        let explicit = ["from", "to"]
            .iter()
            .any(|k| args.get(k).is_some_and(|v| !v.is_null()));

        let request = if explicit {
            explicit_request(args, "swap", session)?
        } else {
            let last = session.last().ok_or_else(|| ToolError::missing("swap", "from"))?;
            let mut request = ConversionRequest::new(
                last.result.category,
                last.result.from.clone(),
                last.result.to.clone(),
                last.result.input,
            );
            if args.get("value").is_some_and(|v| !v.is_null()) {
                request.value = extract_number(args, "swap", "value")?;
            }
            request
        };

        let swapped = request.swapped();
        debug!(from = %swapped.from, to = %swapped.to, "swapped units");
        run(&swapped, session)
    }
}
