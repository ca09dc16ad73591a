//! Common argument utilities

use serde_json::{json, Value as JsonValue};
use uniconv_core::parse_value;
use uniconv_units::Category;
use crate::{Session, ToolError};

/// Extract a required string argument
pub fn extract_text<'a>(
    args: &'a JsonValue,
    tool: &'static str,
    arg: &'static str,
) -> Result<&'a str, ToolError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Err(ToolError::missing(tool, arg)),
        Some(JsonValue::String(s)) => Ok(s.as_str()),
        Some(other) => Err(mismatch(tool, arg, "string", other)),
    }
}

/// Extract an optional string argument; blank strings count as missing
pub fn extract_optional_text<'a>(
    args: &'a JsonValue,
    tool: &'static str,
    arg: &'static str,
) -> Result<Option<&'a str>, ToolError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) if s.trim().is_empty() => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(mismatch(tool, arg, "string", other)),
    }
}

/// Extract the value to convert.
///
/// Accepts a JSON number or the text the user typed; text goes through the
/// same validation as any typed input, so "abc" is an invalid value rather
/// than a malformed call.
pub fn extract_number(
    args: &JsonValue,
    tool: &'static str,
    arg: &'static str,
) -> Result<f64, ToolError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Err(ToolError::missing(tool, arg)),
        Some(JsonValue::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ToolError::invalid(tool, arg, "number out of range")),
        Some(JsonValue::String(s)) => Ok(parse_value(s)?),
        Some(other) => Err(mismatch(tool, arg, "number", other)),
    }
}

/// Extract an optional non-negative integer
pub fn extract_optional_count(
    args: &JsonValue,
    tool: &'static str,
    arg: &'static str,
) -> Result<Option<usize>, ToolError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .map(|n| Some(n as usize))
            .ok_or_else(|| ToolError::invalid(tool, arg, "expected a non-negative integer")),
    }
}

/// Category argument, falling back to the session default
pub fn extract_category(
    args: &JsonValue,
    tool: &'static str,
    session: &Session,
) -> Result<Category, ToolError> {
    match extract_optional_text(args, tool, "category")? {
        Some(name) => Ok(session.catalog().parse_category(name)?),
        None => Ok(session.default_category()),
    }
}

/// Category for a conversion: explicit, else the source unit's, else the
/// session default (which then reports the unit as unknown)
pub fn infer_category(
    args: &JsonValue,
    tool: &'static str,
    unit: &str,
    session: &Session,
) -> Result<Category, ToolError> {
    if let Some(name) = extract_optional_text(args, tool, "category")? {
        return Ok(session.catalog().parse_category(name)?);
    }
    Ok(session
        .catalog()
        .lookup(unit)
        .map(|u| u.category)
        .unwrap_or_else(|| session.default_category()))
}

/// Standard tool result: text for display plus structured data
pub fn tool_result(text: impl Into<String>, data: JsonValue) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": text.into() }],
        "data": data,
        "isError": false
    })
}

fn mismatch(tool: &'static str, arg: &'static str, expected: &str, got: &JsonValue) -> ToolError {
    ToolError::invalid(tool, arg, format!("expected {}, got {}", expected, type_name(got)))
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
