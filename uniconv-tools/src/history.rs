//! History tools

use serde_json::{json, Value as JsonValue};
use tracing::info;
use crate::helpers::{extract_optional_count, tool_result};
use crate::{ArgMeta, Session, ToolError, ToolMeta, ToolPlugin};

// ============ history ============

pub struct History;

static HISTORY_ARGS: [ArgMeta; 1] = [ArgMeta::optional(
    "limit",
    "integer",
    "Show only the most recent N conversions",
)];

static HISTORY_EXAMPLES: [&str; 2] = [
    "history() → every remembered conversion, oldest first",
    "history(limit=3) → the three most recent",
];

impl ToolPlugin for History {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "history",
            description: "List recent successful conversions of this session",
            args: &HISTORY_ARGS,
            examples: &HISTORY_EXAMPLES,
        }
    }

    fn call(&self, args: &JsonValue, session: &mut Session) -> Result<JsonValue, ToolError> {
        let total = session.history().len();
        let limit = extract_optional_count(args, "history", "limit")?.unwrap_or(total);
        let entries: Vec<_> = session.history().skip(total.saturating_sub(limit)).collect();

        if total == 0 {
            return Ok(tool_result("No conversions yet.", json!([])));
        }
        if entries.is_empty() {
            let text = format!("Showing 0 of {} conversions.", total);
            return Ok(tool_result(text, json!([])));
        }

        let mut text = String::new();
        for entry in &entries {
            let line = match session.converter().details(&entry.result, session.precision()) {
                Ok(details) => details.formula,
                Err(_) => {
                    let r = &entry.result;
                    format!("{} {} -> {} {}", r.input, r.from, r.value, r.to)
                }
            };
            text.push_str(&format!("[{}] {}\n", entry.timestamp, line));
        }

        Ok(tool_result(text, json!(entries)))
    }
}

// ============ clear_history ============

pub struct ClearHistory;

static CLEAR_HISTORY_ARGS: [ArgMeta; 0] = [];

static CLEAR_HISTORY_EXAMPLES: [&str; 1] = ["clear_history() → Cleared 4 conversions."];

impl ToolPlugin for ClearHistory {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "clear_history",
            description: "Forget every conversion remembered by this session",
            args: &CLEAR_HISTORY_ARGS,
            examples: &CLEAR_HISTORY_EXAMPLES,
        }
    }

    fn call(&self, _args: &JsonValue, session: &mut Session) -> Result<JsonValue, ToolError> {
        let cleared = session.clear_history();
        info!(cleared, "history cleared");
        Ok(tool_result(
            format!("Cleared {} conversions.", cleared),
            json!({ "cleared": cleared }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use uniconv_units::UnitCatalog;
    use crate::convert::Convert;

    fn session_with(conversions: &[(f64, &str, &str)]) -> Session {
        let mut s = Session::new(Arc::new(UnitCatalog::standard().unwrap()));
        for (value, from, to) in conversions {
            Convert
                .call(&json!({"value": value, "from": from, "to": to}), &mut s)
                .unwrap();
        }
        s
    }

    #[test]
    fn test_history_empty() {
        let mut s = session_with(&[]);
        let out = History.call(&json!({}), &mut s).unwrap();
        assert_eq!(out["content"][0]["text"], "No conversions yet.");
    }

    #[test]
    fn test_history_lists_oldest_first() {
        let mut s = session_with(&[(1.0, "m", "cm"), (2.0, "kg", "g"), (3.0, "h", "min")]);
        let out = History.call(&json!({}), &mut s).unwrap();
        let data = out["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["from"], "meter");
        assert_eq!(data[2]["to"], "minute");
        let text = out["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("] 2 Kilogram = 2000 Gram\n"));
    }

    #[test]
    fn test_history_limit() {
        let mut s = session_with(&[(1.0, "m", "cm"), (2.0, "kg", "g"), (3.0, "h", "min")]);
        let out = History.call(&json!({"limit": 1}), &mut s).unwrap();
        let data = out["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["input"], 3.0);
    }

    #[test]
    fn test_history_zero_limit_is_not_empty_history() {
        let mut s = session_with(&[(1.0, "m", "cm"), (2.0, "kg", "g")]);
        let out = History.call(&json!({"limit": 0}), &mut s).unwrap();
        assert_eq!(out["content"][0]["text"], "Showing 0 of 2 conversions.");
        assert_eq!(out["data"], json!([]));
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn test_clear_history() {
        let mut s = session_with(&[(1.0, "m", "cm"), (2.0, "kg", "g")]);
        let out = ClearHistory.call(&json!({}), &mut s).unwrap();
        assert_eq!(out["data"]["cleared"], 2);
        assert_eq!(s.history().len(), 0);
    }
}
