//! Tool traits

use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};
use crate::{Session, ToolError};

/// Metadata about a tool argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    /// JSON Schema type ("string", "number", "integer")
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ArgMeta {
    pub const fn required(
        name: &'static str,
        typ: &'static str,
        description: &'static str,
    ) -> Self {
        Self { name, typ, description, optional: false, default: None }
    }

    pub const fn optional(
        name: &'static str,
        typ: &'static str,
        description: &'static str,
    ) -> Self {
        Self { name, typ, description, optional: true, default: None }
    }
}

/// Metadata for a tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgMeta],
    pub examples: &'static [&'static str],
}

impl ToolMeta {
    /// JSON Schema object describing the arguments
    pub fn input_schema(&self) -> JsonValue {
        let mut properties = Map::new();
        for arg in self.args {
            let mut prop = json!({
                "type": arg.typ,
                "description": arg.description,
            });
            if let Some(default) = arg.default {
                prop["default"] = json!(default);
            }
            properties.insert(arg.name.to_string(), prop);
        }

        let required: Vec<&str> = self
            .args
            .iter()
            .filter(|a| !a.optional)
            .map(|a| a.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Description followed by the examples, as shown in tool listings
    pub fn full_description(&self) -> String {
        if self.examples.is_empty() {
            return self.description.to_string();
        }
        let examples: Vec<String> = self.examples.iter().map(|e| format!("  {}", e)).collect();
        format!("{}\n\nExamples:\n{}", self.description, examples.join("\n"))
    }
}

/// A user action over the conversion session
pub trait ToolPlugin: Send + Sync {
    fn meta(&self) -> ToolMeta;
    fn call(&self, args: &JsonValue, session: &mut Session) -> Result<JsonValue, ToolError>;
}
