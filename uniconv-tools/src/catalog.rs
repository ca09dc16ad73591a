//! Catalog browsing tools

use serde_json::{json, Value as JsonValue};
use crate::helpers::{extract_category, tool_result};
use crate::{ArgMeta, Session, ToolError, ToolMeta, ToolPlugin};

// ============ list_categories ============

pub struct ListCategories;

static LIST_CATEGORIES_ARGS: [ArgMeta; 0] = [];

static LIST_CATEGORIES_EXAMPLES: [&str; 1] = ["list_categories() → Length, Mass, Volume, ..."];

impl ToolPlugin for ListCategories {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "list_categories",
            description: "List the measurement categories with their unit counts",
            args: &LIST_CATEGORIES_ARGS,
            examples: &LIST_CATEGORIES_EXAMPLES,
        }
    }

    fn call(&self, _args: &JsonValue, session: &mut Session) -> Result<JsonValue, ToolError> {
        let catalog = session.catalog();
        let mut text = String::new();
        let mut data = Vec::new();

        for category in catalog.categories() {
            let count = catalog.units(category).len();
            text.push_str(&format!("{} {} ({} units)\n", category.icon(), category, count));
            data.push(json!({
                "name": category.name(),
                "icon": category.icon(),
                "color": category.color(),
                "units": count,
            }));
        }

        Ok(tool_result(text, json!(data)))
    }
}

// ============ list_units ============

pub struct ListUnits;

static LIST_UNITS_ARGS: [ArgMeta; 1] = [ArgMeta::optional(
    "category",
    "string",
    "Category to list (defaults to the session's default category)",
)];

static LIST_UNITS_EXAMPLES: [&str; 2] = [
    "list_units(category=\"Temperature\") → kelvin (K), celsius (°C), fahrenheit (°F)",
    "list_units() → units of the default category",
];

impl ToolPlugin for ListUnits {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "list_units",
            description: "List the units of a category in display order",
            args: &LIST_UNITS_ARGS,
            examples: &LIST_UNITS_EXAMPLES,
        }
    }

    fn call(&self, args: &JsonValue, session: &mut Session) -> Result<JsonValue, ToolError> {
        let category = extract_category(args, "list_units", session)?;
        let units = session.catalog().units(category);

        let mut text = format!(
            "### {} {}\n\n| unit | symbol | key |\n|------|--------|-----|\n",
            category.icon(),
            category
        );
        for unit in units {
            let row = format!("| {} | {} | {} |\n", unit.display_name(), unit.symbol, unit.key);
            text.push_str(&row);
        }

        let default_pair = session
            .catalog()
            .default_pair(category)
            .map(|(from, to)| json!({ "from": from.key, "to": to.key }));

        Ok(tool_result(
            text,
            json!({
                "category": category,
                "units": units,
                "default_pair": default_pair,
            }),
        ))
    }
}
