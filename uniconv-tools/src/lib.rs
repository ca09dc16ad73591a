//! uniconv Tools - Plugin surface for the presentation layer
//!
//! Every user action is a tool: a named operation with argument metadata
//! that takes JSON arguments and a mutable [`Session`].
//! - Catalog browsing (`list_categories`, `list_units`)
//! - Conversion (`convert`, `swap`)
//! - Comparison charts (`compare`)
//! - In-memory history (`history`, `clear_history`)

mod error;
mod traits;
mod registry;
mod session;
mod helpers;
mod catalog;
mod convert;
mod compare;
mod history;

pub use error::ToolError;
pub use traits::{ArgMeta, ToolMeta, ToolPlugin};
pub use registry::ToolRegistry;
pub use session::{HistoryEntry, Session, DEFAULT_HISTORY_LIMIT};

/// Load the conversion tools into a registry
pub fn load_conversion_tools(registry: ToolRegistry) -> ToolRegistry {
    registry
        // Catalog browsing
        .with_tool(catalog::ListCategories)
        .with_tool(catalog::ListUnits)

        // Conversion
        .with_tool(convert::Convert)
        .with_tool(convert::Swap)
        .with_tool(compare::Compare)

        // History
        .with_tool(history::History)
        .with_tool(history::ClearHistory)
}

/// Registry with every built-in tool
pub fn standard_registry() -> ToolRegistry {
    load_conversion_tools(ToolRegistry::new())
}

/// Re-export core types for tool authors
pub mod prelude {
    pub use crate::{ArgMeta, Session, ToolError, ToolMeta, ToolPlugin, ToolRegistry};
    pub use uniconv_core::prelude::*;
    pub use serde_json::{json, Value as JsonValue};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_conversion_tools() {
        let registry = standard_registry();

        assert!(registry.get("list_categories").is_some());
        assert!(registry.get("list_units").is_some());
        assert!(registry.get("convert").is_some());
        assert!(registry.get("swap").is_some());
        assert!(registry.get("compare").is_some());
        assert!(registry.get("history").is_some());
        assert!(registry.get("clear_history").is_some());
        assert_eq!(registry.len(), 7);
    }
}
