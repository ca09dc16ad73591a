//! JSON-RPC request handling

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uniconv_tools::{Session, ToolError, ToolRegistry};
use uniconv_units::{Category, UnitCatalog};
use crate::config::{ConfigError, ServerConfig};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "uniconv";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const CATEGORIES_URI: &str = "uniconv://categories";
const INSTRUCTIONS: &str = "Use 'convert' to convert a value between units of one category, \
    'compare' to see a value in every unit of its category, and 'list_units' to see what a \
    category offers. Show the returned text to the user as is.";

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;

    fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_PARAMS, message)
    }

    fn with_data(mut self, data: JsonValue) -> Self {
        self.data = Some(data);
        self
    }
}

impl McpResponse {
    fn ok(id: JsonValue, result: JsonValue) -> Self {
        Self { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    fn err(id: JsonValue, error: McpError) -> Self {
        Self { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }
}

/// One client connection: the tool registry and its session
pub struct Server {
    registry: ToolRegistry,
    session: Session,
}

impl Server {
    pub fn new(config: &ServerConfig) -> Result<Self, ConfigError> {
        let catalog = Arc::new(UnitCatalog::standard()?);
        info!(units = catalog.len(), "unit catalog loaded");

        let session = Session::new(catalog)
            .with_precision(config.precision)
            .with_history_limit(config.history_limit)
            .with_default_category(config.default_category);

        Ok(Self {
            registry: uniconv_tools::standard_registry(),
            session,
        })
    }

    /// Handle one protocol line; `None` when nothing must be sent back
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<JsonValue>(line) {
            Err(e) => {
                warn!(error = %e, "unparseable request");
                let error = McpError::new(McpError::PARSE_ERROR, format!("Parse error: {}", e));
                McpResponse::err(JsonValue::Null, error)
            }
            Ok(raw) => {
                // Notifications omit the id key; an explicit null id still gets a reply
                let id = raw.get("id").cloned();
                match serde_json::from_value::<McpRequest>(raw) {
                    Ok(request) => {
                        let response = self.handle_request(&request);
                        if id.is_none() {
                            debug!(method = %request.method, "notification processed");
                            return None;
                        }
                        response
                    }
                    Err(e) => McpResponse::err(
                        id.unwrap_or(JsonValue::Null),
                        McpError::new(McpError::INVALID_REQUEST, format!("Invalid request: {}", e)),
                    ),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(json) => Some(json),
            Err(e) => {
                warn!(error = %e, "response serialization failed");
                None
            }
        }
    }

    pub fn handle_request(&mut self, request: &McpRequest) -> McpResponse {
        debug!(method = %request.method, "processing");

        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => self.handle_initialize(&request.params),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tool_call(&request.params),

            // Resources
            "resources/list" => self.handle_resources_list(),
            "resources/read" => self.handle_resources_read(&request.params),

            _ => Err(McpError::new(
                McpError::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        let id = request.id.clone().unwrap_or(JsonValue::Null);
        match result {
            Ok(r) => McpResponse::ok(id, r),
            Err(e) => McpResponse::err(id, e),
        }
    }

    fn handle_initialize(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let client = params
            .as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(|c| c.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unknown");

        // Use client's protocol version for compatibility
        let protocol = params
            .as_ref()
            .and_then(|p| p.get("protocolVersion"))
            .and_then(|v| v.as_str())
            .unwrap_or(PROTOCOL_VERSION);

        info!(client, protocol, "client connected");

        Ok(json!({
            "protocolVersion": protocol,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
                "description": "Unit converter: length, mass, volume, temperature and more"
            },
            "capabilities": {
                "tools": { "listChanged": false },
                "resources": { "subscribe": false, "listChanged": false }
            },
            "instructions": INSTRUCTIONS
        }))
    }

    fn handle_tools_list(&self) -> Result<JsonValue, McpError> {
        let tools: Vec<JsonValue> = self
            .registry
            .metas()
            .iter()
            .map(|meta| {
                json!({
                    "name": meta.name,
                    "description": meta.full_description(),
                    "inputSchema": meta.input_schema(),
                })
            })
            .collect();

        Ok(json!({ "tools": tools }))
    }

    fn handle_tool_call(&mut self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params
            .as_ref()
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        match self.registry.call(name, &args, &mut self.session) {
            Ok(result) => Ok(result),
            // Conversion failures are shown inline; the session carries on
            Err(ToolError::Conversion(e)) => {
                let mut text = format!("Error: {}", e.message);
                if let Some(suggestion) = &e.suggestion {
                    text.push_str(&format!("\n{}", suggestion));
                }
                Ok(json!({
                    "content": [{ "type": "text", "text": text }],
                    "error": e,
                    "isError": true
                }))
            }
            Err(ToolError::UnknownTool { name, similar }) => {
                let mut err = McpError::invalid_params(format!("Unknown tool: {}", name));
                if !similar.is_empty() {
                    err = err.with_data(json!({ "similar": similar }));
                }
                Err(err)
            }
            Err(e) => Err(McpError::invalid_params(e.to_string())),
        }
    }

    fn handle_resources_list(&self) -> Result<JsonValue, McpError> {
        let mut resources = vec![json!({
            "uri": CATEGORIES_URI,
            "name": "categories",
            "description": "Every measurement category with its units",
            "mimeType": "application/json"
        })];

        for category in self.session.catalog().categories() {
            resources.push(json!({
                "uri": format!("{}/{}", CATEGORIES_URI, category.name()),
                "name": category.name(),
                "description": format!("{} {} units", category.icon(), category),
                "mimeType": "application/json"
            }));
        }

        Ok(json!({ "resources": resources }))
    }

    fn handle_resources_read(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let uri = params
            .as_ref()
            .and_then(|p| p.get("uri"))
            .and_then(|u| u.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing uri parameter"))?;

        let catalog = self.session.catalog();
        let body = if uri == CATEGORIES_URI {
            let categories: Vec<JsonValue> = catalog
                .categories()
                .map(|c| self.category_json(c))
                .collect();
            json!(categories)
        } else {
            let name = uri
                .strip_prefix(CATEGORIES_URI)
                .and_then(|rest| rest.strip_prefix('/'))
                .ok_or_else(|| {
                    McpError::invalid_params(format!(
                        "Invalid URI: {}. Expected {}/{{name}}",
                        uri, CATEGORIES_URI
                    ))
                })?;
            let category = catalog
                .parse_category(name)
                .map_err(|e| McpError::invalid_params(e.message))?;
            self.category_json(category)
        };

        Ok(json!({
            "contents": [{
                "uri": uri,
                "mimeType": "application/json",
                "text": body.to_string()
            }]
        }))
    }

    fn category_json(&self, category: Category) -> JsonValue {
        json!({
            "name": category.name(),
            "icon": category.icon(),
            "color": category.color(),
            "units": self.session.catalog().units(category),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> Server {
        Server::new(&ServerConfig::default()).unwrap()
    }

    fn call(server: &mut Server, line: &str) -> JsonValue {
        let out = server.handle_line(line).expect("response expected");
        serde_json::from_str(&out).unwrap()
    }

    fn request(server: &mut Server, id: u64, method: &str, params: JsonValue) -> JsonValue {
        let line = json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params});
        call(server, &line.to_string())
    }

    fn tool(server: &mut Server, id: u64, name: &str, arguments: JsonValue) -> JsonValue {
        request(server, id, "tools/call", json!({"name": name, "arguments": arguments}))
    }

    #[test]
    fn test_initialize() {
        let mut s = server();
        let params = json!({"protocolVersion": "2024-11-05", "clientInfo": {"name": "test"}});
        let resp = request(&mut s, 1, "initialize", params);
        assert_eq!(resp["id"], 1);
        assert_eq!(resp["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(resp["result"]["serverInfo"]["name"], "uniconv");
        assert_eq!(resp["result"]["instructions"], INSTRUCTIONS);
    }

    #[test]
    fn test_notification_gets_no_response() {
        let mut s = server();
        let line = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(s.handle_line(line).is_none());
    }

    #[test]
    fn test_null_id_is_a_request() {
        let mut s = server();
        let resp = call(&mut s, r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#);
        assert!(resp["id"].is_null());
        assert_eq!(resp["result"], json!({}));
    }

    #[test]
    fn test_parse_error() {
        let mut s = server();
        let resp = call(&mut s, "{not json");
        assert_eq!(resp["error"]["code"], -32700);
        assert!(resp["id"].is_null());
    }

    #[test]
    fn test_invalid_request() {
        let mut s = server();
        let resp = call(&mut s, r#"{"jsonrpc":"2.0","id":7}"#);
        assert_eq!(resp["error"]["code"], -32600);
        assert_eq!(resp["id"], 7);
    }

    #[test]
    fn test_unknown_method() {
        let mut s = server();
        let resp = call(&mut s, r#"{"jsonrpc":"2.0","id":2,"method":"prompts/list"}"#);
        assert_eq!(resp["error"]["code"], -32601);
    }

    #[test]
    fn test_tools_list() {
        let mut s = server();
        let resp = call(&mut s, r#"{"jsonrpc":"2.0","id":3,"method":"tools/list"}"#);
        let tools = resp["result"]["tools"].as_array().unwrap();
        let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "list_categories",
                "list_units",
                "convert",
                "swap",
                "compare",
                "history",
                "clear_history"
            ]
        );
        assert_eq!(tools[4]["inputSchema"]["required"], json!(["value", "unit"]));
    }

    #[test]
    fn test_tool_call_convert() {
        let mut s = server();
        let resp = tool(&mut s, 4, "convert", json!({"value": 1, "from": "kg", "to": "g"}));
        assert_eq!(resp["result"]["isError"], false);
        assert_eq!(resp["result"]["data"]["result"]["value"], 1000.0);
    }

    #[test]
    fn test_conversion_error_is_inline() {
        let mut s = server();
        let resp = tool(&mut s, 5, "convert", json!({"value": 1, "from": "m", "to": "kg"}));
        assert!(resp.get("error").is_none());
        assert_eq!(resp["result"]["isError"], true);
        assert_eq!(resp["result"]["error"]["code"], "INCOMPATIBLE_UNITS");
        assert!(resp["result"]["error"].get("kind").is_none());

        // The session keeps working after a rejection
        let resp = tool(&mut s, 6, "convert", json!({"value": 1, "from": "m", "to": "cm"}));
        assert_eq!(resp["result"]["data"]["result"]["value"], 100.0);
    }

    #[test]
    fn test_bad_tool_params() {
        let mut s = server();
        let resp = tool(&mut s, 8, "convert", json!({"value": 1}));
        assert_eq!(resp["error"]["code"], -32602);

        let resp = request(&mut s, 9, "tools/call", json!({"name": "histroy"}));
        assert_eq!(resp["error"]["code"], -32602);
        assert_eq!(resp["error"]["data"]["similar"][0], "history");

        let resp = call(&mut s, r#"{"jsonrpc":"2.0","id":10,"method":"tools/call"}"#);
        assert_eq!(resp["error"]["message"], "Missing params");
    }

    #[test]
    fn test_resources() {
        let mut s = server();
        let resp = call(&mut s, r#"{"jsonrpc":"2.0","id":11,"method":"resources/list"}"#);
        let resources = resp["result"]["resources"].as_array().unwrap();
        assert_eq!(resources.len(), 1 + Category::ALL.len());
        assert_eq!(resources[1]["uri"], "uniconv://categories/Length");

        let read = |s: &mut Server, id: u64, uri: &str| {
            request(s, id, "resources/read", json!({"uri": uri}))
        };
        let body = |resp: &JsonValue| -> JsonValue {
            let text = resp["result"]["contents"][0]["text"].as_str().unwrap();
            serde_json::from_str(text).unwrap()
        };

        let resp = read(&mut s, 12, "uniconv://categories/temperature");
        let temperature = body(&resp);
        assert_eq!(temperature["name"], "Temperature");
        assert_eq!(temperature["units"].as_array().unwrap().len(), 3);

        let resp = read(&mut s, 13, "uniconv://categories");
        assert_eq!(body(&resp).as_array().unwrap().len(), Category::ALL.len());

        let resp = read(&mut s, 14, "uniconv://categories/Colour");
        assert_eq!(resp["error"]["code"], -32602);
    }
}
