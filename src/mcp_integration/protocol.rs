//! MCP protocol layer for tool discovery and dispatch
//!
//! Handles JSON-RPC 2.0 messages: `initialize`, `tools/list`, `tools/call`,
//! `ping` and notifications. Framing and I/O live in
//! [`stdio`](super::stdio).

use super::core::{SchemaMcpServer, SchemaToolResult};
use super::handlers::schema_ops;
use super::tools::schema_tools;
use crate::auth::TokenProvider;
use crate::dispatcher::SchemaDispatcher;
use crate::error::ErrorKind;
use crate::telemetry::redact_arguments;
use log::{debug, error, info, warn};
use serde_json::{Value, json};

/// MCP protocol revision spoken by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC: invalid JSON was received
pub const PARSE_ERROR: i64 = -32700;
/// JSON-RPC: the message is not a valid request object
pub const INVALID_REQUEST: i64 = -32600;
/// JSON-RPC: unknown method or tool
pub const METHOD_NOT_FOUND: i64 = -32601;
/// JSON-RPC: invalid method parameters
pub const INVALID_PARAMS: i64 = -32602;
/// JSON-RPC: internal error
pub const INTERNAL_ERROR: i64 = -32603;

/// Error code reported for a tool name that is not registered
pub const UNKNOWN_TOOL: &str = "UNKNOWN_TOOL";

impl<T: TokenProvider, D: SchemaDispatcher> SchemaMcpServer<T, D> {
    /// Get the list of available MCP tools as JSON
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schema_mcp_server::config::{ClientConfig, CredentialSource};
    /// use schema_mcp_server::mcp_integration::SchemaMcpServer;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mcp_server =
    ///     SchemaMcpServer::from_config(CredentialSource::default(), &ClientConfig::default())?;
    /// let tools = mcp_server.get_tools();
    /// assert_eq!(tools[0]["name"], "create_schema");
    /// assert_eq!(tools[1]["name"], "update_schema");
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_tools(&self) -> Vec<Value> {
        vec![
            schema_tools::create_schema_tool(),
            schema_tools::update_schema_tool(),
        ]
    }

    /// Execute a tool by name with arguments
    ///
    /// Routes to the matching handler. An unknown name yields a failed
    /// result with error code `UNKNOWN_TOOL`.
    pub async fn execute_tool(&self, tool_name: &str, arguments: Value) -> SchemaToolResult {
        debug!(
            "Executing MCP tool: {} with args: {}",
            tool_name,
            redact_arguments(&arguments)
        );

        match tool_name {
            "create_schema" => schema_ops::handle_create_schema(self, arguments).await,
            "update_schema" => schema_ops::handle_update_schema(self, arguments).await,

            // Unknown tool
            _ => {
                error!("Unknown tool: {}", tool_name);
                SchemaToolResult {
                    success: false,
                    content: json!({
                        "error": format!("Unknown tool: {}", tool_name),
                        "error_code": UNKNOWN_TOOL,
                    }),
                    metadata: None,
                }
            }
        }
    }

    /// Handle one decoded JSON-RPC message.
    ///
    /// Returns the response to write back, or `None` for notifications.
    pub async fn handle_message(&self, message: &Value) -> Option<Value> {
        let id = message.get("id").cloned();

        let Some(method) = message.get("method").and_then(Value::as_str) else {
            warn!("Received message without a method");
            return id.map(|id| error_response(id, INVALID_REQUEST, "Invalid Request", None));
        };

        if method.starts_with("notifications/") {
            debug!("Received notification: {}", method);
            return None;
        }

        let Some(id) = id else {
            debug!("Ignoring '{}' sent without an id", method);
            return None;
        };

        let response = match method {
            "initialize" => {
                info!("Client initialized the session");
                success_response(id, self.initialize_result())
            }
            "tools/list" => {
                debug!("Received tools/list request");
                success_response(id, json!({"tools": self.get_tools()}))
            }
            "tools/call" => self.handle_tool_call(id, message.get("params")).await,
            "ping" => success_response(id, json!({})),
            other => {
                warn!("Method not found: {}", other);
                error_response(
                    id,
                    METHOD_NOT_FOUND,
                    format!("Method not found: {}", other),
                    None,
                )
            }
        };
        Some(response)
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        })
    }

    async fn handle_tool_call(&self, id: Value, params: Option<&Value>) -> Value {
        let Some(name) = params
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
        else {
            return error_response(
                id,
                INVALID_PARAMS,
                "Invalid params: missing tool name",
                None,
            );
        };

        let arguments = params
            .and_then(|p| p.get("arguments"))
            .filter(|args| !args.is_null())
            .cloned()
            .unwrap_or_else(|| json!({}));

        let result = self.execute_tool(name, arguments).await;
        if result.success {
            return success_response(id, result.content);
        }

        let error_code = result.error_code().unwrap_or(ErrorKind::Internal.as_str());
        error_response(
            id,
            rpc_code(error_code),
            result.error_message().unwrap_or("Tool execution failed"),
            Some(json!({"error_code": error_code})),
        )
    }
}

/// JSON-RPC code for a tool error code.
pub fn rpc_code(error_code: &str) -> i64 {
    match error_code {
        UNKNOWN_TOOL => METHOD_NOT_FOUND,
        code if code == ErrorKind::InvalidParams.as_str() => ErrorKind::InvalidParams.code(),
        _ => INTERNAL_ERROR,
    }
}

/// Build a JSON-RPC success response.
pub fn success_response(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result
    })
}

/// Build a JSON-RPC error response.
pub fn error_response(id: Value, code: i64, message: impl Into<String>, data: Option<Value>) -> Value {
    let mut error = json!({
        "code": code,
        "message": message.into()
    });
    if let Some(data) = data {
        error["data"] = data;
    }
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": error
    })
}
