//! Core MCP integration infrastructure
//!
//! This module contains the foundational types and constructors for MCP
//! integration: server metadata, the tool result shape and the server itself.

use crate::auth::{HttpTokenProvider, TokenProvider};
use crate::config::{ClientConfig, CredentialSource};
use crate::dispatcher::{HttpSchemaDispatcher, SchemaDispatcher};
use crate::error::ConfigResult;
use crate::operation_handler::SchemaOperationHandler;
use serde_json::Value;

/// Information about the MCP server, reported on `initialize`.
///
/// # Examples
///
/// ```rust
/// use schema_mcp_server::mcp_integration::McpServerInfo;
///
/// let server_info = McpServerInfo {
///     name: "schema-management-server".to_string(),
///     version: "0.1.0".to_string(),
///     description: "Schema management tools".to_string(),
/// };
/// assert_eq!(server_info.name, McpServerInfo::default().name);
/// ```
#[derive(Debug, Clone)]
pub struct McpServerInfo {
    /// Name reported to MCP clients
    pub name: String,
    /// Version reported to MCP clients
    pub version: String,
    /// Short description, logged at startup
    pub description: String,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "schema-management-server".to_string(),
            version: "0.1.0".to_string(),
            description: "Create and update database schemas through the schema API".to_string(),
        }
    }
}

/// Tool execution result for MCP clients
///
/// On success `content` is the MCP content block list; on failure it is
/// `{"error": ..., "error_code": ...}`.
///
/// # Examples
///
/// ```rust
/// use schema_mcp_server::mcp_integration::SchemaToolResult;
/// use serde_json::json;
///
/// let error_result = SchemaToolResult {
///     success: false,
///     content: json!({"error": "Unknown tool: drop_schema", "error_code": "UNKNOWN_TOOL"}),
///     metadata: None,
/// };
/// assert_eq!(error_result.error_code(), Some("UNKNOWN_TOOL"));
/// ```
#[derive(Debug, Clone)]
pub struct SchemaToolResult {
    /// Whether the tool execution was successful
    pub success: bool,
    /// The main result content (MCP content or error information)
    pub content: Value,
    /// Optional metadata about the operation
    pub metadata: Option<Value>,
}

impl SchemaToolResult {
    /// Error code of a failed result
    pub fn error_code(&self) -> Option<&str> {
        if self.success {
            return None;
        }
        self.content.get("error_code").and_then(Value::as_str)
    }

    /// Error message of a failed result
    pub fn error_message(&self) -> Option<&str> {
        if self.success {
            return None;
        }
        self.content.get("error").and_then(Value::as_str)
    }
}

/// MCP server exposing the schema operations as tools.
///
/// # Examples
///
/// ```rust,no_run
/// use schema_mcp_server::config::{ClientConfig, CredentialSource};
/// use schema_mcp_server::mcp_integration::SchemaMcpServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mcp_server =
///         SchemaMcpServer::from_config(CredentialSource::from_env(), &ClientConfig::from_env())?;
///     println!("Available tools: {}", mcp_server.get_tools().len());
///     mcp_server.run_stdio().await?;
///     Ok(())
/// }
/// ```
pub struct SchemaMcpServer<T = HttpTokenProvider, D = HttpSchemaDispatcher> {
    pub(crate) operation_handler: SchemaOperationHandler<T, D>,
    pub(crate) server_info: McpServerInfo,
}

impl SchemaMcpServer {
    /// Server using the HTTP collaborators.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn from_config(
        credentials: CredentialSource,
        client_config: &ClientConfig,
    ) -> ConfigResult<Self> {
        Ok(Self::new(SchemaOperationHandler::from_config(
            credentials,
            client_config,
        )?))
    }
}

impl<T: TokenProvider, D: SchemaDispatcher> SchemaMcpServer<T, D> {
    /// Wrap an operation handler with default server information
    pub fn new(operation_handler: SchemaOperationHandler<T, D>) -> Self {
        Self {
            operation_handler,
            server_info: McpServerInfo::default(),
        }
    }

    /// Wrap an operation handler with custom server information
    pub fn with_info(operation_handler: SchemaOperationHandler<T, D>, server_info: McpServerInfo) -> Self {
        Self {
            operation_handler,
            server_info,
        }
    }

    /// Server information reported on `initialize`
    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }
}
