//! MCP (Model Context Protocol) integration for schema management
//!
//! Exposes the create and update schema operations as discoverable tools
//! over JSON-RPC 2.0 on stdio.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │   MCP Client    │───▶│  MCP Protocol    │───▶│ Operation Handler│
//! │   (AI agent)    │    │  (This Module)   │    │ token + dispatch │
//! └─────────────────┘    └──────────────────┘    └──────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - `core` - Core types (McpServerInfo, SchemaToolResult, SchemaMcpServer)
//! - `protocol` - Tool discovery, dispatch and JSON-RPC message handling
//! - `stdio` - Newline-delimited framing over stdin/stdout
//! - `tools/` - JSON schema definitions for tool discovery
//! - `handlers/` - Tool execution handlers
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use schema_mcp_server::config::{ClientConfig, CredentialSource};
//! use schema_mcp_server::mcp_integration::SchemaMcpServer;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mcp_server =
//!         SchemaMcpServer::from_config(CredentialSource::from_env(), &ClientConfig::default())?;
//!
//!     let result = mcp_server
//!         .execute_tool(
//!             "create_schema",
//!             json!({
//!                 "CollectionName": "Items",
//!                 "SchemaName": "Items",
//!                 "Fields": [{"Name": "Price", "Type": "Float"}],
//!                 "ProjectKey": "pk1"
//!             }),
//!         )
//!         .await;
//!
//!     if result.success {
//!         println!("Schema created");
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod handlers;
pub mod protocol;
pub mod stdio;
pub mod tools;


// Re-export core types for convenience
pub use core::{McpServerInfo, SchemaMcpServer, SchemaToolResult};
pub use protocol::PROTOCOL_VERSION;
