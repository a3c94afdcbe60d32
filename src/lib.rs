//! Schema management MCP server library for Rust.
//!
//! Exposes two tools, `create_schema` and `update_schema`, over the Model
//! Context Protocol. Each call validates its arguments, exchanges the
//! configured credentials for a fresh bearer token, and forwards the schema
//! definition to the remote schema API.
//!
//! # Core Components
//!
//! - [`SchemaMcpServer`] - MCP tool registry and JSON-RPC stdio server
//! - [`SchemaOperationHandler`] - the per-call create/update pipeline
//! - [`TokenProvider`] / [`SchemaDispatcher`] - seams for the two HTTP calls
//! - [`CredentialSource`] - explicit credential configuration
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use schema_mcp_server::{ClientConfig, CredentialSource, SchemaMcpServer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = SchemaMcpServer::from_config(CredentialSource::from_env(), &ClientConfig::from_env())?;
//! server.run_stdio().await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod mcp_integration;
pub mod operation_handler;
pub mod schema;
pub mod secret;
pub mod telemetry;

// Re-export commonly used types for convenience
pub use auth::{AccessToken, HttpTokenProvider, TokenProvider};
pub use config::{ClientConfig, CredentialSource, Credentials};
pub use dispatcher::{HttpSchemaDispatcher, ResponseBody, SchemaDispatcher};
pub use error::{
    ApiError, AuthError, ConfigError, ErrorKind, OperationError, OperationResult, ValidationError,
};
pub use mcp_integration::{McpServerInfo, SchemaMcpServer, SchemaToolResult};
pub use operation_handler::{
    SchemaOperationHandler, SchemaOperationHandlerBuilder, SchemaOperationResponse,
};
pub use schema::{FieldDefinition, SchemaDefinition, SchemaOperation, SchemaRequest};
pub use secret::SecretString;
