//! MCP integration handlers
//!
//! Handler implementations for MCP tool execution.

pub mod schema_ops;

pub use schema_ops::*;
