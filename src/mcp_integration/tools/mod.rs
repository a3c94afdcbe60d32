//! MCP tool schema definitions
//!
//! JSON Schema descriptions of the tools clients can discover through
//! `tools/list`. They are consumed by the protocol layer and are not
//! intended for direct use.

pub mod schema_tools;

pub use schema_tools::*;
