//! Integration tests
//!
//! These exercise the full stack: argument validation, token exchange and
//! schema dispatch over real HTTP against `httpmock` servers.
//!
//! - [`end_to_end`] - operation handler flows
//! - [`mcp_protocol`] - the same flows driven through JSON-RPC

pub mod end_to_end;
pub mod mcp_protocol;
