//! Common test utilities.
//!
//! Helpers for standing up a mocked schema API with `httpmock` and wiring
//! the real HTTP collaborators against it.

use httpmock::prelude::*;
use schema_mcp_server::config::ClientConfig;
use schema_mcp_server::{CredentialSource, SchemaMcpServer, SchemaOperationHandler};
use std::time::Duration;

pub mod fixtures;

/// Tenant key configured for every test server
pub const TENANT_KEY: &str = "tenant-1";
/// Username configured for every test server
pub const USERNAME: &str = "svc-user";
/// Secret configured for every test server
pub const SECRET: &str = "s3cret-value";

/// Token endpoint path on the mock server
pub const TOKEN_PATH: &str = "/authentication/v1/OAuth/Token";
/// Schema endpoint path on the mock server
pub const SCHEMA_PATH: &str = "/graphql/v1/schemas/define";

/// Credentials pointing at the mock server
pub fn credentials_for(server: &MockServer) -> CredentialSource {
    CredentialSource::new(
        Some(TENANT_KEY.to_string()),
        Some(USERNAME.to_string()),
        Some(SECRET.to_string()),
        Some(server.base_url()),
    )
}

/// Client settings with a short timeout for tests
pub fn client_config() -> ClientConfig {
    ClientConfig::default().with_timeout(Duration::from_secs(5))
}

/// Operation handler using the HTTP collaborators against the mock server
pub fn http_handler(server: &MockServer) -> SchemaOperationHandler {
    SchemaOperationHandler::from_config(credentials_for(server), &client_config())
        .expect("Failed to build operation handler")
}

/// MCP server using the HTTP collaborators against the mock server
pub fn http_mcp_server(server: &MockServer) -> SchemaMcpServer {
    SchemaMcpServer::from_config(credentials_for(server), &client_config())
        .expect("Failed to build MCP server")
}

/// Mock a successful token exchange returning `token` as `access_token`
pub fn mock_token_endpoint<'a>(server: &'a MockServer, token: &str) -> httpmock::Mock<'a> {
    let body = serde_json::json!({"access_token": token, "token_type": "Bearer"}).to_string();
    server.mock(|when, then| {
        when.method(POST)
            .path(TOKEN_PATH)
            .header("x-blocks-key", TENANT_KEY)
            .body_includes("grant_type=password");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
