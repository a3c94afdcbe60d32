//! # Schema MCP Server
//!
//! Runs the schema management tools as an MCP server on stdin/stdout.
//!
//! ## Configuration
//!
//! | Variable            | Meaning                                  |
//! |---------------------|------------------------------------------|
//! | `BLOCKS_KEY`        | tenant key sent as `x-blocks-key`        |
//! | `USERNAME`          | username for the password grant          |
//! | `USER_KEY`          | secret for the password grant            |
//! | `API_BASE_URL`      | base URL of the schema API               |
//! | `HTTP_TIMEOUT_SECS` | optional transport timeout (default 30)  |
//! | `RUST_LOG`          | log filter (default `info`)              |
//!
//! Missing credentials do not prevent startup; each tool call reports them.
//!
//! ## Usage
//!
//! ```bash
//! BLOCKS_KEY=... USERNAME=... USER_KEY=... API_BASE_URL=https://api.example.com \
//!     cargo run --bin schema-mcp-server
//! ```
//!
//! Logs go to stderr. stdout carries protocol frames only.

use log::{error, info};
use schema_mcp_server::{ClientConfig, CredentialSource, SchemaMcpServer};
use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let credentials = CredentialSource::from_env();
    for (name, presence) in credentials.presence() {
        info!("{}: {}", name, presence);
    }

    let client_config = ClientConfig::from_env();
    info!(
        "HTTP timeout: {}s",
        client_config.request_timeout.as_secs()
    );

    let server = match SchemaMcpServer::from_config(credentials, &client_config) {
        Ok(server) => server,
        Err(e) => {
            error!("Server startup failed: {}", e);
            process::exit(1);
        }
    };
    info!("{}", server.server_info().description);

    tokio::select! {
        result = server.run_stdio() => {
            match result {
                Ok(()) => info!("Input closed, shutting down"),
                Err(e) => {
                    error!("stdio transport failed: {}", e);
                    process::exit(1);
                }
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received SIGINT, shutting down server");
        }
    }
}
