//! Schema create/update handlers for MCP integration
//!
//! These translate between raw tool arguments and the operation handler, and
//! shape the outcome as a [`SchemaToolResult`].

use crate::auth::TokenProvider;
use crate::dispatcher::SchemaDispatcher;
use crate::error::OperationError;
use crate::mcp_integration::core::{SchemaMcpServer, SchemaToolResult};
use crate::operation_handler::SchemaOperationResponse;
use crate::schema::SchemaOperation;
use serde_json::{Value, json};

/// Handle schema creation through MCP
pub async fn handle_create_schema<T: TokenProvider, D: SchemaDispatcher>(
    server: &SchemaMcpServer<T, D>,
    arguments: Value,
) -> SchemaToolResult {
    handle_schema_operation(server, SchemaOperation::Create, arguments).await
}

/// Handle schema update through MCP
pub async fn handle_update_schema<T: TokenProvider, D: SchemaDispatcher>(
    server: &SchemaMcpServer<T, D>,
    arguments: Value,
) -> SchemaToolResult {
    handle_schema_operation(server, SchemaOperation::Update, arguments).await
}

async fn handle_schema_operation<T: TokenProvider, D: SchemaDispatcher>(
    server: &SchemaMcpServer<T, D>,
    operation: SchemaOperation,
    arguments: Value,
) -> SchemaToolResult {
    match server.operation_handler.execute(operation, arguments).await {
        Ok(response) => success_result(response),
        Err(error) => error_result(operation, &error),
    }
}

fn success_result(response: SchemaOperationResponse) -> SchemaToolResult {
    SchemaToolResult {
        success: true,
        content: json!({
            "content": [{
                "type": "text",
                "text": response.message,
            }]
        }),
        metadata: Some(json!({
            "operation": response.operation.tool_name(),
            "schema_name": response.schema_name,
            "request_id": response.request_id,
            "response": response.response.to_value(),
        })),
    }
}

/// Shape an operation error as a failed tool result.
pub fn error_result(operation: SchemaOperation, error: &OperationError) -> SchemaToolResult {
    SchemaToolResult {
        success: false,
        content: json!({
            "error": error.to_string(),
            "error_code": error.kind().as_str(),
        }),
        metadata: Some(json!({"operation": operation.tool_name()})),
    }
}
