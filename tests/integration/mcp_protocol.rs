//! JSON-RPC tool calls against a mocked schema API.

use crate::common::{SCHEMA_PATH, fixtures, http_mcp_server, mock_token_endpoint};
use httpmock::prelude::*;
use serde_json::{Value, json};

fn tool_call(id: i64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    })
}

#[tokio::test]
async fn test_tools_call_create_returns_text_content() {
    let server = MockServer::start();
    mock_token_endpoint(&server, "tok1");
    let schema_mock = server.mock(|when, then| {
        when.method(POST)
            .path(SCHEMA_PATH)
            .header("authorization", "Bearer tok1");
        then.status(200).body(r#"{"success":true}"#);
    });

    let mcp_server = http_mcp_server(&server);
    let response = mcp_server
        .handle_message(&tool_call(1, "create_schema", fixtures::create_args()))
        .await
        .unwrap();

    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["content"][0]["type"], "text");
    assert_eq!(
        response["result"]["content"][0]["text"],
        "✅ Schema \"Items\" created successfully!\n\nResponse: {\n  \"success\": true\n}"
    );
    schema_mock.assert();
}

#[tokio::test]
async fn test_tools_call_update_missing_item_id_is_invalid_params() {
    let server = MockServer::start();
    let token_mock = mock_token_endpoint(&server, "tok1");

    let mcp_server = http_mcp_server(&server);
    let response = mcp_server
        .handle_message(&tool_call(2, "update_schema", fixtures::create_args()))
        .await
        .unwrap();

    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(
        response["error"]["message"],
        "Invalid params: Missing required parameters: ItemId"
    );
    assert_eq!(token_mock.calls(), 0);
}

#[tokio::test]
async fn test_tools_call_api_failure_is_internal_error() {
    let server = MockServer::start();
    mock_token_endpoint(&server, "tok1");
    server.mock(|when, then| {
        when.method(PUT).path(SCHEMA_PATH);
        then.status(404).body(r#"{"message":"Item not found"}"#);
    });

    let mcp_server = http_mcp_server(&server);
    let response = mcp_server
        .handle_message(&tool_call(3, "update_schema", fixtures::update_args("missing")))
        .await
        .unwrap();

    assert_eq!(response["error"]["code"], -32603);
    let message = response["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("Failed to update schema: HTTP 404:"));
    assert!(message.contains("Item not found"));
}

#[tokio::test]
async fn test_serve_handles_calls_concurrently() {
    let server = MockServer::start();
    let token_mock = mock_token_endpoint(&server, "tok1");
    let create_mock = server.mock(|when, then| {
        when.method(POST).path(SCHEMA_PATH);
        then.status(200).body(r#"{"created":true}"#);
    });
    let update_mock = server.mock(|when, then| {
        when.method(PUT).path(SCHEMA_PATH);
        then.status(200).body(r#"{"updated":true}"#);
    });

    let input = [
        json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}).to_string(),
        tool_call(2, "create_schema", fixtures::create_args()).to_string(),
        tool_call(3, "update_schema", fixtures::update_args("id1")).to_string(),
        tool_call(4, "create_schema", fixtures::create_args()).to_string(),
    ]
    .join("\n");

    let output = http_mcp_server(&server)
        .serve(input.as_bytes(), Vec::new())
        .await
        .unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 4);

    let mut ids: Vec<i64> = responses
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert!(responses.iter().all(|r| r.get("error").is_none()));

    token_mock.assert_calls(3);
    create_mock.assert_calls(2);
    update_mock.assert_calls(1);
}
