//! End-to-end create/update flows through the HTTP collaborators.
//!
//! Every test stands up its own mock API, so call counts are exact.

use crate::common::{
    SCHEMA_PATH, SECRET, TENANT_KEY, TOKEN_PATH, fixtures, http_handler, mock_token_endpoint,
};
use httpmock::prelude::*;
use schema_mcp_server::{ErrorKind, OperationError, ResponseBody, SchemaOperation};
use serde_json::json;

#[tokio::test]
async fn test_create_schema_full_flow() {
    let server = MockServer::start();
    let token_mock = mock_token_endpoint(&server, "tok1");
    let schema_mock = server.mock(|when, then| {
        when.method(POST)
            .path(SCHEMA_PATH)
            .header("authorization", "Bearer tok1")
            .header("x-blocks-key", TENANT_KEY)
            .header("content-type", "application/json")
            .body_includes(r#""CollectionName":"Items""#)
            .body_includes(r#""SchemaType":1"#)
            .body_includes(r#""ProjectKey":"pk1""#)
            .body_excludes("ItemId");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true,"itemId":"new-id"}"#);
    });

    let response = http_handler(&server)
        .create_schema(fixtures::create_args())
        .await
        .unwrap();

    assert_eq!(response.operation, SchemaOperation::Create);
    assert_eq!(
        response.response,
        ResponseBody::Json(json!({"success": true, "itemId": "new-id"}))
    );
    let expected_body =
        serde_json::to_string_pretty(&json!({"success": true, "itemId": "new-id"})).unwrap();
    assert_eq!(
        response.message,
        format!(
            "✅ Schema \"Items\" created successfully!\n\nResponse: {}",
            expected_body
        )
    );
    token_mock.assert();
    schema_mock.assert();
}

#[tokio::test]
async fn test_update_schema_full_flow() {
    let server = MockServer::start();
    let token_mock = mock_token_endpoint(&server, "tok1");
    let schema_mock = server.mock(|when, then| {
        when.method(PUT)
            .path(SCHEMA_PATH)
            .header("authorization", "Bearer tok1")
            .body_includes(r#"{"ItemId":"id1","CollectionName":"Items""#)
            .body_includes(r#""IsArray":true"#);
        then.status(200).body(r#"{"success":true}"#);
    });

    let response = http_handler(&server)
        .update_schema(fixtures::update_args("id1"))
        .await
        .unwrap();

    assert_eq!(
        response.message,
        "✅ Schema \"Items\" updated successfully!\n\nResponse: {\n  \"success\": true\n}"
    );
    token_mock.assert();
    schema_mock.assert();
}

#[tokio::test]
async fn test_update_without_item_id_never_reaches_api() {
    let server = MockServer::start();
    let token_mock = mock_token_endpoint(&server, "tok1");
    let schema_mock = server.mock(|when, then| {
        when.method(PUT).path(SCHEMA_PATH);
        then.status(200).body("{}");
    });

    let err = http_handler(&server)
        .update_schema(fixtures::create_args())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidParams);
    assert!(err.to_string().contains("ItemId"));
    assert_eq!(token_mock.calls(), 0);
    assert_eq!(schema_mock.calls(), 0);
}

#[tokio::test]
async fn test_token_rejection_skips_schema_call() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(401).body(r#"{"error":"invalid_grant"}"#);
    });
    let schema_mock = server.mock(|when, then| {
        when.path(SCHEMA_PATH);
        then.status(200).body("{}");
    });

    let err = http_handler(&server)
        .create_schema(fixtures::create_args())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OperationError::Failed {
            operation: SchemaOperation::Create,
            ..
        }
    ));
    assert!(err.to_string().starts_with("Failed to create schema: Token generation failed: HTTP 401"));
    assert!(!err.to_string().contains(SECRET));
    token_mock.assert();
    assert_eq!(schema_mock.calls(), 0);
}

#[tokio::test]
async fn test_token_response_without_token_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(200).body(r#"{"expires_in":3600}"#);
    });
    let schema_mock = server.mock(|when, then| {
        when.path(SCHEMA_PATH);
        then.status(200).body("{}");
    });

    let err = http_handler(&server)
        .create_schema(fixtures::create_args())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("No token found"));
    assert!(err.to_string().contains("expires_in"));
    assert_eq!(schema_mock.calls(), 0);
}

#[tokio::test]
async fn test_api_error_is_reported_with_status_and_body() {
    let server = MockServer::start();
    mock_token_endpoint(&server, "tok1");
    server.mock(|when, then| {
        when.method(POST).path(SCHEMA_PATH);
        then.status(400).body("Bad Request");
    });

    let err = http_handler(&server)
        .create_schema(fixtures::create_args())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to create schema: HTTP 400: Bad Request"
    );
    assert_eq!(err.kind(), ErrorKind::OperationFailed);
    assert!(!err.to_string().contains("tok1"));
}

#[tokio::test]
async fn test_plain_text_success_body() {
    let server = MockServer::start();
    mock_token_endpoint(&server, "tok1");
    server.mock(|when, then| {
        when.method(POST).path(SCHEMA_PATH);
        then.status(200).body("OK");
    });

    let response = http_handler(&server)
        .create_schema(fixtures::create_args())
        .await
        .unwrap();

    assert_eq!(response.response, ResponseBody::Text("OK".to_string()));
    assert!(response.message.ends_with("Response: \"OK\""));
}

#[tokio::test]
async fn test_identical_creates_are_both_sent() {
    let server = MockServer::start();
    let token_mock = mock_token_endpoint(&server, "tok1");
    let schema_mock = server.mock(|when, then| {
        when.method(POST).path(SCHEMA_PATH);
        then.status(200).body(r#"{"success":true}"#);
    });

    let handler = http_handler(&server);
    handler.create_schema(fixtures::create_args()).await.unwrap();
    handler.create_schema(fixtures::create_args()).await.unwrap();

    token_mock.assert_calls(2);
    schema_mock.assert_calls(2);
}

#[tokio::test]
async fn test_missing_configuration_fails_after_validation() {
    let server = MockServer::start();
    let token_mock = mock_token_endpoint(&server, "tok1");

    let handler = schema_mcp_server::SchemaOperationHandler::from_config(
        schema_mcp_server::CredentialSource::new(None, None, None, Some(server.base_url())),
        &crate::common::client_config(),
    )
    .unwrap();

    let err = handler
        .create_schema(fixtures::create_args())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to create schema: Missing required configuration: tenantKey, username, secret"
    );
    assert_eq!(token_mock.calls(), 0);
}
