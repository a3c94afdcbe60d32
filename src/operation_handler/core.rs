//! Core schema operation pipeline
//!
//! One call runs validate, resolve credentials, acquire token, dispatch and
//! format, strictly in that order. Nothing is shared between calls except the
//! immutable collaborators held by the handler.

use crate::auth::{HttpTokenProvider, TokenProvider};
use crate::config::CredentialSource;
use crate::dispatcher::{
    DispatchRequest, HttpSchemaDispatcher, ResponseBody, SCHEMA_DEFINE_PATH, SchemaDispatcher,
};
use crate::error::{OperationError, OperationResult};
use crate::schema::{SchemaOperation, SchemaRequest};
use crate::telemetry::{ToolExecutionStatus, log_tool_execution, redact_arguments};
use log::{debug, info, warn};
use serde_json::{Value, json};

/// Transport-agnostic handler for schema create and update calls.
///
/// The type parameters default to the HTTP collaborators; tests substitute
/// their own through
/// [`SchemaOperationHandlerBuilder`](super::SchemaOperationHandlerBuilder).
pub struct SchemaOperationHandler<T = HttpTokenProvider, D = HttpSchemaDispatcher> {
    pub(crate) credentials: CredentialSource,
    pub(crate) token_provider: T,
    pub(crate) dispatcher: D,
}

/// Result of a successful schema operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaOperationResponse {
    /// Which operation ran
    pub operation: SchemaOperation,
    /// `SchemaName` from the request
    pub schema_name: String,
    /// Human-readable confirmation including the pretty-printed body
    pub message: String,
    /// Body returned by the schema endpoint
    pub response: ResponseBody,
    /// Correlation id for this call
    pub request_id: String,
}

impl SchemaOperationResponse {
    fn new(
        operation: SchemaOperation,
        schema_name: &str,
        response: ResponseBody,
        request_id: String,
    ) -> Self {
        let message = format!(
            "✅ Schema \"{}\" {} successfully!\n\nResponse: {}",
            schema_name,
            operation.past_tense(),
            response.pretty()
        );
        Self {
            operation,
            schema_name: schema_name.to_string(),
            message,
            response,
            request_id,
        }
    }
}

impl<T: TokenProvider, D: SchemaDispatcher> SchemaOperationHandler<T, D> {
    /// Create a handler from explicit collaborators.
    pub fn new(credentials: CredentialSource, token_provider: T, dispatcher: D) -> Self {
        Self {
            credentials,
            token_provider,
            dispatcher,
        }
    }

    /// Define a new schema.
    pub async fn create_schema(&self, arguments: Value) -> OperationResult<SchemaOperationResponse> {
        self.execute(SchemaOperation::Create, arguments).await
    }

    /// Redefine the schema record named by `ItemId`.
    pub async fn update_schema(&self, arguments: Value) -> OperationResult<SchemaOperationResponse> {
        self.execute(SchemaOperation::Update, arguments).await
    }

    /// Run one schema operation end to end.
    ///
    /// Validation failures return before any network activity. Every
    /// downstream failure is wrapped as [`OperationError::Failed`] naming
    /// the operation.
    pub async fn execute(
        &self,
        operation: SchemaOperation,
        arguments: Value,
    ) -> OperationResult<SchemaOperationResponse> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let tool = operation.tool_name();

        info!(
            "Schema operation handler processing {} (request: '{}')",
            tool, request_id
        );
        log_tool_execution(
            tool,
            ToolExecutionStatus::Start,
            &json!({
                "requestId": request_id,
                "arguments": redact_arguments(&arguments),
            }),
        );

        let result = self.run(operation, &arguments, request_id.clone()).await;

        match &result {
            Ok(response) => {
                debug!(
                    "Schema operation handler completed successfully (request: '{}')",
                    request_id
                );
                log_tool_execution(
                    tool,
                    ToolExecutionStatus::Success,
                    &json!({
                        "requestId": request_id,
                        "schemaName": response.schema_name,
                    }),
                );
            }
            Err(e) => {
                warn!(
                    "Schema operation handler failed: {} (request: '{}')",
                    e, request_id
                );
                log_tool_execution(
                    tool,
                    ToolExecutionStatus::Error,
                    &json!({
                        "requestId": request_id,
                        "error": e.to_string(),
                        "errorCode": e.kind().as_str(),
                    }),
                );
            }
        }

        result
    }

    async fn run(
        &self,
        operation: SchemaOperation,
        arguments: &Value,
        request_id: String,
    ) -> OperationResult<SchemaOperationResponse> {
        let request = SchemaRequest::from_arguments(operation, arguments)?;

        let credentials = self
            .credentials
            .resolve()
            .map_err(|e| OperationError::failed(operation, e))?;

        let token = self
            .token_provider
            .acquire_token(&credentials)
            .await
            .map_err(|e| OperationError::failed(operation, e))?;

        let url = credentials.endpoint(SCHEMA_DEFINE_PATH);
        let payload = request.payload();
        let body = self
            .dispatcher
            .send(DispatchRequest {
                url: &url,
                operation,
                tenant_key: credentials.tenant_key(),
                token: &token,
                payload: &payload,
            })
            .await
            .map_err(|e| OperationError::failed(operation, e))?;

        Ok(SchemaOperationResponse::new(
            operation,
            &request.definition().schema_name,
            body,
            request_id,
        ))
    }
}
