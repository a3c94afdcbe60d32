//! Authenticated calls to the schema-definition endpoint.
//!
//! A [`DispatchRequest`] can only be built with an [`AccessToken`], so every
//! schema call is preceded by a successful token exchange.

use crate::auth::AccessToken;
use crate::config::TENANT_HEADER;
use crate::error::{ApiError, ApiResult};
use crate::schema::{SchemaOperation, SchemaPayload};
use crate::telemetry::{ApiCallDirection, log_api_call, mask_headers};
use log::{debug, error};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Value, json};
use std::future::Future;

/// Schema-definition endpoint path, shared by create and update
pub const SCHEMA_DEFINE_PATH: &str = "graphql/v1/schemas/define";

const JSON_CONTENT_TYPE: &str = "application/json";

/// One authenticated call to the schema endpoint.
#[derive(Debug, Clone, Copy)]
pub struct DispatchRequest<'a> {
    /// Full endpoint URL
    pub url: &'a str,
    /// Selects the HTTP verb
    pub operation: SchemaOperation,
    /// Tenant key for the tenant header
    pub tenant_key: &'a str,
    /// Token minted for this call
    pub token: &'a AccessToken,
    /// JSON body
    pub payload: &'a SchemaPayload<'a>,
}

/// Body returned by the schema endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body parsed as JSON
    Json(Value),
    /// Body that was not valid JSON, kept verbatim
    Text(String),
}

impl ResponseBody {
    /// Parse a raw body, falling back to text.
    pub fn from_text(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(raw),
        }
    }

    /// The body as a JSON value; text becomes a JSON string.
    pub fn to_value(&self) -> Value {
        match self {
            ResponseBody::Json(value) => value.clone(),
            ResponseBody::Text(raw) => Value::String(raw.clone()),
        }
    }

    /// Two-space indented JSON rendering.
    pub fn pretty(&self) -> String {
        let rendered = match self {
            ResponseBody::Json(value) => serde_json::to_string_pretty(value),
            ResponseBody::Text(raw) => serde_json::to_string(raw),
        };
        // Serializing an in-memory Value cannot fail
        rendered.unwrap_or_default()
    }
}

impl std::fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseBody::Json(value) => write!(f, "{}", value),
            ResponseBody::Text(raw) => f.write_str(raw),
        }
    }
}

/// Transport for authenticated schema calls.
pub trait SchemaDispatcher: Send + Sync {
    /// Send the request and return the response body on a 2xx status.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Serialization`] if the payload cannot be encoded
    /// * [`ApiError::Transport`] if the endpoint is unreachable
    /// * [`ApiError::Status`] for a non-success status, carrying the body
    fn send(
        &self,
        request: DispatchRequest<'_>,
    ) -> impl Future<Output = ApiResult<ResponseBody>> + Send;
}

/// [`SchemaDispatcher`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSchemaDispatcher {
    client: reqwest::Client,
}

impl HttpSchemaDispatcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl SchemaDispatcher for HttpSchemaDispatcher {
    async fn send(&self, request: DispatchRequest<'_>) -> ApiResult<ResponseBody> {
        let body = serde_json::to_vec(request.payload)?;
        let method = request.operation.method();

        log_api_call(
            ApiCallDirection::Request,
            request.url,
            &json!({
                "method": method.as_str(),
                "headers": mask_headers(&[
                    ("Content-Type", JSON_CONTENT_TYPE),
                    (TENANT_HEADER, request.tenant_key),
                    ("Authorization", "Bearer"),
                ]),
                "payload": request.payload,
            }),
        );

        let response = self
            .client
            .request(method, request.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(TENANT_HEADER, request.tenant_key)
            .header(AUTHORIZATION, request.token.bearer_header())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("Schema endpoint unreachable: {}", e);
                ApiError::Transport {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| ApiError::Transport {
            message: e.to_string(),
        })?;
        let parsed = ResponseBody::from_text(raw.clone());

        log_api_call(
            ApiCallDirection::Response,
            request.url,
            &json!({
                "status": status.as_u16(),
                "statusText": status.canonical_reason().unwrap_or_default(),
                "data": parsed.to_value(),
            }),
        );

        if !status.is_success() {
            error!(
                "Schema {} rejected with HTTP {}",
                request.operation,
                status.as_u16()
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: raw,
            });
        }

        debug!("Schema {} accepted (HTTP {})", request.operation, status.as_u16());
        Ok(parsed)
    }
}
