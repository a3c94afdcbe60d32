//! Structured audit events for tool executions and outbound API calls.
//!
//! Events are single-line JSON records emitted through the `log` facade on
//! the [`AUDIT_TARGET`] target, so the host can route or filter them
//! independently of ordinary diagnostics. Credentials never appear in an
//! event: headers go through [`mask_headers`] and argument echoes through
//! [`redact_arguments`] before they are recorded.

use chrono::Utc;
use log::{Level, log};
use serde_json::{Map, Value, json};
use std::fmt;

/// Log target for audit events
pub const AUDIT_TARGET: &str = "schema_mcp_server::audit";

const HIDDEN: &str = "[HIDDEN]";
const MASKED_BEARER: &str = "Bearer [HIDDEN]";
const SENSITIVE_KEYS: &[&str] = &["userkey", "password", "secret", "token", "access_token"];

/// Phase of a tool execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolExecutionStatus {
    Start,
    Success,
    Error,
}

impl ToolExecutionStatus {
    fn level(self) -> Level {
        match self {
            ToolExecutionStatus::Start | ToolExecutionStatus::Success => Level::Info,
            ToolExecutionStatus::Error => Level::Error,
        }
    }
}

impl fmt::Display for ToolExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToolExecutionStatus::Start => "START",
            ToolExecutionStatus::Success => "SUCCESS",
            ToolExecutionStatus::Error => "ERROR",
        })
    }
}

/// Direction of an outbound API call event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCallDirection {
    Request,
    Response,
}

impl fmt::Display for ApiCallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApiCallDirection::Request => "REQUEST",
            ApiCallDirection::Response => "RESPONSE",
        })
    }
}

/// Build a tool-execution event record.
pub fn tool_execution_event(tool: &str, status: ToolExecutionStatus, details: &Value) -> Value {
    json!({
        "timestamp": Utc::now().to_rfc3339(),
        "event": "tool_execution",
        "tool": tool,
        "status": status.to_string(),
        "details": details,
    })
}

/// Build an API-call event record.
pub fn api_call_event(direction: ApiCallDirection, url: &str, details: &Value) -> Value {
    json!({
        "timestamp": Utc::now().to_rfc3339(),
        "event": "api_call",
        "direction": direction.to_string(),
        "url": url,
        "details": details,
    })
}

/// Record a tool execution phase.
///
/// `START` and `SUCCESS` are logged at info level, `ERROR` at error level.
pub fn log_tool_execution(tool: &str, status: ToolExecutionStatus, details: &Value) {
    let level = status.level();
    if log::log_enabled!(target: AUDIT_TARGET, level) {
        log!(
            target: AUDIT_TARGET,
            level,
            "{}",
            tool_execution_event(tool, status, details)
        );
    }
}

/// Record an outbound request or its response at debug level.
pub fn log_api_call(direction: ApiCallDirection, url: &str, details: &Value) {
    if log::log_enabled!(target: AUDIT_TARGET, Level::Debug) {
        log!(
            target: AUDIT_TARGET,
            Level::Debug,
            "{}",
            api_call_event(direction, url, details)
        );
    }
}

/// Render headers for logging with credentials masked.
///
/// `Authorization` becomes `Bearer [HIDDEN]`; any header named like a
/// credential (`userkey`, `password`, ...) becomes `[HIDDEN]`.
pub fn mask_headers(headers: &[(&str, &str)]) -> Value {
    let masked: Map<String, Value> = headers
        .iter()
        .map(|(name, value)| {
            let shown = if name.eq_ignore_ascii_case("authorization") {
                MASKED_BEARER
            } else if is_sensitive(name) {
                HIDDEN
            } else {
                *value
            };
            (name.to_string(), Value::String(shown.to_string()))
        })
        .collect();
    Value::Object(masked)
}

/// Copy of tool arguments with credential-like keys hidden, at any depth.
pub fn redact_arguments(arguments: &Value) -> Value {
    match arguments {
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(key, value)| {
                    let redacted = if is_sensitive(key) {
                        Value::String(HIDDEN.to_string())
                    } else {
                        redact_arguments(value)
                    };
                    (key.clone(), redacted)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact_arguments).collect()),
        other => other.clone(),
    }
}

fn is_sensitive(key: &str) -> bool {
    SENSITIVE_KEYS
        .iter()
        .any(|sensitive| key.eq_ignore_ascii_case(sensitive))
}
