//! Error types for schema operations.
//!
//! Each layer of the pipeline has its own error type: configuration,
//! argument validation, token acquisition and schema dispatch. The operation
//! handler is the only place where these are folded into the outward-facing
//! [`OperationError`].
//!
//! None of the variants carry the user secret or an access token.

use crate::schema::SchemaOperation;

/// Errors raised while resolving credentials or building the HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One or more credential values are absent or empty
    #[error("Missing required configuration: {}", missing.join(", "))]
    MissingCredentials { missing: Vec<String> },

    /// The API base URL could not be used
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {message}")]
    HttpClient { message: String },
}

/// Errors raised while validating caller-supplied tool arguments.
///
/// These are always reported before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required parameters are absent, null or empty
    #[error("Missing required parameters: {}", missing.join(", "))]
    MissingParameters { missing: Vec<String> },

    /// A parameter is present but has the wrong JSON type
    #[error("Parameter '{parameter}' must be {expected}")]
    InvalidParameterType { parameter: String, expected: String },

    /// A `Fields` entry lacks a usable Name or Type
    #[error("Each field must have Name and Type properties (field {index}: {reason})")]
    InvalidField { index: usize, reason: String },
}

/// Errors raised while exchanging credentials for an access token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The token endpoint could not be reached
    #[error("Token request failed: {message}")]
    Transport { message: String },

    /// The token endpoint answered with something that is not JSON
    #[error("Invalid response format from token endpoint (HTTP {status}): {message}")]
    InvalidResponseFormat { status: u16, message: String },

    /// The token endpoint answered with a non-success status
    #[error("Token generation failed: HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response carried none of the recognised token fields
    #[error("No token found in API response (available fields: {})", available_fields.join(", "))]
    NoToken { available_fields: Vec<String> },
}

/// Errors raised while calling the schema-definition endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The schema endpoint could not be reached
    #[error("Schema request failed: {message}")]
    Transport { message: String },

    /// The schema endpoint answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request payload could not be serialized
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Machine-readable classification of an [`OperationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied bad input
    InvalidParams,
    /// Configuration, authentication or the remote API failed
    OperationFailed,
    /// Anything unexpected
    Internal,
}

impl ErrorKind {
    /// JSON-RPC error code for this kind.
    pub fn code(self) -> i64 {
        match self {
            ErrorKind::InvalidParams => -32602,
            ErrorKind::OperationFailed | ErrorKind::Internal => -32603,
        }
    }

    /// Stable string used in tool results.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidParams => "INVALID_PARAMS",
            ErrorKind::OperationFailed => "OPERATION_FAILED",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Outward-facing error for a create/update schema call.
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    /// Caller arguments failed validation
    #[error("Invalid params: {0}")]
    InvalidParams(#[from] ValidationError),

    /// A downstream step (credentials, token, dispatch) failed
    #[error("Failed to {} schema: {detail}", operation.verb())]
    Failed {
        operation: SchemaOperation,
        detail: String,
    },

    /// Unexpected failure inside the pipeline
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl OperationError {
    /// Wrap a downstream failure for the given operation
    pub fn failed(operation: SchemaOperation, source: impl std::fmt::Display) -> Self {
        Self::Failed {
            operation,
            detail: source.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Classification used by the RPC layer
    pub fn kind(&self) -> ErrorKind {
        match self {
            OperationError::InvalidParams(_) => ErrorKind::InvalidParams,
            OperationError::Failed { .. } => ErrorKind::OperationFailed,
            OperationError::Internal { .. } => ErrorKind::Internal,
        }
    }
}

impl ValidationError {
    /// Create a missing parameters error
    pub fn missing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingParameters {
            missing: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(parameter: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidParameterType {
            parameter: parameter.into(),
            expected: expected.into(),
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            index,
            reason: reason.into(),
        }
    }
}

// Result type aliases for convenience
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type AuthResult<T> = Result<T, AuthError>;
pub type ApiResult<T> = Result<T, ApiError>;
pub type OperationResult<T> = Result<T, OperationError>;
