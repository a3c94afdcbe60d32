use super::{AccessToken, TokenProvider};
use crate::config::{Credentials, TENANT_HEADER};
use crate::error::AuthError;
use crate::telemetry::{ApiCallDirection, log_api_call, mask_headers};
use log::{debug, error, info, warn};
use serde_json::{Value, json};

/// Token endpoint path, relative to the API base URL
pub const TOKEN_PATH: &str = "authentication/v1/OAuth/Token";

/// Response fields checked for a token, in priority order
pub const TOKEN_FIELDS: [&str; 3] = ["access_token", "token", "bearerToken"];

const GRANT_TYPE: &str = "password";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Token provider performing the password grant over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTokenProvider {
    client: reqwest::Client,
}

impl HttpTokenProvider {
    /// Create a provider on top of an existing HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl TokenProvider for HttpTokenProvider {
    async fn acquire_token(&self, credentials: &Credentials) -> Result<AccessToken, AuthError> {
        let url = credentials.endpoint(TOKEN_PATH);

        debug!(
            "Starting token generation for user '{}' (secret: [SET])",
            credentials.username()
        );
        log_api_call(
            ApiCallDirection::Request,
            &url,
            &json!({
                "method": "POST",
                "headers": mask_headers(&[
                    ("Content-Type", FORM_CONTENT_TYPE),
                    (TENANT_HEADER, credentials.tenant_key()),
                ]),
                "payload": format!(
                    "grant_type={}&username={}&password=[HIDDEN]",
                    GRANT_TYPE,
                    credentials.username()
                ),
            }),
        );

        let form = [
            ("grant_type", GRANT_TYPE),
            ("username", credentials.username()),
            ("password", credentials.secret().expose()),
        ];

        let response = self
            .client
            .post(&url)
            .header(TENANT_HEADER, credentials.tenant_key())
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!("Token endpoint unreachable: {}", e);
                AuthError::Transport {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| AuthError::Transport {
            message: e.to_string(),
        })?;

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            warn!(
                "Could not parse token response as JSON (HTTP {}): {}",
                status.as_u16(),
                e
            );
            AuthError::InvalidResponseFormat {
                status: status.as_u16(),
                message: e.to_string(),
            }
        })?;

        log_api_call(
            ApiCallDirection::Response,
            &url,
            &json!({
                "status": status.as_u16(),
                "statusText": status.canonical_reason().unwrap_or_default(),
            }),
        );

        if !status.is_success() {
            error!("Token request failed with HTTP {}", status.as_u16());
            return Err(AuthError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let token = extract_token(&body).ok_or_else(|| {
            let available_fields: Vec<String> = body
                .as_object()
                .map(|obj| obj.keys().cloned().collect())
                .unwrap_or_default();
            error!(
                "No token found in response (available fields: {:?})",
                available_fields
            );
            AuthError::NoToken { available_fields }
        })?;

        let token = AccessToken::new(token);
        info!(
            "Access token acquired at {} (token: [SET])",
            token.issued_at().to_rfc3339()
        );
        Ok(token)
    }
}

/// Pick the first non-empty token field from a token response.
pub fn extract_token(body: &Value) -> Option<&str> {
    TOKEN_FIELDS.iter().find_map(|field| {
        body.get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    })
}
