//! Credential and transport configuration.
//!
//! Configuration is an explicit value built once at process start. The core
//! pipeline never reads the environment; only the `from_env` constructors do,
//! and only the host binary calls them.
//!
//! # Example
//!
//! ```rust
//! use schema_mcp_server::config::CredentialSource;
//!
//! let source = CredentialSource::new(
//!     Some("tenant-key".to_string()),
//!     Some("svc-user".to_string()),
//!     Some("user-key".to_string()),
//!     Some("https://api.example.com/".to_string()),
//! );
//! let credentials = source.resolve().unwrap();
//! assert_eq!(credentials.api_base_url(), "https://api.example.com");
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::secret::SecretString;
use reqwest::Url;
use std::time::Duration;

/// Environment variable holding the tenant key
pub const ENV_TENANT_KEY: &str = "BLOCKS_KEY";
/// Environment variable holding the username
pub const ENV_USERNAME: &str = "USERNAME";
/// Environment variable holding the user secret
pub const ENV_SECRET: &str = "USER_KEY";
/// Environment variable holding the API base URL
pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
/// Environment variable overriding the HTTP timeout, in seconds
pub const ENV_HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

/// Header carrying the tenant key on every outbound call
pub const TENANT_HEADER: &str = "x-blocks-key";

/// Default transport timeout for outbound calls
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Unvalidated credential values as supplied by the host.
///
/// Any of the four values may be absent; [`resolve`](Self::resolve) turns
/// them into [`Credentials`] or reports everything that is missing.
#[derive(Debug, Clone, Default)]
pub struct CredentialSource {
    tenant_key: Option<String>,
    username: Option<String>,
    secret: Option<SecretString>,
    api_base_url: Option<String>,
}

/// Fully resolved credentials for one operation call.
#[derive(Debug, Clone)]
pub struct Credentials {
    tenant_key: String,
    username: String,
    secret: SecretString,
    api_base_url: Url,
}

impl CredentialSource {
    /// Create a source from explicit values.
    pub fn new(
        tenant_key: Option<String>,
        username: Option<String>,
        secret: Option<String>,
        api_base_url: Option<String>,
    ) -> Self {
        Self {
            tenant_key,
            username,
            secret: secret.map(SecretString::from),
            api_base_url,
        }
    }

    /// Read the four credential values from the process environment.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(ENV_TENANT_KEY).ok(),
            std::env::var(ENV_USERNAME).ok(),
            std::env::var(ENV_SECRET).ok(),
            std::env::var(ENV_API_BASE_URL).ok(),
        )
    }

    /// Resolve into usable credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] naming every absent or
    /// empty value, or [`ConfigError::InvalidBaseUrl`] if the base URL is
    /// not an absolute http(s) URL.
    pub fn resolve(&self) -> ConfigResult<Credentials> {
        let tenant_key = non_blank(self.tenant_key.as_deref());
        let username = non_blank(self.username.as_deref());
        let secret = self.secret.as_ref().filter(|s| !s.is_empty());
        let raw_url = non_blank(self.api_base_url.as_deref());

        match (tenant_key, username, secret, raw_url) {
            (Some(tenant_key), Some(username), Some(secret), Some(raw_url)) => Ok(Credentials {
                tenant_key: tenant_key.to_string(),
                username: username.to_string(),
                secret: secret.clone(),
                api_base_url: parse_base_url(raw_url)?,
            }),
            (tenant_key, username, secret, raw_url) => {
                let missing = [
                    ("tenantKey", tenant_key.is_none()),
                    ("username", username.is_none()),
                    ("secret", secret.is_none()),
                    ("apiBaseUrl", raw_url.is_none()),
                ]
                .into_iter()
                .filter(|(_, absent)| *absent)
                .map(|(name, _)| name.to_string())
                .collect();
                Err(ConfigError::MissingCredentials { missing })
            }
        }
    }

    /// `[SET]` / `[NOT SET]` indicator for each value, safe to log.
    pub fn presence(&self) -> [(&'static str, &'static str); 4] {
        let flag = |set: bool| if set { "[SET]" } else { "[NOT SET]" };
        [
            ("tenantKey", flag(!is_blank(self.tenant_key.as_deref()))),
            ("username", flag(!is_blank(self.username.as_deref()))),
            (
                "secret",
                flag(self.secret.as_ref().is_some_and(|s| !s.is_empty())),
            ),
            ("apiBaseUrl", flag(!is_blank(self.api_base_url.as_deref()))),
        ]
    }
}

impl Credentials {
    /// Tenant key sent as the tenant header
    pub fn tenant_key(&self) -> &str {
        &self.tenant_key
    }

    /// Username for the password grant
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Secret for the password grant
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// API base URL without a trailing slash
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_str().trim_end_matches('/')
    }

    /// Build an endpoint URL by appending `path` to the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url(), path.trim_start_matches('/'))
    }
}

fn is_blank(value: Option<&str>) -> bool {
    non_blank(value).is_none()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_base_url(raw: &str) -> ConfigResult<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// Settings for the shared HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Transport timeout applied to each outbound request.
    pub request_timeout: Duration,
    /// User-Agent sent on outbound requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the timeout overridden by `HTTP_TIMEOUT_SECS` when it
    /// holds a positive integer.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(secs) = std::env::var(ENV_HTTP_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.request_timeout = Duration::from_secs(secs);
        }
        config
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the `reqwest` client shared by the token and schema calls.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend fails to
    /// initialise.
    pub fn build_client(&self) -> ConfigResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                message: e.to_string(),
            })
    }
}
