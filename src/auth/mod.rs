//! Bearer token acquisition for the schema API.
//!
//! An [`AccessToken`] is proof that the password grant succeeded for the
//! current operation. The dispatcher only accepts requests carrying one, so a
//! schema call without a prior authentication step cannot be expressed.
//!
//! Tokens are never cached: every operation mints a fresh one through a
//! [`TokenProvider`].
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use schema_mcp_server::auth::{HttpTokenProvider, TokenProvider};
//! use schema_mcp_server::config::{ClientConfig, CredentialSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = CredentialSource::from_env().resolve()?;
//! let provider = HttpTokenProvider::new(ClientConfig::default().build_client()?);
//! let token = provider.acquire_token(&credentials).await?;
//! assert!(!token.as_str().is_empty());
//! # Ok(())
//! # }
//! ```

mod token;

pub use token::{HttpTokenProvider, TOKEN_FIELDS, TOKEN_PATH, extract_token};

use crate::config::Credentials;
use crate::error::AuthError;
use crate::secret::SecretString;
use chrono::{DateTime, Utc};
use std::fmt;
use std::future::Future;

/// Source of bearer tokens for outbound schema calls.
///
/// Implementations must perform a fresh exchange on every call and must not
/// log the secret or the resulting token.
pub trait TokenProvider: Send + Sync {
    /// Exchange the credentials for an access token.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the endpoint is unreachable, answers with
    /// a non-success status or an unparsable body, or carries no token.
    fn acquire_token(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AccessToken, AuthError>> + Send;
}

/// Short-lived bearer token minted for a single operation.
#[derive(Clone)]
pub struct AccessToken {
    value: SecretString,
    issued_at: DateTime<Utc>,
}

impl AccessToken {
    /// Wrap a token value obtained from a token endpoint.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: SecretString::new(value),
            issued_at: Utc::now(),
        }
    }

    /// Raw token value, for building the Authorization header only.
    pub fn as_str(&self) -> &str {
        self.value.expose()
    }

    /// When the token was obtained
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// `Authorization` header value
    pub(crate) fn bearer_header(&self) -> String {
        format!("Bearer {}", self.value.expose())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &self.value)
            .field("issued_at", &self.issued_at)
            .finish()
    }
}
