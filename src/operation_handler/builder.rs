//! Builder for configuring schema operation handlers.
//!
//! The default collaborators share a single `reqwest::Client`. Either one can
//! be replaced, which changes the handler's type parameter accordingly.
//!
//! ```rust
//! use schema_mcp_server::config::{ClientConfig, CredentialSource};
//! use schema_mcp_server::operation_handler::SchemaOperationHandlerBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let handler = SchemaOperationHandlerBuilder::new(
//!     CredentialSource::default(),
//!     &ClientConfig::default(),
//! )?
//! .build();
//! # let _ = handler;
//! # Ok(())
//! # }
//! ```

use super::core::SchemaOperationHandler;
use crate::auth::{HttpTokenProvider, TokenProvider};
use crate::config::{ClientConfig, CredentialSource};
use crate::dispatcher::{HttpSchemaDispatcher, SchemaDispatcher};
use crate::error::ConfigResult;

/// Builder for [`SchemaOperationHandler`].
pub struct SchemaOperationHandlerBuilder<T = HttpTokenProvider, D = HttpSchemaDispatcher> {
    credentials: CredentialSource,
    token_provider: T,
    dispatcher: D,
}

impl SchemaOperationHandlerBuilder {
    /// Start from the HTTP collaborators, built on one client made from
    /// `client_config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(credentials: CredentialSource, client_config: &ClientConfig) -> ConfigResult<Self> {
        Ok(Self::with_client(credentials, client_config.build_client()?))
    }

    /// Start from the HTTP collaborators on an existing client.
    pub fn with_client(credentials: CredentialSource, client: reqwest::Client) -> Self {
        Self {
            credentials,
            token_provider: HttpTokenProvider::new(client.clone()),
            dispatcher: HttpSchemaDispatcher::new(client),
        }
    }
}

impl<T: TokenProvider, D: SchemaDispatcher> SchemaOperationHandlerBuilder<T, D> {
    /// Replace the token provider
    pub fn with_token_provider<P: TokenProvider>(
        self,
        token_provider: P,
    ) -> SchemaOperationHandlerBuilder<P, D> {
        SchemaOperationHandlerBuilder {
            credentials: self.credentials,
            token_provider,
            dispatcher: self.dispatcher,
        }
    }

    /// Replace the schema dispatcher
    pub fn with_dispatcher<S: SchemaDispatcher>(
        self,
        dispatcher: S,
    ) -> SchemaOperationHandlerBuilder<T, S> {
        SchemaOperationHandlerBuilder {
            credentials: self.credentials,
            token_provider: self.token_provider,
            dispatcher,
        }
    }

    /// Replace the credential source
    pub fn with_credentials(mut self, credentials: CredentialSource) -> Self {
        self.credentials = credentials;
        self
    }

    /// Finish building the handler.
    pub fn build(self) -> SchemaOperationHandler<T, D> {
        SchemaOperationHandler::new(self.credentials, self.token_provider, self.dispatcher)
    }
}

impl SchemaOperationHandler {
    /// Handler with the HTTP collaborators, in one step.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn from_config(
        credentials: CredentialSource,
        client_config: &ClientConfig,
    ) -> ConfigResult<Self> {
        Ok(SchemaOperationHandlerBuilder::new(credentials, client_config)?.build())
    }
}
