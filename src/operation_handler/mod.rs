//! Transport-agnostic schema operation handler.
//!
//! This module runs the create/update pipeline and folds every layer's
//! errors into an [`OperationError`](crate::error::OperationError).
//!
//! # Key Types
//!
//! - [`SchemaOperationHandler`] - runs one operation end to end
//! - [`SchemaOperationResponse`] - confirmation message plus the API body
//! - [`SchemaOperationHandlerBuilder`] - wires the collaborators
//!
//! # Examples
//!
//! ```rust,no_run
//! use schema_mcp_server::config::{ClientConfig, CredentialSource};
//! use schema_mcp_server::operation_handler::SchemaOperationHandler;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handler = SchemaOperationHandler::from_config(
//!     CredentialSource::from_env(),
//!     &ClientConfig::from_env(),
//! )?;
//!
//! let response = handler
//!     .create_schema(json!({
//!         "CollectionName": "Items",
//!         "SchemaName": "Items",
//!         "Fields": [{"Name": "Price", "Type": "Float"}],
//!         "ProjectKey": "pk1"
//!     }))
//!     .await?;
//! println!("{}", response.message);
//! # Ok(())
//! # }
//! ```

mod builder;
mod core;


pub use builder::SchemaOperationHandlerBuilder;
pub use core::{SchemaOperationHandler, SchemaOperationResponse};
