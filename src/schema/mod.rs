//! Schema request model and argument validation.
//!
//! # Key Types
//!
//! - [`SchemaRequest`] - validated create or update request
//! - [`SchemaDefinition`] - the attributes shared by both operations
//! - [`FieldDefinition`] - one field entry, forwarded opaquely
//! - [`SchemaOperation`] - create vs. update, with HTTP method and wording
//!
//! # Examples
//!
//! ```rust
//! use schema_mcp_server::schema::{SchemaOperation, SchemaRequest};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = SchemaRequest::from_arguments(
//!     SchemaOperation::Create,
//!     &json!({
//!         "CollectionName": "Items",
//!         "SchemaName": "Items",
//!         "Fields": [{"Name": "Price", "Type": "Float"}],
//!         "ProjectKey": "pk1"
//!     }),
//! )?;
//! assert_eq!(request.definition().schema_type.as_i64(), Some(1));
//! # Ok(())
//! # }
//! ```

pub mod types;
pub mod validation;


// Re-export the main types for convenience
pub use types::{
    DEFAULT_SCHEMA_TYPE, FieldDefinition, SchemaDefinition, SchemaOperation, SchemaPayload,
    SchemaRequest,
};
pub use validation::required_parameters;
