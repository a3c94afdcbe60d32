//! Core type definitions for schema create/update requests.
//!
//! These types describe what is sent to the remote schema-definition
//! endpoint. Field definitions are carried opaquely: only `Name` and `Type`
//! are inspected, everything else is forwarded as received.

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;

/// Schema type used when the caller does not supply one
pub const DEFAULT_SCHEMA_TYPE: i64 = 1;

/// The two supported schema operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaOperation {
    /// Define a new schema (HTTP POST)
    Create,
    /// Redefine an existing schema record (HTTP PUT)
    Update,
}

impl SchemaOperation {
    /// HTTP method used against the schema endpoint
    pub fn method(self) -> Method {
        match self {
            SchemaOperation::Create => Method::POST,
            SchemaOperation::Update => Method::PUT,
        }
    }

    /// Imperative verb, e.g. "create"
    pub fn verb(self) -> &'static str {
        match self {
            SchemaOperation::Create => "create",
            SchemaOperation::Update => "update",
        }
    }

    /// Past tense, e.g. "created"
    pub fn past_tense(self) -> &'static str {
        match self {
            SchemaOperation::Create => "created",
            SchemaOperation::Update => "updated",
        }
    }

    /// Name of the RPC tool exposing this operation
    pub fn tool_name(self) -> &'static str {
        match self {
            SchemaOperation::Create => "create_schema",
            SchemaOperation::Update => "update_schema",
        }
    }

    /// Look up the operation for a tool name
    pub fn from_tool_name(name: &str) -> Option<Self> {
        match name {
            "create_schema" => Some(SchemaOperation::Create),
            "update_schema" => Some(SchemaOperation::Update),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// A single field entry of a schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDefinition {
    /// Field name
    #[serde(rename = "Name")]
    pub name: String,
    /// Remote type name (String, Float, ...)
    #[serde(rename = "Type")]
    pub field_type: String,
    /// Whether the field holds an array of values
    #[serde(rename = "IsArray", skip_serializing_if = "Option::is_none")]
    pub is_array: Option<bool>,
    /// Any other attributes supplied by the caller, forwarded unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDefinition {
    /// Create a field with just a name and type
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            is_array: None,
            extra: Map::new(),
        }
    }

    /// Mark the field as array-valued
    pub fn array(mut self, is_array: bool) -> Self {
        self.is_array = Some(is_array);
        self
    }
}

/// The attributes shared by create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaDefinition {
    pub collection_name: String,
    pub schema_name: String,
    pub schema_type: Number,
    pub fields: Vec<FieldDefinition>,
    pub project_key: String,
}

/// A validated schema request.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaRequest {
    /// Define a new schema
    Create(SchemaDefinition),
    /// Redefine the schema record identified by `item_id`
    Update {
        item_id: String,
        definition: SchemaDefinition,
    },
}

/// JSON body sent to the schema endpoint.
///
/// `ItemId` is emitted first and only for updates.
#[derive(Debug, Serialize)]
pub struct SchemaPayload<'a> {
    #[serde(rename = "ItemId", skip_serializing_if = "Option::is_none")]
    item_id: Option<&'a str>,
    #[serde(flatten)]
    definition: &'a SchemaDefinition,
}

impl SchemaRequest {
    /// Which operation this request performs
    pub fn operation(&self) -> SchemaOperation {
        match self {
            SchemaRequest::Create(_) => SchemaOperation::Create,
            SchemaRequest::Update { .. } => SchemaOperation::Update,
        }
    }

    /// The schema attributes
    pub fn definition(&self) -> &SchemaDefinition {
        match self {
            SchemaRequest::Create(definition) => definition,
            SchemaRequest::Update { definition, .. } => definition,
        }
    }

    /// Identifier of the record being updated
    pub fn item_id(&self) -> Option<&str> {
        match self {
            SchemaRequest::Create(_) => None,
            SchemaRequest::Update { item_id, .. } => Some(item_id),
        }
    }

    /// Wire payload for this request
    pub fn payload(&self) -> SchemaPayload<'_> {
        SchemaPayload {
            item_id: self.item_id(),
            definition: self.definition(),
        }
    }
}
