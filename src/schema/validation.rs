//! Boundary validation of tool arguments.
//!
//! Raw JSON arguments are turned into a typed [`SchemaRequest`] here, before
//! anything touches the network. Missing top-level parameters are collected
//! and reported together; a malformed field entry fails on the first one.

use super::types::{
    DEFAULT_SCHEMA_TYPE, FieldDefinition, SchemaDefinition, SchemaOperation, SchemaRequest,
};
use crate::error::{ValidationError, ValidationResult};
use serde_json::{Map, Number, Value};

const COLLECTION_NAME: &str = "CollectionName";
const SCHEMA_NAME: &str = "SchemaName";
const SCHEMA_TYPE: &str = "SchemaType";
const FIELDS: &str = "Fields";
const PROJECT_KEY: &str = "ProjectKey";
const ITEM_ID: &str = "ItemId";

const CREATE_REQUIRED: &[&str] = &[COLLECTION_NAME, SCHEMA_NAME, FIELDS, PROJECT_KEY];
const UPDATE_REQUIRED: &[&str] = &[COLLECTION_NAME, SCHEMA_NAME, FIELDS, PROJECT_KEY, ITEM_ID];

/// Required top-level parameters for an operation.
pub fn required_parameters(operation: SchemaOperation) -> &'static [&'static str] {
    match operation {
        SchemaOperation::Create => CREATE_REQUIRED,
        SchemaOperation::Update => UPDATE_REQUIRED,
    }
}

impl SchemaRequest {
    /// Validate raw tool arguments into a typed request.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::MissingParameters`] listing every required
    ///   parameter that is absent, null, empty, or (for `Fields`) not an array
    /// * [`ValidationError::InvalidParameterType`] if a required string
    ///   parameter holds another JSON type
    /// * [`ValidationError::InvalidField`] for the first field entry without
    ///   a non-empty `Name` and `Type`
    pub fn from_arguments(operation: SchemaOperation, arguments: &Value) -> ValidationResult<Self> {
        let empty = Map::new();
        let obj = arguments.as_object().unwrap_or(&empty);

        let missing: Vec<&str> = required_parameters(operation)
            .iter()
            .copied()
            .filter(|name| is_missing(name, obj.get(*name)))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::missing(missing));
        }

        let collection_name = required_string(obj, COLLECTION_NAME)?;
        let schema_name = required_string(obj, SCHEMA_NAME)?;
        let project_key = required_string(obj, PROJECT_KEY)?;
        let schema_type = match obj.get(SCHEMA_TYPE) {
            Some(Value::Number(number)) => number.clone(),
            _ => Number::from(DEFAULT_SCHEMA_TYPE),
        };

        let fields = obj
            .get(FIELDS)
            .and_then(Value::as_array)
            .ok_or_else(|| ValidationError::missing([FIELDS]))?
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_field(index, entry))
            .collect::<ValidationResult<Vec<_>>>()?;

        let definition = SchemaDefinition {
            collection_name,
            schema_name,
            schema_type,
            fields,
            project_key,
        };

        match operation {
            SchemaOperation::Create => Ok(SchemaRequest::Create(definition)),
            SchemaOperation::Update => Ok(SchemaRequest::Update {
                item_id: required_string(obj, ITEM_ID)?,
                definition,
            }),
        }
    }
}

fn is_missing(name: &str, value: Option<&Value>) -> bool {
    if name == FIELDS {
        return !value.is_some_and(Value::is_array);
    }
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn required_string(obj: &Map<String, Value>, name: &str) -> ValidationResult<String> {
    match obj.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) | Some(Value::Null) | None => Err(ValidationError::missing([name])),
        Some(_) => Err(ValidationError::invalid_type(name, "a string")),
    }
}

fn parse_field(index: usize, entry: &Value) -> ValidationResult<FieldDefinition> {
    let obj = entry
        .as_object()
        .ok_or_else(|| ValidationError::invalid_field(index, "entry is not an object"))?;

    let name = non_empty_str(obj.get("Name"))
        .ok_or_else(|| ValidationError::invalid_field(index, "Name must be a non-empty string"))?;
    let field_type = non_empty_str(obj.get("Type"))
        .ok_or_else(|| ValidationError::invalid_field(index, "Type must be a non-empty string"))?;

    let is_array = match obj.get("IsArray") {
        None | Some(Value::Null) => None,
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => {
            return Err(ValidationError::invalid_field(
                index,
                "IsArray must be a boolean",
            ));
        }
    };

    let extra = obj
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "Name" | "Type" | "IsArray"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(FieldDefinition {
        name: name.to_string(),
        field_type: field_type.to_string(),
        is_array,
        extra,
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
