//! Tool definitions for schema create and update.
//!
//! The `required` lists mirror the boundary validation in
//! [`required_parameters`](crate::schema::required_parameters).

use crate::schema::{SchemaOperation, required_parameters};
use serde_json::{Value, json};

/// Schema definition for the schema creation tool
pub fn create_schema_tool() -> Value {
    json!({
        "name": SchemaOperation::Create.tool_name(),
        "description": "Create a new database schema with field definitions",
        "inputSchema": {
            "type": "object",
            "properties": definition_properties(),
            "required": required_parameters(SchemaOperation::Create),
        }
    })
}

/// Schema definition for the schema update tool
pub fn update_schema_tool() -> Value {
    let mut properties = definition_properties();
    if let Some(obj) = properties.as_object_mut() {
        obj.insert(
            "ItemId".to_string(),
            json!({
                "type": "string",
                "description": "GUID of the item to update"
            }),
        );
    }

    json!({
        "name": SchemaOperation::Update.tool_name(),
        "description": "Update an existing database schema with new field definitions",
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": required_parameters(SchemaOperation::Update),
        }
    })
}

fn definition_properties() -> Value {
    json!({
        "CollectionName": {
            "type": "string",
            "description": "Name of the collection"
        },
        "SchemaName": {
            "type": "string",
            "description": "Name of the schema"
        },
        "SchemaType": {
            "type": "number",
            "description": "Type of the schema (typically 1)",
            "default": 1
        },
        "Fields": {
            "type": "array",
            "description": "Array of field definitions",
            "items": {
                "type": "object",
                "properties": {
                    "Name": {
                        "type": "string",
                        "description": "Field name"
                    },
                    "Type": {
                        "type": "string",
                        "description": "Field type (String, Float, etc.)"
                    },
                    "IsArray": {
                        "type": "boolean",
                        "description": "Indicates if the field is an array"
                    }
                },
                "required": ["Name", "Type"]
            }
        },
        "ProjectKey": {
            "type": "string",
            "description": "Project key for API access"
        }
    })
}
