//! Tool argument fixtures.

use serde_json::{Value, json};

/// Minimal valid `create_schema` arguments
pub fn create_args() -> Value {
    json!({
        "CollectionName": "Items",
        "SchemaName": "Items",
        "Fields": [
            {"Name": "Price", "Type": "Float"},
            {"Name": "Tags", "Type": "String", "IsArray": true}
        ],
        "ProjectKey": "pk1"
    })
}

/// Minimal valid `update_schema` arguments for `item_id`
pub fn update_args(item_id: &str) -> Value {
    let mut args = create_args();
    args["ItemId"] = json!(item_id);
    args
}
