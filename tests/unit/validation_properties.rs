//! Property tests for tool argument validation.

use crate::common::fixtures;
use proptest::prelude::*;
use schema_mcp_server::schema::required_parameters;
use schema_mcp_server::{SchemaOperation, SchemaRequest, ValidationError};
use serde_json::{Value, json};

fn operation_strategy() -> impl Strategy<Value = SchemaOperation> {
    prop_oneof![Just(SchemaOperation::Create), Just(SchemaOperation::Update)]
}

/// How a parameter is made unusable
#[derive(Debug, Clone, Copy)]
enum Blanking {
    Remove,
    Null,
    EmptyString,
}

fn blanking_strategy() -> impl Strategy<Value = Blanking> {
    prop_oneof![
        Just(Blanking::Remove),
        Just(Blanking::Null),
        Just(Blanking::EmptyString)
    ]
}

proptest! {
    #[test]
    fn missing_set_equals_removed_set(
        operation in operation_strategy(),
        mask in prop::collection::vec(any::<bool>(), 5),
        blanking in blanking_strategy(),
    ) {
        let mut args = fixtures::update_args("id1");
        let required = required_parameters(operation);

        let removed: Vec<String> = required
            .iter()
            .zip(mask.iter())
            .filter(|(_, drop)| **drop)
            .map(|(name, _)| name.to_string())
            .collect();

        let obj = args.as_object_mut().unwrap();
        for name in &removed {
            match blanking {
                Blanking::Remove => {
                    obj.remove(name);
                }
                Blanking::Null => {
                    obj.insert(name.clone(), Value::Null);
                }
                Blanking::EmptyString => {
                    obj.insert(name.clone(), json!(""));
                }
            }
        }

        match SchemaRequest::from_arguments(operation, &args) {
            Ok(request) => {
                prop_assert!(removed.is_empty());
                prop_assert_eq!(request.operation(), operation);
            }
            Err(ValidationError::MissingParameters { missing }) => {
                prop_assert_eq!(missing, removed);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn first_bad_field_index_is_reported(
        valid_before in 0usize..6,
        valid_after in 0usize..4,
    ) {
        let mut fields: Vec<Value> = (0..valid_before)
            .map(|i| json!({"Name": format!("F{}", i), "Type": "String"}))
            .collect();
        fields.push(json!({"Name": "Broken"}));
        fields.extend((0..valid_after).map(|i| json!({"Type": format!("T{}", i)})));

        let mut args = fixtures::create_args();
        args["Fields"] = Value::Array(fields);

        let err = SchemaRequest::from_arguments(SchemaOperation::Create, &args).unwrap_err();
        match err {
            ValidationError::InvalidField { index, .. } => prop_assert_eq!(index, valid_before),
            other => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn update_payload_always_carries_item_id(item_id in "[a-f0-9-]{1,36}") {
        let args = fixtures::update_args(&item_id);
        let request = SchemaRequest::from_arguments(SchemaOperation::Update, &args).unwrap();
        let payload = serde_json::to_value(request.payload()).unwrap();
        prop_assert_eq!(payload["ItemId"].as_str(), Some(item_id.as_str()));

        let request = SchemaRequest::from_arguments(SchemaOperation::Create, &args).unwrap();
        let payload = serde_json::to_value(request.payload()).unwrap();
        prop_assert!(payload.get("ItemId").is_none());
    }
}

/// Collaborator call counts around a single handler invocation.
mod collaborator_calls {
    use super::*;
    use schema_mcp_server::dispatcher::DispatchRequest;
    use schema_mcp_server::error::ApiResult;
    use schema_mcp_server::{
        AccessToken, AuthError, CredentialSource, Credentials, ResponseBody, SchemaDispatcher,
        SchemaOperationHandler, TokenProvider,
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTokens(Arc<AtomicUsize>);

    impl TokenProvider for CountingTokens {
        async fn acquire_token(&self, _: &Credentials) -> Result<AccessToken, AuthError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(AccessToken::new("tok"))
        }
    }

    struct CountingDispatcher(Arc<AtomicUsize>);

    impl SchemaDispatcher for CountingDispatcher {
        async fn send(&self, _: DispatchRequest<'_>) -> ApiResult<ResponseBody> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(ResponseBody::Json(json!({"success": true})))
        }
    }

    proptest! {
        #[test]
        fn token_and_dispatch_happen_only_for_valid_calls(
            operation in operation_strategy(),
            mask in prop::collection::vec(any::<bool>(), 5),
        ) {
            let mut args = fixtures::update_args("id1");
            let mut removed_any = false;
            for (name, drop) in required_parameters(operation).iter().zip(mask.iter()) {
                if *drop {
                    args.as_object_mut().unwrap().remove(*name);
                    removed_any = true;
                }
            }

            let tokens = Arc::new(AtomicUsize::new(0));
            let dispatches = Arc::new(AtomicUsize::new(0));
            let handler = SchemaOperationHandler::new(
                CredentialSource::new(
                    Some("tenant".to_string()),
                    Some("user".to_string()),
                    Some("secret".to_string()),
                    Some("https://api.example.com".to_string()),
                ),
                CountingTokens(Arc::clone(&tokens)),
                CountingDispatcher(Arc::clone(&dispatches)),
            );

            let result = tokio_test::block_on(handler.execute(operation, args));
            let calls = (tokens.load(Ordering::SeqCst), dispatches.load(Ordering::SeqCst));

            if removed_any {
                prop_assert!(result.is_err());
                prop_assert_eq!(calls, (0, 0));
            } else {
                prop_assert!(result.is_ok());
                prop_assert_eq!(calls, (1, 1));
            }
        }
    }
}
