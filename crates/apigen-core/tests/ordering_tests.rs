use std::collections::{BTreeMap, HashMap};

use apigen_core::definition::{ArgumentOrigin, Definition};
use apigen_core::parse;
use apigen_core::transform;
use proptest::prelude::*;
use serde_json::{Value, json};

/// Property schemas: scalars, inline objects and arrays, nested a few levels.
fn property_schema() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![Just("string"), Just("integer"), Just("boolean")]
        .prop_map(|t| json!({ "type": t }));
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::btree_map("[a-z]{1,6}", inner.clone(), 1..4)
                .prop_map(|properties| json!({ "type": "object", "properties": properties })),
            inner.prop_map(|items| json!({ "type": "array", "items": items })),
        ]
    })
}

fn build(document: &Value) -> Definition {
    let spec = parse::from_json(&document.to_string()).unwrap();
    transform::build_definition(&spec).unwrap()
}

fn component_document(properties: &BTreeMap<String, Value>) -> Value {
    json!({
        "openapi": "3.0.1",
        "info": { "title": "Nested", "version": "1" },
        "paths": {},
        "components": {
            "schemas": {
                "Root": { "type": "object", "properties": properties }
            }
        }
    })
}

fn post_document(body: bool, query: &[String]) -> Value {
    let parameters: Vec<Value> = query
        .iter()
        .map(|name| json!({ "name": name, "in": "query", "schema": { "type": "integer" } }))
        .collect();
    let mut post = json!({ "parameters": parameters, "responses": {} });
    if body {
        post["requestBody"] = json!({
            "content": {
                "application/json": {
                    "schema": { "type": "object", "properties": { "name": { "type": "string" } } }
                }
            }
        });
    }
    json!({
        "openapi": "3.0.1",
        "info": { "title": "Items", "version": "1" },
        "paths": { "/items": { "post": post } }
    })
}

proptest! {
    #[test]
    fn subtypes_follow_their_parent(
        properties in prop::collection::btree_map("[a-z]{1,6}", property_schema(), 1..5)
    ) {
        let def = build(&component_document(&properties));
        prop_assert_eq!(def.schemas[0].name.as_str(), "Root");

        let index: HashMap<&str, usize> = def
            .schemas
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.as_str(), i))
            .collect();
        prop_assert_eq!(index.len(), def.schemas.len());

        for (i, schema) in def.schemas.iter().enumerate() {
            let subtypes: Vec<&str> = schema
                .properties
                .iter()
                .filter_map(|p| p.subtype_name.as_deref())
                .collect();
            for subtype in &subtypes {
                let position = index.get(subtype).copied();
                prop_assert!(position.is_some(), "{} missing", subtype);
                prop_assert!(position > Some(i), "{} precedes {}", subtype, schema.name);
            }
            // Depth-first: the first subtype comes right after its parent.
            if let Some(first) = subtypes.first() {
                prop_assert_eq!(index[first], i + 1);
            }
        }
    }

    #[test]
    fn body_argument_comes_first(
        body in any::<bool>(),
        query in prop::collection::btree_set("[a-z]{1,8}", 0..5)
    ) {
        let query: Vec<String> = query.into_iter().collect();
        let def = build(&post_document(body, &query));
        let arguments = &def.routes[0].operations[0].arguments;

        let parameters = if body {
            prop_assert_eq!(arguments[0].origin, ArgumentOrigin::Body);
            prop_assert_eq!(arguments[0].name.as_str(), "request");
            &arguments[1..]
        } else {
            &arguments[..]
        };
        prop_assert!(parameters.iter().all(|a| a.origin == ArgumentOrigin::Query));
        let wire_names: Vec<&str> = parameters.iter().map(|a| a.wire_name.as_str()).collect();
        prop_assert_eq!(wire_names, query.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
