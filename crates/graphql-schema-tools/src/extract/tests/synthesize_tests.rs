use crate::ast;
use crate::synthesize_node;
use crate::Schema;

fn introspected_schema() -> Schema {
    let json = serde_json::json!({
        "__schema": {
            "queryType": { "name": "Query" },
            "types": [
                {
                    "kind": "OBJECT",
                    "name": "Query",
                    "fields": [{
                        "name": "old",
                        "args": [],
                        "type": { "kind": "SCALAR", "name": "String" },
                        "isDeprecated": true,
                        "deprecationReason": "Use `new`.",
                    }],
                },
                {
                    "kind": "SCALAR",
                    "name": "Url",
                    "specifiedByURL": "https://example.com/url",
                },
            ],
        },
    });
    Schema::from_introspection_json(&json.to_string())
        .expect("fixture should load")
}

#[test]
fn synthesized_object_carries_deprecations() {
    let schema = introspected_schema();
    let query = schema.get_type("Query").expect("`Query` should be loaded");

    let ast::schema::TypeDefinition::Object(node) =
        synthesize_node(query).expect("`Query` should synthesize")
    else {
        panic!("expected an object type");
    };
    assert_eq!(node.name, "Query");
    assert_eq!(node.fields.len(), 1);

    let deprecated = &node.fields[0].directives[0];
    assert_eq!(deprecated.name, "deprecated");
    assert_eq!(
        deprecated.arguments,
        vec![(
            "reason".to_string(),
            ast::query::Value::String("Use `new`.".to_string()),
        )],
    );
}

#[test]
fn synthesized_scalar_carries_specified_by() {
    let schema = introspected_schema();
    let url = schema.get_type("Url").expect("`Url` should be loaded");

    let ast::schema::TypeDefinition::Scalar(node) =
        synthesize_node(url).expect("`Url` should synthesize")
    else {
        panic!("expected a scalar type");
    };
    let directive_names: Vec<&str> =
        node.directives.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(directive_names, vec!["specifiedBy"]);
}

#[test]
fn synthesizing_a_written_type_reflects_its_live_state() {
    let schema = Schema::from_sdl("type Query { a: Int } extend type Query { b: Int }")
        .expect("fixture should build");
    let query = schema.get_type("Query").expect("`Query` should be defined");

    let ast::schema::TypeDefinition::Object(node) =
        synthesize_node(query).expect("`Query` should synthesize")
    else {
        panic!("expected an object type");
    };
    let fields: Vec<&str> = node.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, vec!["a", "b"]);
}
