//! Tests for graph payload decoding and conversion to the canonical model.
use seizu::prelude::*;

const FULL_PAYLOAD: &str = r#"{
    "forms": [
        {
            "id": "form_a",
            "name": "Form A",
            "description": "test form",
            "is_reusable": true,
            "custom_javascript": "",
            "field_schema": {
                "type": "object",
                "properties": {
                    "email": { "type": "string" },
                    "name": { "type": "string", "title": "Name" }
                },
                "required": ["email"]
            },
            "ui_schema": { "type": "VerticalLayout", "elements": [] }
        }
    ],
    "nodes": [
        {
            "id": "node_a",
            "type": "form",
            "position": { "x": 200.5, "y": 100 },
            "data": {
                "component_key": "form-a",
                "component_id": "form_a",
                "name": "Form A",
                "prerequisites": [],
                "input_mapping": { "email": "Global Data.dataA" },
                "sla_duration": { "number": 0, "unit": "minutes" }
            }
        }
    ],
    "edges": [
        { "source": "form-a", "target": "form-b" }
    ]
}"#;

#[test]
fn test_full_payload_round_trips_into_canonical_graph() {
    let payload: GraphPayload = serde_json::from_str(FULL_PAYLOAD).expect("Failed to parse");
    let graph = payload.into_blueprint().expect("Failed to convert");

    assert_eq!(graph.forms.len(), 1);
    let form = &graph.forms[0];
    assert_eq!(form.id, "form_a");
    assert_eq!(form.field_schema.schema_type, "object");
    assert_eq!(
        form.field_schema.field_names(),
        vec!["email".to_string(), "name".to_string()]
    );
    assert_eq!(form.field_schema.required, vec!["email".to_string()]);

    assert_eq!(graph.nodes.len(), 1);
    let node = &graph.nodes[0];
    assert_eq!(node.kind, NodeKind::Form);
    assert_eq!(node.position.x, 200.5);
    assert_eq!(node.data.component_key, "form-a");
    assert_eq!(
        node.data.input_mapping.get("email").map(String::as_str),
        Some("Global Data.dataA")
    );

    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].source, "form-a");
}

#[test]
fn test_missing_sections_convert_to_empty_lists() {
    let payload: GraphPayload = serde_json::from_str(r#"{ "forms": [] }"#).expect("Failed to parse");
    assert!(payload.nodes.is_none());
    assert!(payload.edges.is_none());

    payload.warn_missing_sections();
    let graph = payload.into_blueprint().expect("Failed to convert");
    assert!(graph.forms.is_empty());
    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
}

#[test]
fn test_all_node_kinds_are_accepted_structurally() {
    for (raw, kind) in [
        ("form", NodeKind::Form),
        ("branch", NodeKind::Branch),
        ("trigger", NodeKind::Trigger),
        ("configuration", NodeKind::Configuration),
    ] {
        let json = format!(
            r#"{{
                "nodes": [{{
                    "id": "n1",
                    "type": "{}",
                    "position": {{ "x": 0, "y": 0 }},
                    "data": {{ "component_id": "f1", "name": "N1" }}
                }}]
            }}"#,
            raw
        );
        let payload: GraphPayload = serde_json::from_str(&json).expect("Failed to parse");
        let graph = payload.into_blueprint().expect("Failed to convert");
        assert_eq!(graph.nodes[0].kind, kind);
    }
}

#[test]
fn test_node_without_data_fails_conversion() {
    let payload: GraphPayload = serde_json::from_str(
        r#"{ "nodes": [{ "id": "n1", "type": "form", "position": { "x": 0, "y": 0 } }] }"#,
    )
    .expect("Failed to parse");

    match payload.into_blueprint() {
        Err(GraphConversionError::MissingNode { node_id }) => assert_eq!(node_id, "n1"),
        other => panic!("Expected MissingNode error, got {:?}", other),
    }
}

#[test]
fn test_unknown_node_kind_is_rejected_at_decode_time() {
    let result: std::result::Result<GraphPayload, _> = serde_json::from_str(
        r#"{ "nodes": [{ "id": "n1", "type": "gateway", "position": { "x": 0, "y": 0 } }] }"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_global_data_file_format() {
    let data: GlobalData = serde_json::from_str(
        r#"{ "values": { "tenantId": "t-1", "region": "eu-west-1" } }"#,
    )
    .expect("Failed to parse");

    // The title falls back to the fixed default when absent.
    assert_eq!(data.title, GLOBAL_DATA_TITLE);
    assert_eq!(
        data.option_keys(),
        vec!["region".to_string(), "tenantId".to_string()]
    );
}
