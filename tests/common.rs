//! Common test utilities for building blueprint graphs.
use seizu::prelude::*;

/// Creates a form with the given field names.
#[allow(dead_code)]
pub fn form(id: &str, name: &str, fields: &[&str]) -> Form {
    Form {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        is_reusable: true,
        field_schema: FieldSchema {
            schema_type: "object".to_string(),
            properties: fields
                .iter()
                .map(|field| (field.to_string(), serde_json::json!({ "type": "string" })))
                .collect(),
            required: Vec::new(),
        },
    }
}

/// Creates a form node referencing a form by id.
#[allow(dead_code)]
pub fn node(id: &str, name: &str, component_id: &str, prerequisites: &[&str], x: f64) -> FormNode {
    FormNode {
        id: id.to_string(),
        kind: NodeKind::Form,
        position: Position { x, y: 0.0 },
        data: NodeData {
            component_key: name.to_lowercase().replace(' ', "-"),
            component_id: component_id.to_string(),
            name: name.to_string(),
            prerequisites: prerequisites.iter().map(|id| id.to_string()).collect(),
            input_mapping: AHashMap::new(),
        },
    }
}

#[allow(dead_code)]
pub fn graph(forms: Vec<Form>, nodes: Vec<FormNode>) -> BlueprintGraph {
    BlueprintGraph {
        forms,
        nodes,
        edges: Vec::new(),
    }
}

/// Two-node chain: "Form A" has "Form B" as its only prerequisite.
///
/// Node ids are `node_a`/`node_b`, form ids `form_a`/`form_b`. Form A has
/// fields `email` and `name`, Form B has `firstName` and `lastName`.
#[allow(dead_code)]
pub fn chain_graph() -> BlueprintGraph {
    graph(
        vec![
            form("form_a", "Form A", &["email", "name"]),
            form("form_b", "Form B", &["firstName", "lastName"]),
        ],
        vec![
            node("node_a", "Form A", "form_a", &["node_b"], 200.0),
            node("node_b", "Form B", "form_b", &[], 100.0),
        ],
    )
}
