use ahash::AHashMap;
use itertools::Itertools;

/// The complete, canonical definition of a loaded blueprint, ready for indexing.
/// This is the target structure for any wire-format conversion.
#[derive(Debug, Clone, Default)]
pub struct BlueprintGraph {
    pub forms: Vec<Form>,
    pub nodes: Vec<FormNode>,
    pub edges: Vec<FormEdge>,
}

impl BlueprintGraph {
    /// Looks up a form by its opaque id.
    pub fn form_by_id(&self, id: &str) -> Option<&Form> {
        self.forms.iter().find(|form| form.id == id)
    }

    /// Looks up a node by its id.
    pub fn node_by_id(&self, id: &str) -> Option<&FormNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// A reusable form schema describing a set of named fields.
/// Immutable once loaded in a session.
#[derive(Debug, Clone)]
pub struct Form {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_reusable: bool,
    pub field_schema: FieldSchema,
}

/// The field layout of a form: one opaque descriptor per field name.
#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    pub schema_type: String,
    pub properties: AHashMap<String, serde_json::Value>,
    pub required: Vec<String>,
}

impl FieldSchema {
    /// Field names in display order. Storage order is irrelevant, so lists
    /// shown to the user are always sorted.
    pub fn field_names(&self) -> Vec<String> {
        self.properties.keys().cloned().sorted().collect()
    }
}

/// One node in the blueprint graph.
///
/// Nodes are mutable through the mapping store only: every update replaces
/// the node with a copy carrying the new `input_mapping`.
#[derive(Debug, Clone)]
pub struct FormNode {
    pub id: String,
    pub kind: NodeKind,
    pub position: Position,
    pub data: NodeData,
}

/// The kind tag carried by a node. Only `Form` nodes get special treatment;
/// the other kinds are accepted structurally and carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Form,
    Branch,
    Trigger,
    Configuration,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NodeKind::Form => "form",
            NodeKind::Branch => "branch",
            NodeKind::Trigger => "trigger",
            NodeKind::Configuration => "configuration",
        };
        write!(f, "{}", label)
    }
}

/// 2D layout position. The x coordinate doubles as the display ordering key.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// The data payload of a node.
///
/// `name` is the lookup key into the blueprint context and is expected to be
/// unique across nodes. `input_mapping` maps field names to mapping value
/// strings; an empty or absent entry means the field is unmapped.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    pub component_key: String,
    pub component_id: String,
    pub name: String,
    pub prerequisites: Vec<String>,
    pub input_mapping: AHashMap<String, String>,
}

/// A directed edge between nodes, addressed by `component_key`. Display-only.
#[derive(Debug, Clone)]
pub struct FormEdge {
    pub source: String,
    pub target: String,
}
