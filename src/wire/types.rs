use ahash::AHashMap;
use serde::Deserialize;
use tracing::warn;

/// Raw graph payload as returned by the blueprint graph endpoint.
///
/// Top-level sections may be individually absent; that is tolerated here
/// (warned about, then treated as empty) and only surfaces as an error later
/// if a node ends up referencing a form that never arrived.
#[derive(Debug, Deserialize, Default)]
pub struct GraphPayload {
    pub forms: Option<Vec<WireForm>>,
    pub nodes: Option<Vec<WireNode>>,
    pub edges: Option<Vec<WireEdge>>,
}

impl GraphPayload {
    /// Logs one warning per missing top-level section.
    pub fn warn_missing_sections(&self) {
        if self.forms.is_none() {
            warn!("no forms found on graph payload");
        }
        if self.nodes.is_none() {
            warn!("no nodes found on graph payload");
        }
        if self.edges.is_none() {
            warn!("no edges found on graph payload");
        }
    }
}

/// Form record on the wire. Unknown keys (ui schema, custom javascript and
/// the like) are ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct WireForm {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_reusable: bool,
    #[serde(default)]
    pub field_schema: WireFieldSchema,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WireFieldSchema {
    #[serde(rename = "type", default)]
    pub schema_type: String,
    #[serde(default)]
    pub properties: AHashMap<String, serde_json::Value>,
    #[serde(default)]
    pub required: Vec<String>,
}

/// Node record on the wire. The data payload is optional at this layer so a
/// malformed node can be reported by id during conversion.
#[derive(Debug, Deserialize, Clone)]
pub struct WireNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: WireNodeKind,
    #[serde(default)]
    pub position: WirePosition,
    pub data: Option<WireNodeData>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WireNodeKind {
    Form,
    Branch,
    Trigger,
    Configuration,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct WirePosition {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WireNodeData {
    #[serde(default)]
    pub component_key: String,
    pub component_id: String,
    pub name: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub input_mapping: AHashMap<String, String>,
}

/// Edge record on the wire, addressed by node `component_key`.
#[derive(Debug, Deserialize, Clone)]
pub struct WireEdge {
    pub source: String,
    pub target: String,
}
