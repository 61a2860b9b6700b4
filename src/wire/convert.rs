use super::types::{GraphPayload, WireEdge, WireForm, WireNode, WireNodeKind};
use crate::blueprint::{
    BlueprintGraph, FieldSchema, Form, FormEdge, FormNode, IntoBlueprint, NodeData, NodeKind,
    Position,
};
use crate::error::GraphConversionError;

impl IntoBlueprint for GraphPayload {
    /// Missing sections convert to empty lists; a node without a data
    /// payload fails the whole conversion.
    fn into_blueprint(self) -> Result<BlueprintGraph, GraphConversionError> {
        let forms = self
            .forms
            .unwrap_or_default()
            .into_iter()
            .map(Form::from)
            .collect();
        let nodes = self
            .nodes
            .unwrap_or_default()
            .into_iter()
            .map(FormNode::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let edges = self
            .edges
            .unwrap_or_default()
            .into_iter()
            .map(FormEdge::from)
            .collect();

        Ok(BlueprintGraph {
            forms,
            nodes,
            edges,
        })
    }
}

impl From<WireForm> for Form {
    fn from(wire: WireForm) -> Self {
        Form {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            is_reusable: wire.is_reusable,
            field_schema: FieldSchema {
                schema_type: wire.field_schema.schema_type,
                properties: wire.field_schema.properties,
                required: wire.field_schema.required,
            },
        }
    }
}

impl TryFrom<WireNode> for FormNode {
    type Error = GraphConversionError;

    fn try_from(wire: WireNode) -> Result<Self, Self::Error> {
        let data = wire
            .data
            .ok_or_else(|| GraphConversionError::MissingNode {
                node_id: wire.id.clone(),
            })?;

        Ok(FormNode {
            id: wire.id,
            kind: wire.kind.into(),
            position: Position {
                x: wire.position.x,
                y: wire.position.y,
            },
            data: NodeData {
                component_key: data.component_key,
                component_id: data.component_id,
                name: data.name,
                prerequisites: data.prerequisites,
                input_mapping: data.input_mapping,
            },
        })
    }
}

impl From<WireNodeKind> for NodeKind {
    fn from(kind: WireNodeKind) -> Self {
        match kind {
            WireNodeKind::Form => NodeKind::Form,
            WireNodeKind::Branch => NodeKind::Branch,
            WireNodeKind::Trigger => NodeKind::Trigger,
            WireNodeKind::Configuration => NodeKind::Configuration,
        }
    }
}

impl From<WireEdge> for FormEdge {
    fn from(wire: WireEdge) -> Self {
        FormEdge {
            source: wire.source,
            target: wire.target,
        }
    }
}
