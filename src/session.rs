//! One explicit object owning everything a page session holds.
//!
//! The session is the dependency-injection seam: global data, the loaded
//! graph, the blueprint context and the selection state all live here and
//! are passed by handle, never reached through ambient globals. Canonical
//! state is mutated only through the operations below; what the UI should
//! show is computed by the pure [`BlueprintSession::view`] projection.

use crate::blueprint::{BlueprintGraph, FormEdge, FormNode};
use crate::context::{BlueprintContext, DuplicateNamePolicy};
use crate::data::GlobalData;
use crate::error::ContextError;
use crate::mapping::{
    DataSource, MappingStore, MappingValue, autocomplete_options, resolve_sources,
};
use crate::selection::{Selection, SelectionController};
use tracing::error;

/// One row of the editor's field list, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: String,
    /// The current mapping value; empty when unmapped.
    pub value: String,
    pub populated: bool,
}

/// The derived view handed to the rendering boundary.
///
/// A pure projection of canonical state: recomputing it never mutates the
/// session, and nothing outside it is meant to be rendered.
#[derive(Debug)]
pub struct ViewState<'a> {
    /// Nodes in display order (ascending x).
    pub nodes: &'a [FormNode],
    pub edges: &'a [FormEdge],
    /// `None` until a graph load has committed a context. Distinct from a
    /// loaded blueprint with no mappings.
    pub context: Option<&'a BlueprintContext>,
    pub selection: &'a Selection,
    /// Data sources for the node being mapped; empty unless the mapper is open.
    pub sources: Vec<DataSource>,
}

/// A live editing session over one blueprint.
pub struct BlueprintSession {
    global: GlobalData,
    graph: BlueprintGraph,
    context: Option<BlueprintContext>,
    selection: SelectionController,
    duplicate_policy: DuplicateNamePolicy,
}

impl BlueprintSession {
    pub fn new(global: GlobalData) -> Self {
        Self::with_policy(global, DuplicateNamePolicy::default())
    }

    pub fn with_policy(global: GlobalData, duplicate_policy: DuplicateNamePolicy) -> Self {
        Self {
            global,
            graph: BlueprintGraph::default(),
            context: None,
            selection: SelectionController::new(),
            duplicate_policy,
        }
    }

    /// Indexes a freshly fetched graph into the session.
    ///
    /// Nodes are put into display order and the context is built in one
    /// step. On failure nothing is committed: the session keeps neither the
    /// graph nor a partial context.
    pub fn load_graph(&mut self, mut graph: BlueprintGraph) -> Result<(), ContextError> {
        graph
            .nodes
            .sort_by(|a, b| a.position.x.total_cmp(&b.position.x));

        match BlueprintContext::build_with_policy(&graph.forms, &graph.nodes, self.duplicate_policy)
        {
            Ok(context) => {
                self.graph = graph;
                self.context = Some(context);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to build blueprint context");
                Err(err)
            }
        }
    }

    /// Whether a graph load has committed a context yet.
    pub fn is_loaded(&self) -> bool {
        self.context.is_some()
    }

    pub fn context(&self) -> Option<&BlueprintContext> {
        self.context.as_ref()
    }

    pub fn global_data(&self) -> &GlobalData {
        &self.global
    }

    /// Nodes in display order.
    pub fn nodes(&self) -> &[FormNode] {
        &self.graph.nodes
    }

    pub fn selection(&self) -> &Selection {
        self.selection.state()
    }

    /// Graph click on a node. The node's form must resolve for the editor to
    /// open; clicks on unknown ids or formless nodes are ignored.
    pub fn select_node(&mut self, node_id: &str) {
        let Some(node) = self.graph.node_by_id(node_id) else {
            return;
        };
        let Some(form) = self.graph.form_by_id(&node.data.component_id) else {
            return;
        };
        self.selection.select_node(node.clone(), form.clone());
    }

    /// Field activation: the editor closes and the mapper opens with the
    /// field recorded.
    pub fn open_mapper(&mut self, field: &str) {
        self.selection.map_field(field);
    }

    /// Backs out of the mapper without writing anything.
    pub fn cancel_mapping(&mut self) {
        self.selection.finish_mapping();
    }

    /// Confirms a mapping pick: writes through the mapping store, then
    /// returns to the editor carrying the refreshed node.
    ///
    /// No-op unless the mapper is open and a context exists; a mapping write
    /// can never be observed before the initial build completes.
    pub fn confirm_mapping(&mut self, value: &MappingValue) {
        let Selection::Mapper { node, form, field } = self.selection.state() else {
            return;
        };
        let (node, form, field) = (node.clone(), form.clone(), field.clone());

        if let Some(context) = self.context.as_mut() {
            let updated = MappingStore::new(context).write(&node, &form, &field, value);
            self.selection.refresh_node(updated);
        }
        self.selection.finish_mapping();
    }

    /// Clears one field of the node open in the editor.
    pub fn clear_field(&mut self, field: &str) {
        let Selection::Editor { node, form } = self.selection.state() else {
            return;
        };
        let (node, form) = (node.clone(), form.clone());

        if let Some(context) = self.context.as_mut() {
            let updated = MappingStore::new(context).clear(&node, &form, field);
            self.selection.refresh_node(updated);
        }
    }

    /// Prefill switch for the node open in the editor. The flag lives in the
    /// context entry; mapping values are untouched.
    pub fn set_prefill(&mut self, enabled: bool) {
        let Selection::Editor { node, form } = self.selection.state() else {
            return;
        };
        let (node, form) = (node.clone(), form.clone());

        if let Some(context) = self.context.as_mut() {
            // Toggle against the entry's current node so mappings written
            // since the editor opened are carried through.
            let live = context
                .get(&node.data.name)
                .map(|entry| entry.node.clone())
                .unwrap_or(node);
            context.set_prefill(&live, &form, enabled);
        }
    }

    /// Free-text entry in the mapper: accepted only when it exactly matches
    /// one of the autocomplete options, and stored verbatim.
    pub fn free_text_value(&self, raw: &str) -> Option<MappingValue> {
        self.autocomplete_options()
            .iter()
            .any(|opt| opt == raw)
            .then(|| MappingValue::Literal(raw.to_string()))
    }

    /// Editor rows for the open editor. Values are read from the context
    /// entry when one exists, so rows reflect writes made this session.
    pub fn editor_fields(&self) -> Vec<FieldView> {
        let Selection::Editor { node, form } = self.selection.state() else {
            return Vec::new();
        };

        let live = self
            .context
            .as_ref()
            .and_then(|context| context.get(&node.data.name))
            .map(|entry| &entry.node)
            .unwrap_or(node);

        form.field_schema
            .field_names()
            .into_iter()
            .map(|name| {
                let value = live
                    .data
                    .input_mapping
                    .get(&name)
                    .cloned()
                    .unwrap_or_default();
                FieldView {
                    populated: !value.is_empty(),
                    name,
                    value,
                }
            })
            .collect()
    }

    /// Data sources for the node currently being mapped; empty otherwise.
    pub fn data_sources(&self) -> Vec<DataSource> {
        match self.selection.state() {
            Selection::Mapper { node, .. } => {
                resolve_sources(node, &self.graph.nodes, &self.graph.forms, &self.global)
            }
            _ => Vec::new(),
        }
    }

    /// Flat `"Title.option"` list for free-text autocomplete in the mapper.
    pub fn autocomplete_options(&self) -> Vec<String> {
        autocomplete_options(&self.data_sources())
    }

    /// Closes whichever modal is open.
    pub fn close_modal(&mut self) {
        self.selection.close();
    }

    /// The derived view of canonical state for rendering.
    pub fn view(&self) -> ViewState<'_> {
        ViewState {
            nodes: &self.graph.nodes,
            edges: &self.graph.edges,
            context: self.context.as_ref(),
            selection: self.selection.state(),
            sources: self.data_sources(),
        }
    }
}
