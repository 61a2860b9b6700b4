//! The single-active-modal selection state machine.
//!
//! Tracks which node/form/field is being edited and which of the two modal
//! views is open. The editor and the mapper are mutually exclusive by
//! construction: the state is one enum, not two flags.

use crate::blueprint::{Form, FormNode};

/// The current selection. At most one modal is represented at any time.
#[derive(Debug, Clone, Default)]
pub enum Selection {
    /// Nothing selected, no modal open.
    #[default]
    Idle,
    /// The field editor is open for a node.
    Editor { node: FormNode, form: Form },
    /// The data-source mapper is open for one field of a node.
    Mapper {
        node: FormNode,
        form: Form,
        field: String,
    },
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    pub fn editor_open(&self) -> bool {
        matches!(self, Selection::Editor { .. })
    }

    pub fn mapper_open(&self) -> bool {
        matches!(self, Selection::Mapper { .. })
    }

    /// The node carried by the active selection, if any.
    pub fn node(&self) -> Option<&FormNode> {
        match self {
            Selection::Idle => None,
            Selection::Editor { node, .. } | Selection::Mapper { node, .. } => Some(node),
        }
    }

    pub fn form(&self) -> Option<&Form> {
        match self {
            Selection::Idle => None,
            Selection::Editor { form, .. } | Selection::Mapper { form, .. } => Some(form),
        }
    }

    /// The field being mapped, when the mapper is open.
    pub fn field(&self) -> Option<&str> {
        match self {
            Selection::Mapper { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Drives `Selection` through its legal transitions. Invalid transitions are
/// silent no-ops, matching the guard discipline of the context.
#[derive(Debug, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    /// Graph click on a node: opens the editor, closes it when the same node
    /// is re-selected, switches when a different node is selected. Ignored
    /// while the mapper is open (the modal swallows graph clicks).
    pub fn select_node(&mut self, node: FormNode, form: Form) {
        self.state = match std::mem::take(&mut self.state) {
            Selection::Idle => Selection::Editor { node, form },
            Selection::Editor { node: open, .. } if open.id == node.id => Selection::Idle,
            Selection::Editor { .. } => Selection::Editor { node, form },
            mapper @ Selection::Mapper { .. } => mapper,
        };
    }

    /// Field activation in the editor: the editor closes and the mapper
    /// opens with the field recorded. No-op outside the editor.
    pub fn map_field(&mut self, field: &str) {
        self.state = match std::mem::take(&mut self.state) {
            Selection::Editor { node, form } => Selection::Mapper {
                node,
                form,
                field: field.to_string(),
            },
            other => other,
        };
    }

    /// Leaves the mapper and returns to the editor. Cancel and confirm both
    /// land here; the confirm path writes through the mapping store first.
    pub fn finish_mapping(&mut self) {
        self.state = match std::mem::take(&mut self.state) {
            Selection::Mapper { node, form, .. } => Selection::Editor { node, form },
            other => other,
        };
    }

    /// Click-away: closes whichever modal is open.
    pub fn close(&mut self) {
        self.state = Selection::Idle;
    }

    /// Replaces the node carried by the active selection after a mapping
    /// write, so the selection tracks the copy the context now holds.
    pub fn refresh_node(&mut self, updated: FormNode) {
        match &mut self.state {
            Selection::Idle => {}
            Selection::Editor { node, .. } | Selection::Mapper { node, .. } => *node = updated,
        }
    }
}
