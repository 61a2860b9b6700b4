//! The read/write contract for a single field's mapping value.

use crate::blueprint::{Form, FormNode};
use crate::context::BlueprintContext;

/// A value being written to a field mapping: a structured pick from a data
/// source, or a raw literal accepted verbatim from free-text entry.
///
/// Literals are not validated against the target field's type; that is an
/// explicit non-goal of the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingValue {
    Select { source: String, option: String },
    Literal(String),
}

impl MappingValue {
    /// The string form stored in `input_mapping`.
    pub fn render(&self) -> String {
        match self {
            Self::Select { source, option } => format!("{}.{}", source, option),
            Self::Literal(raw) => raw.clone(),
        }
    }
}

/// Reads and writes field mappings, propagating every change back into the
/// blueprint context.
///
/// Writes never mutate the node they are given: each one returns a fresh
/// copy carrying the updated `input_mapping`, and the context entry is
/// replaced wholesale with that copy.
pub struct MappingStore<'ctx> {
    context: &'ctx mut BlueprintContext,
}

impl<'ctx> MappingStore<'ctx> {
    pub fn new(context: &'ctx mut BlueprintContext) -> Self {
        Self { context }
    }

    /// The current mapping value for a field; empty when unmapped.
    pub fn current_value<'n>(&self, node: &'n FormNode, field: &str) -> &'n str {
        node.data
            .input_mapping
            .get(field)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// A field is populated iff its mapping value is a non-empty string.
    pub fn is_populated(&self, node: &FormNode, field: &str) -> bool {
        !self.current_value(node, field).is_empty()
    }

    /// Writes a mapping value and returns the updated copy of the node.
    pub fn write(
        &mut self,
        node: &FormNode,
        form: &Form,
        field: &str,
        value: &MappingValue,
    ) -> FormNode {
        self.apply(node, form, field, value.render())
    }

    /// Clears a field's mapping and returns the updated copy of the node.
    pub fn clear(&mut self, node: &FormNode, form: &Form, field: &str) -> FormNode {
        self.apply(node, form, field, String::new())
    }

    fn apply(&mut self, node: &FormNode, form: &Form, field: &str, rendered: String) -> FormNode {
        let mut updated = node.clone();
        updated.data.input_mapping.insert(field.to_string(), rendered);

        // Prefill is read from the live entry and carried through unchanged;
        // a node with no entry yet makes the propagation a guarded no-op.
        let key = updated.data.name.clone();
        let prefill = self.context.prefill(&key);
        self.context.upsert(
            Some(key.as_str()),
            Some(form.clone()),
            Some(updated.clone()),
            prefill,
        );

        updated
    }
}
