//! The per-node blueprint context: the canonical index every other component
//! reads from.
//!
//! One entry per node in the loaded blueprint, keyed by node display name.
//! Entries are never removed during a session; updates replace the stored
//! form and node wholesale so equality-based change detection stays valid.

use crate::blueprint::{Form, FormNode};
use crate::error::ContextError;
use ahash::AHashMap;

/// How to treat two nodes sharing a display name during the initial build.
///
/// Display names are the context key and are expected to be unique. The
/// editor this engine models lets a later node silently replace an earlier
/// entry; `LastWins` preserves that behavior. `Reject` fails the build
/// instead of committing an index that lost a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateNamePolicy {
    #[default]
    LastWins,
    Reject,
}

/// One addressable entry in the blueprint context.
#[derive(Debug, Clone)]
pub struct ContextEntry {
    pub key: String,
    pub form: Form,
    pub node: FormNode,
    /// Gates whether field-mapping state is meaningful for this node.
    pub prefill: bool,
}

/// The per-node addressable state for a loaded blueprint.
///
/// This is the single source of truth for mapping state. It is built once
/// per successful graph load and lives for the page session.
#[derive(Debug, Clone, Default)]
pub struct BlueprintContext {
    entries: AHashMap<String, ContextEntry>,
}

impl BlueprintContext {
    /// Builds the initial context with the default duplicate-name policy.
    pub fn build(forms: &[Form], nodes: &[FormNode]) -> Result<Self, ContextError> {
        Self::build_with_policy(forms, nodes, DuplicateNamePolicy::default())
    }

    /// Builds the initial context: one entry per node, keyed by display
    /// name, with `prefill` off.
    ///
    /// If any node references a form that is not part of the blueprint the
    /// whole build fails and nothing is committed; the engine must not
    /// operate on an inconsistent index.
    pub fn build_with_policy(
        forms: &[Form],
        nodes: &[FormNode],
        policy: DuplicateNamePolicy,
    ) -> Result<Self, ContextError> {
        let mut entries = AHashMap::with_capacity(nodes.len());

        for node in nodes {
            let form = forms
                .iter()
                .find(|form| node.data.component_id == form.id)
                .ok_or_else(|| ContextError::MissingForm {
                    node_name: node.data.name.clone(),
                    component_id: node.data.component_id.clone(),
                })?;

            let key = node.data.name.clone();
            if policy == DuplicateNamePolicy::Reject && entries.contains_key(&key) {
                return Err(ContextError::DuplicateNodeName { name: key });
            }

            entries.insert(
                key.clone(),
                ContextEntry {
                    key,
                    form: form.clone(),
                    node: node.clone(),
                    prefill: false,
                },
            );
        }

        Ok(Self { entries })
    }

    /// Wholesale replacement. Initial-load path only.
    pub fn replace(&mut self, new_context: BlueprintContext) {
        *self = new_context;
    }

    /// Guarded structural merge of a single entry: all other keys are
    /// preserved, only `key`'s entry is replaced.
    ///
    /// A no-op unless every part is present and the key is non-empty. Rapid
    /// UI click-throughs can legitimately produce partial updates, so skips
    /// are silent rather than errors. Returns whether the entry was applied.
    pub fn upsert(
        &mut self,
        key: Option<&str>,
        form: Option<Form>,
        node: Option<FormNode>,
        prefill: Option<bool>,
    ) -> bool {
        let (Some(key), Some(form), Some(node), Some(prefill)) = (key, form, node, prefill) else {
            return false;
        };
        if key.is_empty() {
            return false;
        }

        self.entries.insert(
            key.to_string(),
            ContextEntry {
                key: key.to_string(),
                form,
                node,
                prefill,
            },
        );
        true
    }

    /// Flips the prefill switch for a node.
    ///
    /// The node's `input_mapping` values are untouched; turning prefill off
    /// merely hides them from the editor, it does not clear them.
    pub fn set_prefill(&mut self, node: &FormNode, form: &Form, enabled: bool) -> bool {
        self.upsert(
            Some(node.data.name.as_str()),
            Some(form.clone()),
            Some(node.clone()),
            Some(enabled),
        )
    }

    pub fn get(&self, key: &str) -> Option<&ContextEntry> {
        self.entries.get(key)
    }

    /// The prefill flag for a node, if it has an entry.
    pub fn prefill(&self, key: &str) -> Option<bool> {
        self.entries.get(key).map(|entry| entry.prefill)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ContextEntry> {
        self.entries.values()
    }
}
