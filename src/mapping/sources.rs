//! Prerequisite resolution: the ordered list of data sources a node can map
//! its fields from.

use crate::blueprint::{Form, FormNode};
use crate::data::GlobalData;
use itertools::Itertools;

/// A titled, deduplicated list of addressable field names: either the global
/// data source or a source derived from one prerequisite node's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub title: String,
    pub options: Vec<String>,
}

/// Derives the display title of a prerequisite source from a node name.
///
/// The name is lowercased, its first space turned into an underscore, and
/// each underscore-separated segment capitalized:
/// `"Prerequisite Form"` -> `"prerequisite_form"` -> `"Prerequisite Form"`.
/// Only the first space is converted; later ones ride along in the segment.
pub fn source_title(raw_name: &str) -> String {
    raw_name
        .to_lowercase()
        .replacen(' ', "_", 1)
        .split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .join(" ")
}

/// Resolves the data sources addressable from `selected`.
///
/// The global source always comes first. Then, iterating `nodes` in list
/// order (not prerequisite-list order), every node other than `selected`
/// whose id appears in the selected node's prerequisites contributes one
/// source, provided its form resolves and no accumulated source already
/// carries the same title (first wins, case-sensitive). Prerequisite ids
/// that match no node and nodes whose form is missing are skipped silently.
pub fn resolve_sources(
    selected: &FormNode,
    nodes: &[FormNode],
    forms: &[Form],
    global: &GlobalData,
) -> Vec<DataSource> {
    let mut sources = vec![DataSource {
        title: global.title.clone(),
        options: global.option_keys(),
    }];

    for node in nodes {
        if node.id == selected.id {
            continue;
        }
        if !selected.data.prerequisites.iter().any(|id| *id == node.id) {
            continue;
        }
        let Some(form) = forms.iter().find(|form| form.id == node.data.component_id) else {
            continue;
        };

        let title = source_title(&node.data.name);
        if sources.iter().any(|src| src.title == title) {
            continue;
        }

        sources.push(DataSource {
            title,
            options: form.field_schema.field_names(),
        });
    }

    sources
}

/// Flattens sources into the `"Title.option"` strings offered by the
/// mapper's free-text autocomplete.
pub fn autocomplete_options(sources: &[DataSource]) -> Vec<String> {
    sources
        .iter()
        .flat_map(|src| {
            src.options
                .iter()
                .map(|opt| format!("{}.{}", src.title, opt))
        })
        .collect()
}
