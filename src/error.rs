use thiserror::Error;

/// Errors that can occur while building the blueprint context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error(
        "form data is missing when trying to update context: node '{node_name}' references unknown form '{component_id}'"
    )]
    MissingForm {
        node_name: String,
        component_id: String,
    },

    #[error("duplicate node display name '{name}' in blueprint")]
    DuplicateNodeName { name: String },
}

/// Errors that can occur while fetching the graph payload from the remote endpoint.
///
/// None of these are retried; a failed fetch leaves the session unloaded.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("graph request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("graph endpoint returned status {status}")]
    Status { status: u16 },
}

/// Errors that can occur when converting an external payload into a `BlueprintGraph`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("invalid blueprint data: {0}")]
    Validation(String),

    #[error("node data is missing when trying to update context: node '{node_id}' has no data payload")]
    MissingNode { node_id: String },
}
