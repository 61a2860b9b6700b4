//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the seizu crate. Import this
//! module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use seizu::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let payload: GraphPayload =
//!     serde_json::from_str(&std::fs::read_to_string("path/to/graph.json")?)?;
//! let graph = payload.into_blueprint()?;
//!
//! let mut session = BlueprintSession::new(GlobalData::default());
//! session.load_graph(graph)?;
//! # Ok(())
//! # }
//! ```

// Session and derived view
pub use crate::session::{BlueprintSession, FieldView, ViewState};

// Canonical blueprint model and conversion
pub use crate::blueprint::{
    BlueprintGraph, FieldSchema, Form, FormEdge, FormNode, IntoBlueprint, NodeData, NodeKind,
    Position,
};

// Context and mapping
pub use crate::context::{BlueprintContext, ContextEntry, DuplicateNamePolicy};
pub use crate::mapping::{
    DataSource, MappingStore, MappingValue, autocomplete_options, resolve_sources, source_title,
};
pub use crate::selection::{Selection, SelectionController};

// Global data and the graph endpoint
pub use crate::client::GraphClient;
pub use crate::data::{GLOBAL_DATA_TITLE, GlobalData};
pub use crate::wire::GraphPayload;

// Error types
pub use crate::error::{ContextError, FetchError, GraphConversionError};

// Map type used throughout the engine
pub use ahash::AHashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
