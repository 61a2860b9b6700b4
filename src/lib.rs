//! # Seizu - Blueprint Context and Field-Mapping Engine
//!
//! **Seizu** models the state of a visual blueprint editor: a directed graph
//! of form nodes whose editable fields can each be mapped to a static value
//! or to a value produced by a prerequisite node or a global data source.
//! The engine owns the state and its propagation rules; rendering is left to
//! whatever UI sits on top of the derived view it exposes.
//!
//! ## Core Workflow
//!
//! 1.  **Fetch or load a graph**: use [`client::GraphClient`] against a
//!     blueprint service, or deserialize a [`wire::GraphPayload`] from
//!     anywhere else. Any custom feed can implement
//!     [`blueprint::IntoBlueprint`] instead.
//! 2.  **Load it into a session**: [`session::BlueprintSession::load_graph`]
//!     orders the nodes for display and indexes every node into the
//!     blueprint context in one step. A node whose form cannot be resolved
//!     fails the whole load; the session never holds a partial index.
//! 3.  **Drive the editor**: select a node, open the mapper for a field,
//!     resolve its data sources, confirm or cancel a mapping, clear fields,
//!     toggle prefill. Every mutation funnels through the mapping store and
//!     replaces state copy-on-write, so change detection by equality stays
//!     valid.
//! 4.  **Render**: [`session::BlueprintSession::view`] projects the
//!     canonical state into exactly what a UI needs to draw.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seizu::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Fetch the graph payload for one blueprint.
//!     let client = GraphClient::new("http://localhost:3000");
//!     let payload = client.fetch_graph("123", "bp_456")?;
//!     let graph = payload.into_blueprint()?;
//!
//!     // Build the session; the context is committed atomically.
//!     let mut session = BlueprintSession::new(GlobalData::default());
//!     session.load_graph(graph)?;
//!
//!     // Open the editor for the first node and map one of its fields.
//!     let node_id = session.nodes()[0].id.clone();
//!     session.select_node(&node_id);
//!
//!     if let Some(field) = session.editor_fields().first().map(|f| f.name.clone()) {
//!         session.open_mapper(&field);
//!         for source in session.data_sources() {
//!             println!("{}: {:?}", source.title, source.options);
//!         }
//!         session.confirm_mapping(&MappingValue::Select {
//!             source: GLOBAL_DATA_TITLE.to_string(),
//!             option: "dataA".to_string(),
//!         });
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod blueprint;
pub mod client;
pub mod context;
pub mod data;
pub mod error;
pub mod mapping;
pub mod prelude;
pub mod selection;
pub mod session;
pub mod wire;
