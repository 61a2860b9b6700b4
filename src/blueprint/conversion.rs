use super::definition::BlueprintGraph;
use crate::error::GraphConversionError;

/// A trait for external payload formats that can be converted into a `BlueprintGraph`.
///
/// This is the extension point that keeps the engine format-agnostic. The
/// built-in graph endpoint payload (`wire::GraphPayload`) implements it; any
/// other feed of forms/nodes/edges can do the same and hand the result to
/// `BlueprintSession::load_graph`.
///
/// # Example
///
/// ```rust,no_run
/// use seizu::blueprint::{BlueprintGraph, Form, FormNode, IntoBlueprint};
/// use seizu::error::GraphConversionError;
///
/// struct MyExport {
///     forms: Vec<Form>,
///     nodes: Vec<FormNode>,
/// }
///
/// impl IntoBlueprint for MyExport {
///     fn into_blueprint(self) -> Result<BlueprintGraph, GraphConversionError> {
///         Ok(BlueprintGraph {
///             forms: self.forms,
///             nodes: self.nodes,
///             edges: vec![],
///         })
///     }
/// }
/// ```
pub trait IntoBlueprint {
    /// Consumes the object and converts it into a canonical blueprint graph.
    fn into_blueprint(self) -> Result<BlueprintGraph, GraphConversionError>;
}
