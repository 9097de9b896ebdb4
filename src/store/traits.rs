use crate::model::OntologyGraph;

/// Read side of the ontology registry, the seam the query façade and the
/// HTTP handlers are generic over. Implementations must be immutable
/// after construction so concurrent readers need no locking.
pub trait OntologyStore: Send + Sync {
    /// Loaded ontology names in a stable insertion order.
    fn ontology_names(&self) -> &[String];

    /// The graph for `name`, or `None` when no ontology of that name
    /// loaded successfully. Callers cannot distinguish "failed to load"
    /// from "never existed"; both are absent here.
    fn graph(&self, name: &str) -> Option<&OntologyGraph>;
}
