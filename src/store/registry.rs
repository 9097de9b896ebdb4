use std::collections::HashMap;

use crate::model::OntologyGraph;
use crate::store::traits::OntologyStore;

/// Process-wide mapping from ontology name to its parsed graph.
///
/// Built once by the loader before the server accepts traffic, then
/// shared read-only behind an `Arc`. Mutation stops at construction
/// time, so reads are lock-free.
#[derive(Debug, Default)]
pub struct Registry {
    names: Vec<String>,
    graphs: HashMap<String, OntologyGraph>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a graph under `name`. Loading a second file with the
    /// same derived name replaces the earlier graph; the name keeps its
    /// original position and appears once.
    pub fn insert(&mut self, name: String, graph: OntologyGraph) {
        if self.graphs.insert(name.clone(), graph).is_none() {
            self.names.push(name);
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl OntologyStore for Registry {
    fn ontology_names(&self) -> &[String] {
        &self.names
    }

    fn graph(&self, name: &str) -> Option<&OntologyGraph> {
        self.graphs.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OntologyGraph;
    use oxrdf::NamedNode;

    fn graph_with(class_iri: &str) -> OntologyGraph {
        let mut graph = OntologyGraph::new();
        graph.intern(NamedNode::new(class_iri).unwrap());
        graph
    }

    #[test]
    fn names_keep_insertion_order() {
        let mut registry = Registry::new();
        registry.insert("zoo".to_string(), OntologyGraph::new());
        registry.insert("animals".to_string(), OntologyGraph::new());
        registry.insert("plants".to_string(), OntologyGraph::new());

        assert_eq!(registry.ontology_names(), &["zoo", "animals", "plants"]);
    }

    #[test]
    fn get_returns_none_for_unknown_name() {
        let registry = Registry::new();
        assert!(registry.graph("missing").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_name_replaces_graph_without_duplicating_entry() {
        let mut registry = Registry::new();
        registry.insert("animals".to_string(), graph_with("http://example.org/a#Old"));
        registry.insert("animals".to_string(), graph_with("http://example.org/a#New"));

        assert_eq!(registry.ontology_names(), &["animals"]);
        let graph = registry.graph("animals").unwrap();
        assert!(graph.lookup("New").is_some());
        assert!(graph.lookup("Old").is_none());
    }
}
