use thiserror::Error;

use crate::logic::resolve;
use crate::store::OntologyStore;

/// Query failures surfaced to API callers. Both map to HTTP 404 but
/// carry distinct messages so clients can tell an unknown ontology from
/// an unknown class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Ontology '{0}' not found")]
    OntologyNotFound(String),

    #[error("Class '{class}' not found in ontology '{ontology}'")]
    ClassNotFound { ontology: String, class: String },
}

/// Names of all loaded ontologies, in registry order. Never fails; an
/// empty list is a valid result.
pub fn list_ontologies<S: OntologyStore + ?Sized>(store: &S) -> Vec<String> {
    store.ontology_names().to_vec()
}

/// All superclasses (direct and indirect) of `class_name` within the
/// named ontology, sorted lexicographically for stable responses.
pub fn get_superclasses<S: OntologyStore + ?Sized>(
    store: &S,
    ontology_name: &str,
    class_name: &str,
) -> Result<Vec<String>, QueryError> {
    let graph = store
        .graph(ontology_name)
        .ok_or_else(|| QueryError::OntologyNotFound(ontology_name.to_string()))?;

    let found = resolve::ancestors(graph, class_name).ok_or_else(|| QueryError::ClassNotFound {
        ontology: ontology_name.to_string(),
        class: class_name.to_string(),
    })?;

    // BTreeSet iterates in lexicographic order already
    Ok(found.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OntologyGraph;
    use crate::store::Registry;
    use oxrdf::NamedNode;

    fn animals_registry() -> Registry {
        let mut graph = OntologyGraph::new();
        let dog = graph.intern(NamedNode::new("http://example.org/a#Dog").unwrap());
        let cat = graph.intern(NamedNode::new("http://example.org/a#Cat").unwrap());
        let mammal = graph.intern(NamedNode::new("http://example.org/a#Mammal").unwrap());
        let animal = graph.intern(NamedNode::new("http://example.org/a#Animal").unwrap());
        graph.add_superclass(dog, mammal);
        graph.add_superclass(cat, mammal);
        graph.add_superclass(mammal, animal);

        let mut registry = Registry::new();
        registry.insert("animals".to_string(), graph);
        registry
    }

    #[test]
    fn lists_loaded_ontologies() {
        let registry = animals_registry();
        assert_eq!(list_ontologies(&registry), vec!["animals"]);
    }

    #[test]
    fn empty_registry_lists_nothing() {
        let registry = Registry::new();
        assert!(list_ontologies(&registry).is_empty());
    }

    #[test]
    fn superclasses_are_sorted_and_transitive() {
        let registry = animals_registry();
        assert_eq!(
            get_superclasses(&registry, "animals", "Dog").unwrap(),
            vec!["Animal", "Mammal"]
        );
        // Cat inherits Animal transitively through Mammal
        assert_eq!(
            get_superclasses(&registry, "animals", "Cat").unwrap(),
            vec!["Animal", "Mammal"]
        );
        assert!(get_superclasses(&registry, "animals", "Animal")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn repeated_queries_return_identical_results() {
        let registry = animals_registry();
        let first = get_superclasses(&registry, "animals", "Dog").unwrap();
        let second = get_superclasses(&registry, "animals", "Dog").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_ontology_and_unknown_class_are_distinct_errors() {
        let registry = animals_registry();

        let err = get_superclasses(&registry, "biology", "Dog").unwrap_err();
        assert_eq!(err, QueryError::OntologyNotFound("biology".to_string()));

        let err = get_superclasses(&registry, "animals", "Plant").unwrap_err();
        assert_eq!(
            err,
            QueryError::ClassNotFound {
                ontology: "animals".to_string(),
                class: "Plant".to_string(),
            }
        );
        assert_ne!(
            QueryError::OntologyNotFound("x".to_string()).to_string(),
            QueryError::ClassNotFound {
                ontology: "x".to_string(),
                class: "x".to_string()
            }
            .to_string()
        );
    }
}
