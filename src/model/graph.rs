use oxrdf::NamedNode;
use std::collections::HashMap;

/// Extracts the local name from a class IRI: the fragment when one is
/// present, otherwise the last path segment.
pub fn local_name_of(iri: &str) -> &str {
    if let Some((_, fragment)) = iri.rsplit_once('#') {
        fragment
    } else if let Some((_, segment)) = iri.rsplit_once('/') {
        segment
    } else {
        iri
    }
}

/// A named class within one ontology.
///
/// Nodes live in the arena of their owning `OntologyGraph` and refer to
/// their direct superclasses by arena index.
#[derive(Debug, Clone)]
pub struct ClassNode {
    /// Full, validated IRI of the class
    pub iri: NamedNode,

    /// Local name used as the lookup key (IRI fragment or last segment)
    pub local_name: String,

    /// Direct superclasses in declaration order, duplicates removed
    superclasses: Vec<usize>,
}

impl ClassNode {
    pub fn superclasses(&self) -> &[usize] {
        &self.superclasses
    }
}

/// The class hierarchy of a single loaded ontology.
///
/// Classes are stored arena-style: each class is an index into a fixed
/// table, with a local-name index for lookup. Classes are interned on
/// first mention, whether declared as `owl:Class` or merely referenced
/// as a superclass target. The structure can represent cycles present
/// in malformed source data; traversal code must not assume acyclicity.
#[derive(Debug, Clone, Default)]
pub struct OntologyGraph {
    classes: Vec<ClassNode>,
    index: HashMap<String, usize>,
}

impl OntologyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index for the class with this IRI, creating the node on
    /// first mention. Two IRIs sharing a local name collapse into one node
    /// since the local name is the lookup key.
    pub fn intern(&mut self, iri: NamedNode) -> usize {
        let local_name = local_name_of(iri.as_str()).to_string();
        if let Some(&idx) = self.index.get(&local_name) {
            return idx;
        }
        let idx = self.classes.len();
        self.index.insert(local_name.clone(), idx);
        self.classes.push(ClassNode {
            iri,
            local_name,
            superclasses: Vec::new(),
        });
        idx
    }

    /// Records a direct subclass-of edge. Repeated declarations of the
    /// same edge are dropped; declaration order is preserved otherwise.
    pub fn add_superclass(&mut self, class: usize, superclass: usize) {
        let supers = &mut self.classes[class].superclasses;
        if !supers.contains(&superclass) {
            supers.push(superclass);
        }
    }

    pub fn lookup(&self, local_name: &str) -> Option<usize> {
        self.index.get(local_name).copied()
    }

    pub fn class(&self, idx: usize) -> &ClassNode {
        &self.classes[idx]
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
