use std::collections::{BTreeSet, VecDeque};

use crate::model::OntologyGraph;

/// Computes the full transitive ancestor set of `class_name`: every
/// distinct class reachable by following direct-superclass edges upward.
/// Returns `None` when the class is not present in the graph.
///
/// Breadth-first with a visited table over the class arena, so every
/// node expands at most once. That bounds the walk by the graph size and
/// keeps it terminating even when malformed source data contains a
/// cycle. The starting class is marked visited up front and is never
/// part of its own ancestor set.
pub fn ancestors(graph: &OntologyGraph, class_name: &str) -> Option<BTreeSet<String>> {
    let start = graph.lookup(class_name)?;

    let mut visited = vec![false; graph.len()];
    visited[start] = true;

    let mut found = BTreeSet::new();
    let mut queue = VecDeque::from([start]);
    while let Some(idx) = queue.pop_front() {
        for &superclass in graph.class(idx).superclasses() {
            if !visited[superclass] {
                visited[superclass] = true;
                found.insert(graph.class(superclass).local_name.clone());
                queue.push_back(superclass);
            }
        }
    }

    Some(found)
}
