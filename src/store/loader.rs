use std::fs;
use std::path::Path;

use crate::model::OntologySource;
use crate::parse::OntologyParser;
use crate::store::Registry;

/// Scans `directory` for ontology files and parses each into the
/// returned registry. Runs once at startup, before any query traffic.
///
/// Files are visited in lexicographic filename order so the registry is
/// reproducible across platforms; when two files derive the same name
/// the later one wins. A file that fails to parse is logged and
/// skipped. A missing or unreadable directory yields an empty registry
/// with a warning, which is a normal state for callers.
pub fn load_ontologies<P: OntologyParser>(directory: &Path, parser: &P) -> Registry {
    let mut registry = Registry::new();

    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!(
                "Ontology directory '{}' not available ({}). Starting with an empty registry.",
                directory.display(),
                e
            );
            return registry;
        }
    };

    let mut candidates: Vec<OntologySource> = entries
        .flatten()
        .filter_map(|entry| OntologySource::from_path(&entry.path()))
        .collect();
    candidates.sort_by(|a, b| a.path.cmp(&b.path));

    log::info!(
        "Scanning for ontologies in: {} ({} candidate files)",
        directory.display(),
        candidates.len()
    );

    for source in candidates {
        match parser.parse(&source) {
            Ok(graph) => {
                log::info!(
                    "Loaded ontology '{}' from {} ({} classes)",
                    source.name,
                    source.path.display(),
                    graph.len()
                );
                registry.insert(source.name, graph);
            }
            Err(e) => {
                log::error!(
                    "Failed to load ontology '{}' from {}: {}",
                    source.name,
                    source.path.display(),
                    e
                );
            }
        }
    }

    registry
}
