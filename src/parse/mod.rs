pub mod rdfxml;
pub mod vocab;

pub use rdfxml::RdfXmlClassParser;

use crate::model::{OntologyGraph, OntologySource};
use std::path::PathBuf;
use thiserror::Error;

/// Per-file failure during ontology loading. Recovered locally by the
/// loader: the file is skipped and loading continues.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ontology document: {0}")]
    Syntax(String),

    #[error("invalid class IRI '{iri}': {reason}")]
    Iri { iri: String, reason: String },
}

/// Narrow parsing seam: one ontology file in, one class-hierarchy graph
/// out. Implementations can be swapped without touching the loader or
/// the resolver.
pub trait OntologyParser: Send + Sync {
    fn parse(&self, source: &OntologySource) -> Result<OntologyGraph, LoadError>;
}
