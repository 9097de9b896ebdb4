pub mod graph;
pub mod source;

pub use graph::{local_name_of, ClassNode, OntologyGraph};
pub use source::{OntologyFormat, OntologySource};
