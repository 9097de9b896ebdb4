pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod parse;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::query::{get_superclasses, list_ontologies};
pub use logic::QueryError;

// Export all model types
pub use model::*;

// Export parse types
pub use parse::{LoadError, OntologyParser, RdfXmlClassParser};

// Export store types
pub use store::{load_ontologies, OntologyStore, Registry};
