pub mod loader;
pub mod registry;
pub mod traits;

pub use loader::load_ontologies;
pub use registry::Registry;
pub use traits::OntologyStore;
