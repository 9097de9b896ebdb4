use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::OntologyStore;

pub fn create_router<S: OntologyStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Documentation
        .route("/", get(handlers::root))
        .route("/docs", get(handlers::get_api_docs::<S>))
        // Health check
        .route("/health", get(handlers::health_check))
        // Ontology queries
        .route("/ontologies", get(handlers::list_ontologies::<S>))
        .route(
            "/ontologies/:ontology_name/superclasses/:class_name",
            get(handlers::get_superclasses::<S>),
        )
}
