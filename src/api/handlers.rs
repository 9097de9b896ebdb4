use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Json, Redirect},
};
use serde::Serialize;
use std::sync::Arc;

use crate::logic::query::{self, QueryError};
use crate::store::OntologyStore;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Redirects the root path to the API documentation.
pub async fn root() -> Redirect {
    Redirect::to("/docs")
}

pub async fn get_api_docs<S: OntologyStore>(_state: State<AppState<S>>) -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Ontology Service API Documentation</title>
    <style>
        body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
        code { background: #f4f4f4; padding: 0.1rem 0.3rem; border-radius: 3px; }
        td, th { text-align: left; padding: 0.3rem 0.8rem 0.3rem 0; vertical-align: top; }
    </style>
</head>
<body>
    <h1>Ontology Service</h1>
    <p>Class-hierarchy queries over OWL ontologies loaded from the configured
    directory at startup.</p>
    <table>
        <tr><th>Endpoint</th><th>Description</th></tr>
        <tr><td><code>GET /ontologies</code></td>
            <td>JSON array of loaded ontology names.</td></tr>
        <tr><td><code>GET /ontologies/{ontology}/superclasses/{class}</code></td>
            <td>Sorted JSON array of all superclasses (direct and indirect)
            of the class. 404 when the ontology or the class is unknown.</td></tr>
        <tr><td><code>GET /health</code></td>
            <td>Service liveness.</td></tr>
    </table>
</body>
</html>"#,
    )
}

/// GET /ontologies
///
/// Names of all successfully loaded ontologies, in registry order.
/// An empty array means no parseable files were found at startup.
pub async fn list_ontologies<S: OntologyStore>(
    State(store): State<AppState<S>>,
) -> Json<Vec<String>> {
    Json(query::list_ontologies(store.as_ref()))
}

/// GET /ontologies/:ontology_name/superclasses/:class_name
///
/// The full ancestor set of the class, sorted. Unknown ontology and
/// unknown class both yield 404, with distinct error messages.
pub async fn get_superclasses<S: OntologyStore>(
    State(store): State<AppState<S>>,
    Path((ontology_name, class_name)): Path<(String, String)>,
) -> Result<Json<Vec<String>>, (StatusCode, Json<ErrorResponse>)> {
    match query::get_superclasses(store.as_ref(), &ontology_name, &class_name) {
        Ok(superclasses) => Ok(Json(superclasses)),
        Err(e @ QueryError::OntologyNotFound(_)) | Err(e @ QueryError::ClassNotFound { .. }) => {
            Err((StatusCode::NOT_FOUND, Json(ErrorResponse::new(&e.to_string()))))
        }
    }
}
