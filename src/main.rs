use axum::serve;
use ontology_service::api::routes::create_router;
use ontology_service::config::AppConfig;
use ontology_service::parse::RdfXmlClassParser;
use ontology_service::store::load_ontologies;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new().filter_level(LevelFilter::Info).init();

    println!("Ontology Service: class-hierarchy queries over OWL ontologies");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}, ontology dir={}",
        config.server.host,
        config.server.port,
        config.ontologies.directory
    );

    // Load all ontologies before accepting any traffic; the registry is
    // immutable from here on.
    let registry = load_ontologies(&config.ontology_dir(), &RdfXmlClassParser);
    if registry.is_empty() {
        log::warn!(
            "No ontologies loaded. Add .owl files to '{}' and restart the service.",
            config.ontologies.directory
        );
    } else {
        println!("Loaded {} ontolog(ies)", registry.len());
    }

    let registry = Arc::new(registry);

    run_server(create_router().with_state(registry), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Ontology service running on http://{}", bind_address);
    println!(
        "API documentation available at http://{}/docs",
        bind_address
    );

    serve(listener, app).await?;

    Ok(())
}
