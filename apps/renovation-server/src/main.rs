//! Renovation Server
//!
//! A small HTTP front for the renovation engine, which checks whether the
//! cosmetic repair clauses (Schönheitsreparaturen) of a German residential
//! lease are enforceable. Provides REST API endpoints for:
//!
//! - Clause evaluation
//! - BGH precedent listing
//! - Form options and default facts
//!
//! The server keeps no state between requests; every evaluation is a pure
//! function of the posted facts.

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{
    handle_defaults, handle_evaluate, handle_health, handle_list_conditions,
    handle_list_precedents,
};

/// Command-line arguments for the renovation server
#[derive(Parser, Debug)]
#[command(name = "renovation-server")]
#[command(about = "HTTP API for checking cosmetic repair clauses in German leases")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Build the API router without middleware
pub fn api_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/evaluate", post(handle_evaluate))
        .route("/api/precedents", get(handle_list_precedents))
        .route("/api/conditions", get(handle_list_conditions))
        .route("/api/defaults", get(handle_defaults))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting renovation server on {}:{}", args.host, args.port);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api_router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
