mod assembly;
mod cli;
mod config;
mod errors;
mod layout;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assembly::store::DirectoryStore;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::layout::default_page_style;
use crate::render::OutputDirs;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Command::Serve { port } => serve(config, port).await,
        Command::Generate(args) => {
            let path = cli::run_generate(&config, args)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn serve(config: Config, port: Option<u16>) -> Result<()> {
    info!("Starting Petition API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Fragments from {}, output to {}",
        config.blocks_dir.display(),
        config.output_dir.display()
    );

    let state = AppState {
        store: Arc::new(DirectoryStore::new(&config.blocks_dir)),
        destination: Arc::new(
            OutputDirs::new(&config.output_dir).with_fallback(&config.fallback_dir),
        ),
        page_style: default_page_style(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", port.unwrap_or(config.port)).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
