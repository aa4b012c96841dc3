use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use fingge_api::config::AppConfig;
use fingge_api::state::AppState;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "fingge-api", version, about = "Keyword question matching and code execution API")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override server.host
    #[arg(long)]
    host: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration first to get logging settings
    let mut config =
        AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let state = web::Data::new(
        AppState::from_config(&config).context("Failed to initialize application state")?,
    );
    info!(
        questions = state.store.len(),
        threshold = state.threshold,
        interpreter = %config.execution.interpreter,
        "Application state ready"
    );
    warn!("Submitted code runs unsandboxed with the server's privileges");

    let bind_addr = config.bind_addr();
    let allowed_origins = config.cors.allowed_origins.clone();
    info!("Starting fingge-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(fingge_api::cors(&allowed_origins))
            .configure(|cfg| fingge_api::configure(cfg, state.clone()))
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await?;

    Ok(())
}
