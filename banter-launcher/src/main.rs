mod chat;
mod cli;

use axum::Router;
use backend::{AppState, ModelConfig};
use clap::Parser;
use cli::{Cli, Command, ServeArgs};
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The chat loop owns the terminal; keep its logs quiet unless asked.
    let default_filter = match cli.command {
        Command::Serve(_) => "info",
        Command::Chat(_) => "error",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Chat(args) => chat::run(args).await,
    }
}

async fn serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = ModelConfig {
        api_key: args.api_key.unwrap_or_default(),
        api_base: args.api_base,
        model: args.model,
        ..ModelConfig::default()
    };
    if config.api_key.is_empty() {
        tracing::warn!("No API key set, chat requests will answer 500");
    }
    tracing::info!("Using model {} at {}", config.model, config.api_base);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let router = backend::init(Router::new(), AppState::from_config(config));
    axum::serve(listener, router).await?;
    Ok(())
}
