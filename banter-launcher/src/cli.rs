use backend::{DEFAULT_API_BASE, DEFAULT_MODEL};
use clap::{Args, Parser, Subcommand};
use client::DEFAULT_ENDPOINT;
use shared::models::Personality;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Personality chat with a local banter fallback")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Serve the chat endpoint")]
    Serve(ServeArgs),
    #[command(about = "Chat from the terminal")]
    Chat(ChatArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, env = "BANTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    #[arg(long, env = "BANTER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    #[arg(long, env = "BANTER_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
}

#[derive(Args)]
pub struct ChatArgs {
    #[arg(long, env = "BANTER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    #[arg(long, default_value_t = 7000)]
    pub timeout_ms: u64,
    #[arg(long)]
    pub personality: Option<Personality>,
    /// Where history and theme are kept (defaults to the platform data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    /// Forget the conversation when the session ends
    #[arg(long)]
    pub no_memory: bool,
}
