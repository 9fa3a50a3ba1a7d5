//! DEX Interface static server
//!
//! Serves the built front-end and falls back to index.html for every
//! unmatched route. Settings come from .env / environment; CLI flags win.
//!
//! Usage:
//!   PORT=3000 STATIC_DIR=build cargo run --bin dex-interface
//!
//! Created: 2026-10-19

use anyhow::Result;
use clap::Parser;
use dex_interface::config::{ConfigOverrides, ServerConfig};
use dex_interface::logging::init_logging;
use dex_interface::server::run_server;
use std::path::PathBuf;
use tracing::info;

/// Static file server for the DEX interface
#[derive(Parser)]
#[command(name = "dex-interface")]
struct Args {
    /// Directory holding the built front-end (overrides STATIC_DIR)
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Listening port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging("info", args.json_logs);

    let config = ServerConfig::from_env(ConfigOverrides {
        port: args.port,
        static_dir: args.static_dir,
    })?;

    info!("Configuration loaded: {}", config.socket_addr());

    run_server(config).await
}
