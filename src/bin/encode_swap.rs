//! encode-swap
//!
//! Build or inspect SwapRouter02 calldata from the command line.
//!
//! Usage:
//!   encode-swap encode --trade trade.json      # or --trade - for stdin
//!   encode-swap decode --calldata 0x04e45aaf...
//!
//! Output is JSON on stdout; logs go to stderr.
//!
//! Created: 2026-10-19

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dex_interface::logging::init_logging;
use dex_interface::wire::{decode_calldata_hex, encode_trade_request, TradeRequest};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "encode-swap")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a quoted trade (JSON) into router calldata
    Encode {
        /// Trade request file, or "-" for stdin
        #[arg(short, long)]
        trade: PathBuf,
    },
    /// Decode SwapRouter02 calldata
    Decode {
        /// 0x-prefixed calldata
        #[arg(short, long)]
        calldata: String,
    },
}

fn main() -> Result<()> {
    init_logging("warn", false);

    let args = Args::parse();

    match args.command {
        Command::Encode { trade } => encode(&trade),
        Command::Decode { calldata } => decode(&calldata),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read trade from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trade file: {}", path.display()))
}

fn encode(path: &Path) -> Result<()> {
    let raw = read_input(path)?;
    let request: TradeRequest =
        serde_json::from_str(&raw).context("Failed to parse trade request JSON")?;
    debug!(
        "Trade: {} hops, {} → {}",
        request.fees.len(),
        request.input_amount,
        request.output_amount
    );

    let call = encode_trade_request(&request)?;
    info!(
        "Encoded {} call, {} bytes",
        request.trade_type,
        call.calldata.len().saturating_sub(2) / 2
    );

    println!("{}", serde_json::to_string_pretty(&call)?);
    Ok(())
}

fn decode(calldata: &str) -> Result<()> {
    let response = decode_calldata_hex(calldata)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
