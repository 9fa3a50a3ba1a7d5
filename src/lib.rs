//! DEX Interface Utilities
//!
//! Client-side helpers for a DEX web front-end: SwapRouter02 calldata
//! building and inspection, chain metadata, explorer links, wrapped-currency
//! helpers and the static file server that ships the front-end itself.
//!
//! Created: 2026-10-19

pub mod chains;
pub mod config;
pub mod contracts;
pub mod currency;
pub mod decoder;
pub mod error;
pub mod explorer;
pub mod logging;
pub mod router;
pub mod server;
pub mod types;
pub mod wire;

// Re-export commonly used types
pub use chains::{supported_chain_id, ChainInfo, SupportedChainId};
pub use config::ServerConfig;
pub use decoder::{decode_swap_calldata, DecodedSwap};
pub use error::SwapError;
pub use explorer::{get_explorer_link, ExplorerDataType};
pub use router::{encode_route_to_path, swap_router02_call_parameters, SwapKind};
pub use types::{EncodedCall, Percent, Pool, Route, SwapOptions, Token, Trade, TradeType};
