//! Block explorer links

use crate::chains::SupportedChainId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplorerDataType {
    Transaction,
    Token,
    Address,
    Block,
}

impl fmt::Display for ExplorerDataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExplorerDataType::Transaction => write!(f, "transaction"),
            ExplorerDataType::Token => write!(f, "token"),
            ExplorerDataType::Address => write!(f, "address"),
            ExplorerDataType::Block => write!(f, "block"),
        }
    }
}

/// Etherscan subdomain per chain; mainnet has none
fn etherscan_prefix(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        1 => Some(""),
        3 => Some("ropsten."),
        4 => Some("rinkeby."),
        5 => Some("goerli."),
        42 => Some("kovan."),
        _ => None,
    }
}

fn bsc_url(chain_id: u64) -> Option<&'static str> {
    match SupportedChainId::try_from(chain_id) {
        Ok(SupportedChainId::BscTestnet) => Some("https://testnet.bscscan.com"),
        _ => None,
    }
}

/// Explorer base URL for a chain. Unknown chains get mainnet etherscan.
pub fn explorer_base_url(chain_id: u64) -> String {
    match bsc_url(chain_id) {
        Some(url) => url.to_string(),
        None => format!(
            "https://{}etherscan.io",
            etherscan_prefix(chain_id).unwrap_or("")
        ),
    }
}

/// Explorer link for `data` (tx hash, token, address or block number) on `chain_id`
pub fn get_explorer_link(chain_id: u64, data: &str, kind: ExplorerDataType) -> String {
    let prefix = explorer_base_url(chain_id);

    match kind {
        ExplorerDataType::Transaction => format!("{}/tx/{}", prefix, data),
        ExplorerDataType::Token => format!("{}/token/{}", prefix, data),
        ExplorerDataType::Block => format!("{}/block/{}", prefix, data),
        ExplorerDataType::Address => format!("{}/address/{}", prefix, data),
    }
}
