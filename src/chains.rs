//! Supported Chains
//!
//! Static metadata for the networks the front-end can connect to. The five
//! Ethereum networks are the ones the upstream SDK knows natively; BSC
//! testnet is an extension on top of them.
//!
//! Created: 2026-10-19

use alloy::primitives::Address;
use std::collections::HashMap;
use std::fmt;

/// Chain IDs the interface supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u64)]
pub enum SupportedChainId {
    Mainnet = 1,
    Ropsten = 3,
    Rinkeby = 4,
    Goerli = 5,
    Kovan = 42,
    BscTestnet = 97,
}

/// Networks known to the upstream SDK (everything except BSC testnet)
pub const SDK_CHAIN_IDS: [SupportedChainId; 5] = [
    SupportedChainId::Mainnet,
    SupportedChainId::Ropsten,
    SupportedChainId::Kovan,
    SupportedChainId::Rinkeby,
    SupportedChainId::Goerli,
];

pub const ALL_SUPPORTED_CHAIN_IDS: [SupportedChainId; 6] = [
    SupportedChainId::Mainnet,
    SupportedChainId::Ropsten,
    SupportedChainId::Rinkeby,
    SupportedChainId::Goerli,
    SupportedChainId::Kovan,
    SupportedChainId::BscTestnet,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCurrencyInfo {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub name: &'static str,
    pub explorer: &'static str,
    pub label: &'static str,
    pub native_currency: NativeCurrencyInfo,
}

const MAINNET_INFO: ChainInfo = ChainInfo {
    name: "Ethereum Mainnet",
    explorer: "https://etherscan.io",
    label: "Ethereum",
    native_currency: NativeCurrencyInfo { name: "Ether", symbol: "ETH", decimals: 18 },
};

const RINKEBY_INFO: ChainInfo = ChainInfo {
    name: "Rinkeby",
    explorer: "https://rinkeby.etherscan.io",
    label: "Rinkeby",
    native_currency: NativeCurrencyInfo { name: "Rinkeby Ether", symbol: "RIN", decimals: 18 },
};

const ROPSTEN_INFO: ChainInfo = ChainInfo {
    name: "Ropsten",
    explorer: "https://ropsten.etherscan.io",
    label: "Ropsten",
    native_currency: NativeCurrencyInfo { name: "Ropsten Ether", symbol: "ROP", decimals: 18 },
};

const KOVAN_INFO: ChainInfo = ChainInfo {
    name: "Kovan",
    explorer: "https://kovan.etherscan.io",
    label: "Kovan",
    native_currency: NativeCurrencyInfo { name: "Kovan Ether", symbol: "KOV", decimals: 18 },
};

const GOERLI_INFO: ChainInfo = ChainInfo {
    name: "Görli",
    explorer: "https://goerli.etherscan.io",
    label: "Görli",
    native_currency: NativeCurrencyInfo { name: "Görli Ether", symbol: "GOR", decimals: 18 },
};

const BSC_TESTNET_INFO: ChainInfo = ChainInfo {
    name: "BSC Testnet",
    explorer: "https://testnet.bscscan.com",
    label: "BSC Testnet",
    native_currency: NativeCurrencyInfo { name: "Binance Coin", symbol: "BNB", decimals: 18 },
};

impl SupportedChainId {
    pub fn id(&self) -> u64 {
        *self as u64
    }

    pub fn info(&self) -> &'static ChainInfo {
        match self {
            SupportedChainId::Mainnet => &MAINNET_INFO,
            SupportedChainId::Ropsten => &ROPSTEN_INFO,
            SupportedChainId::Rinkeby => &RINKEBY_INFO,
            SupportedChainId::Goerli => &GOERLI_INFO,
            SupportedChainId::Kovan => &KOVAN_INFO,
            SupportedChainId::BscTestnet => &BSC_TESTNET_INFO,
        }
    }

    /// True for the Ethereum networks the upstream SDK ships tables for
    pub fn is_sdk_chain(&self) -> bool {
        !matches!(self, SupportedChainId::BscTestnet)
    }
}

impl TryFrom<u64> for SupportedChainId {
    type Error = u64;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        ALL_SUPPORTED_CHAIN_IDS
            .iter()
            .copied()
            .find(|c| c.id() == chain_id)
            .ok_or(chain_id)
    }
}

impl fmt::Display for SupportedChainId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.info().label)
    }
}

/// Returns the chain if supported, None otherwise
pub fn supported_chain_id(chain_id: u64) -> Option<SupportedChainId> {
    SupportedChainId::try_from(chain_id).ok()
}

/// Metadata lookup by raw chain ID
pub fn chain_info(chain_id: u64) -> Option<&'static ChainInfo> {
    supported_chain_id(chain_id).map(|c| c.info())
}

/// Same address on every SDK chain, with per-chain overrides/additions on top
pub fn construct_same_address_map(
    address: Address,
    additional_networks: &[(u64, Address)],
) -> HashMap<u64, Address> {
    let mut map: HashMap<u64, Address> = SDK_CHAIN_IDS
        .iter()
        .map(|c| (c.id(), address))
        .collect();

    map.extend(additional_networks.iter().copied());
    map
}
