//! Native ⇄ wrapped currency helpers
//!
//! Routers only trade ERC-20s, so the native coin is swapped through its
//! wrapped token (WETH9 on the Ethereum networks, WBNB on BSC testnet).

use crate::chains::{supported_chain_id, SupportedChainId};
use crate::types::Token;
use alloy::primitives::{address, U256};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Wrapped native token per chain. Read-only after first use.
pub static WRAPPED_NATIVE: Lazy<HashMap<u64, Token>> = Lazy::new(|| {
    let weth = |chain: SupportedChainId, addr| {
        (chain.id(), Token::new(chain.id(), addr, 18).with_symbol("WETH", "Wrapped Ether"))
    };

    HashMap::from([
        weth(SupportedChainId::Mainnet, address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")),
        weth(SupportedChainId::Ropsten, address!("c778417E063141139Fce010982780140Aa0cD5Ab")),
        weth(SupportedChainId::Rinkeby, address!("c778417E063141139Fce010982780140Aa0cD5Ab")),
        weth(SupportedChainId::Goerli, address!("B4FBF271143F4FBf7B91A5ded31805e42b2208d6")),
        weth(SupportedChainId::Kovan, address!("d0A1E359811322d97991E03f863a0C30C2cF029C")),
        (
            SupportedChainId::BscTestnet.id(),
            Token::new(
                SupportedChainId::BscTestnet.id(),
                address!("ae13d989daC2f0dEbFf460aC112a837C89BAa7cd"),
                18,
            )
            .with_symbol("WBNB", "Wrapped BNB"),
        ),
    ])
});

/// Either the chain's native coin or an ERC-20
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Currency {
    Native { chain_id: u64 },
    Token(Token),
}

impl Currency {
    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native { .. })
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Currency::Native { chain_id } => *chain_id,
            Currency::Token(token) => token.chain_id,
        }
    }

    /// Native symbol from the chain table, or the token's own symbol
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Native { chain_id } => {
                supported_chain_id(*chain_id).map(|c| c.info().native_currency.symbol)
            }
            Currency::Token(token) => token.symbol.as_deref(),
        }
    }
}

/// Raw amount of a currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount<C> {
    pub currency: C,
    pub quotient: U256,
}

pub fn wrapped_native(chain_id: u64) -> Option<Token> {
    WRAPPED_NATIVE.get(&chain_id).cloned()
}

/// ERC-20 form of `currency` on `chain_id`. None if either is missing, the
/// token lives on another chain, or the chain has no wrapped native token.
pub fn wrapped_currency(currency: Option<&Currency>, chain_id: Option<u64>) -> Option<Token> {
    let (currency, chain_id) = (currency?, chain_id?);

    match currency {
        Currency::Token(token) if token.chain_id == chain_id => Some(token.clone()),
        Currency::Token(_) => None,
        Currency::Native { .. } => wrapped_native(chain_id),
    }
}

pub fn wrapped_currency_amount(
    amount: Option<&CurrencyAmount<Currency>>,
    chain_id: Option<u64>,
) -> Option<CurrencyAmount<Token>> {
    let amount = amount?;
    let token = wrapped_currency(Some(&amount.currency), chain_id)?;

    Some(CurrencyAmount {
        currency: token,
        quotient: amount.quotient,
    })
}

/// WETH9 on an SDK chain shows as the native coin; everything else stays a
/// token. BSC testnet's WBNB is deliberately left wrapped.
pub fn unwrapped_token(token: &Token) -> Currency {
    let is_sdk_weth = supported_chain_id(token.chain_id)
        .filter(|c| c.is_sdk_chain())
        .and_then(|c| WRAPPED_NATIVE.get(&c.id()))
        .is_some_and(|weth| weth == token);

    if is_sdk_weth {
        Currency::Native {
            chain_id: token.chain_id,
        }
    } else {
        Currency::Token(token.clone())
    }
}
