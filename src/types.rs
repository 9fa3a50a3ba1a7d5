//! Core trade data structures
//!
//! Immutable inputs to the swap encoder: tokens, fee-tier pools, routes and
//! already-quoted trades. Amounts are raw integer token units (no decimals
//! applied). Quoting and routing happen elsewhere; a `Trade` only carries
//! their result plus the slippage-bound arithmetic the router needs.

use crate::error::{Result, SwapError};
use alloy::primitives::{Address, U256, U512};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest fee the router accepts (uint24)
pub const MAX_FEE: u32 = 0x00ff_ffff;

/// ERC-20 token on a specific chain
#[derive(Debug, Clone)]
pub struct Token {
    pub chain_id: u64,
    pub address: Address,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl Token {
    pub fn new(chain_id: u64, address: Address, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    pub fn with_symbol(mut self, symbol: &str, name: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self.name = Some(name.to_string());
        self
    }
}

// Identity is (chain, address); metadata is not compared.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{} ({})", symbol, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

/// Concentrated-liquidity pool, identified on a route by its fee tier.
/// The two tokens it connects come from the route's token path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pool {
    /// Fee in hundredths of a basis point (3000 = 0.30%)
    pub fee: u32,
}

impl Pool {
    pub fn new(fee: u32) -> Self {
        Self { fee }
    }
}

/// Ordered chain of pools. `pools[i]` connects `token_path[i]` to `token_path[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pools: Vec<Pool>,
    pub token_path: Vec<Token>,
}

impl Route {
    /// Build a route without checking it. `validate` runs before encoding.
    pub fn new(pools: Vec<Pool>, token_path: Vec<Token>) -> Self {
        Self { pools, token_path }
    }

    pub fn is_single_hop(&self) -> bool {
        self.pools.len() == 1
    }

    /// Check the structural invariants the router relies on
    pub fn validate(&self) -> Result<()> {
        if self.pools.is_empty() {
            return Err(SwapError::InvalidRoute("route has no pools".to_string()));
        }

        if self.token_path.len() != self.pools.len() + 1 {
            return Err(SwapError::InvalidRoute(format!(
                "token path has {} tokens, expected {} for {} pools",
                self.token_path.len(),
                self.pools.len() + 1,
                self.pools.len()
            )));
        }

        if let Some(pool) = self.pools.iter().find(|p| p.fee > MAX_FEE) {
            return Err(SwapError::InvalidRoute(format!(
                "fee {} does not fit in uint24",
                pool.fee
            )));
        }

        let chain_id = self.token_path[0].chain_id;
        if self.token_path.iter().any(|t| t.chain_id != chain_id) {
            return Err(SwapError::InvalidRoute(
                "tokens span more than one chain".to_string(),
            ));
        }

        Ok(())
    }
}

/// Which side of the trade the user fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    /// Input amount is exact; output is bounded below by slippage
    ExactInput,
    /// Output amount is exact; input is bounded above by slippage
    ExactOutput,
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TradeType::ExactInput => write!(f, "EXACT_INPUT"),
            TradeType::ExactOutput => write!(f, "EXACT_OUTPUT"),
        }
    }
}

/// Non-negative ratio `numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent {
    pub numerator: U256,
    pub denominator: U256,
}

impl Percent {
    pub const fn new(numerator: U256, denominator: U256) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// 50 bps → 0.5%
    pub fn from_bps(bps: u32) -> Self {
        Self::new(U256::from(bps), U256::from(10_000u64))
    }

    /// Decimal percentage, e.g. `0.5` → 0.5%. Exact: `0.125` becomes 125/100000.
    pub fn from_decimal_percent(percent: Decimal) -> Result<Self> {
        if percent < Decimal::ZERO {
            return Err(SwapError::InvalidSlippage(format!(
                "negative slippage {}%",
                percent
            )));
        }

        let numerator = U256::from(percent.mantissa().unsigned_abs());
        let denominator = U256::from(100u64) * U256::from(10u64).pow(U256::from(percent.scale()));

        Ok(Self::new(numerator, denominator))
    }

    /// Router-facing tolerances must be a valid fraction below 100%
    pub fn validate_tolerance(&self) -> Result<()> {
        if self.denominator.is_zero() {
            return Err(SwapError::InvalidSlippage("zero denominator".to_string()));
        }
        if self.numerator >= self.denominator {
            return Err(SwapError::InvalidSlippage(format!(
                "{}/{} is not below 100%",
                self.numerator, self.denominator
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Already-quoted trade along a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    pub route: Route,
    pub trade_type: TradeType,
    pub input_amount: U256,
    pub output_amount: U256,
}

impl Trade {
    pub fn new(route: Route, trade_type: TradeType, input_amount: U256, output_amount: U256) -> Self {
        Self {
            route,
            trade_type,
            input_amount,
            output_amount,
        }
    }

    /// Minimum acceptable output: `output / (1 + slippage)` for exact-input
    /// trades, the exact output otherwise. Rounds down.
    pub fn minimum_amount_out(&self, slippage: &Percent) -> Result<U256> {
        match self.trade_type {
            TradeType::ExactOutput => Ok(self.output_amount),
            TradeType::ExactInput => {
                let (num, den) = one_plus(slippage)?;
                // output * den / num, where num/den = 1 + slippage
                mul_div(self.output_amount, den, num, "amountOut")
            }
        }
    }

    /// Maximum acceptable input: `input * (1 + slippage)` for exact-output
    /// trades, the exact input otherwise. Rounds down.
    pub fn maximum_amount_in(&self, slippage: &Percent) -> Result<U256> {
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount),
            TradeType::ExactOutput => {
                let (num, den) = one_plus(slippage)?;
                mul_div(self.input_amount, num, den, "amountIn")
            }
        }
    }
}

/// `1 + p` as (numerator, denominator), widened so the sum cannot wrap
fn one_plus(p: &Percent) -> Result<(U512, U512)> {
    if p.denominator.is_zero() {
        return Err(SwapError::InvalidSlippage("zero denominator".to_string()));
    }
    let den = U512::from(p.denominator);
    Ok((den + U512::from(p.numerator), den))
}

/// `floor(amount * num / den)` in 512 bits; only the final result must fit in 256
fn mul_div(amount: U256, num: U512, den: U512, field: &str) -> Result<U256> {
    let wide = U512::from(amount) * num / den;
    U256::checked_from_uint(wide).ok_or_else(|| SwapError::AmountOverflow(field.to_string()))
}

/// Execution options for a router call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOptions {
    pub slippage_tolerance: Percent,
    pub recipient: Address,
}

/// Router call ready for a transaction's `data` and `value` fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedCall {
    /// 0x-prefixed ABI-encoded call
    pub calldata: String,
    /// 0x-prefixed hex quantity of native coin to attach
    pub value: String,
}
