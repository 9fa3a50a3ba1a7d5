//! JSON wire types for the `encode-swap` CLI
//!
//! Addresses, amounts and the slippage percentage travel as strings and are
//! parsed into the typed trade model here, so a bad field is reported by name.

use crate::decoder::{decode_swap_calldata, selector_hex, DecodedSwap};
use crate::error::{Result, SwapError};
use crate::router::swap_router02_call_parameters;
use crate::types::{EncodedCall, Percent, Pool, Route, SwapOptions, Token, Trade, TradeType};
use alloy::hex;
use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenRequest {
    pub address: String,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    #[serde(default)]
    pub symbol: Option<String>,
}

fn default_decimals() -> u8 { 18 }

/// Already-quoted trade as supplied by the front-end
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TradeRequest {
    pub chain_id: u64,
    pub trade_type: TradeType,
    /// Route tokens, input first
    pub tokens: Vec<TokenRequest>,
    /// One fee tier per hop
    pub fees: Vec<u32>,
    /// Raw units, decimal or 0x-hex
    pub input_amount: String,
    pub output_amount: String,
    /// Percentage, "0.5" = 0.5%
    pub slippage_percent: String,
    pub recipient: String,
}

impl TradeRequest {
    /// Parse every field. Route shape is checked later by the encoder.
    pub fn to_trade(&self) -> Result<(Trade, SwapOptions)> {
        let token_path = self
            .tokens
            .iter()
            .map(|t| {
                let mut token = Token::new(self.chain_id, parse_address("token", &t.address)?, t.decimals);
                token.symbol = t.symbol.clone();
                Ok(token)
            })
            .collect::<Result<Vec<_>>>()?;

        let pools = self.fees.iter().map(|fee| Pool::new(*fee)).collect();

        let trade = Trade::new(
            Route::new(pools, token_path),
            self.trade_type,
            parse_amount("input_amount", &self.input_amount)?,
            parse_amount("output_amount", &self.output_amount)?,
        );

        let slippage = Decimal::from_str(self.slippage_percent.trim()).map_err(|e| {
            SwapError::InvalidRequest(format!(
                "slippage_percent '{}': {}",
                self.slippage_percent, e
            ))
        })?;

        let options = SwapOptions {
            slippage_tolerance: Percent::from_decimal_percent(slippage)?,
            recipient: parse_address("recipient", &self.recipient)?,
        };

        Ok((trade, options))
    }
}

fn parse_address(field: &str, s: &str) -> Result<Address> {
    Address::from_str(s.trim())
        .map_err(|e| SwapError::InvalidRequest(format!("{} '{}': {}", field, s, e)))
}

fn parse_amount(field: &str, s: &str) -> Result<U256> {
    U256::from_str(s.trim())
        .map_err(|e| SwapError::InvalidRequest(format!("{} '{}': {}", field, s, e)))
}

/// Printable form of a decoded router call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecodedSwapResponse {
    pub function: String,
    pub token_in: String,
    pub token_out: String,
    pub fees: Vec<u32>,
    pub recipient: String,
    pub amount_in: String,
    pub amount_out: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqrt_price_limit_x96: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&DecodedSwap> for DecodedSwapResponse {
    fn from(swap: &DecodedSwap) -> Self {
        Self {
            function: swap.kind.function_name().to_string(),
            token_in: swap.token_in.to_string(),
            token_out: swap.token_out.to_string(),
            fees: swap.fees.clone(),
            recipient: swap.recipient.to_string(),
            amount_in: swap.amount_in.to_string(),
            amount_out: swap.amount_out.to_string(),
            sqrt_price_limit_x96: swap.sqrt_price_limit_x96.map(|p| p.to_string()),
            path: swap.path.as_ref().map(hex::encode_prefixed),
        }
    }
}

/// Parse and encode a trade request in one step
pub fn encode_trade_request(request: &TradeRequest) -> Result<EncodedCall> {
    let (trade, options) = request.to_trade()?;
    swap_router02_call_parameters(&trade, &options)
}

/// Decode 0x-prefixed calldata into its printable form
pub fn decode_calldata_hex(calldata: &str) -> Result<DecodedSwapResponse> {
    let bytes = hex::decode(calldata.trim())
        .map_err(|e| SwapError::InvalidRequest(format!("calldata: {}", e)))?;

    let swap = decode_swap_calldata(&bytes).ok_or_else(|| {
        SwapError::InvalidRequest(format!(
            "not a SwapRouter02 swap call (selector {})",
            selector_hex(&bytes)
        ))
    })?;

    Ok(DecodedSwapResponse::from(&swap))
}
