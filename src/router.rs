//! SwapRouter02 Calldata Builder
//!
//! Turns an already-quoted `Trade` plus `SwapOptions` into the calldata and
//! native value for a SwapRouter02 call. Pure: same inputs, same bytes.
//!
//! Dispatch (hop count × trade type):
//!     1 pool,  EXACT_INPUT  → exactInputSingle
//!     1 pool,  EXACT_OUTPUT → exactOutputSingle
//!     2+ pools, EXACT_INPUT  → exactInput  (packed path)
//!     2+ pools, EXACT_OUTPUT → exactOutput (packed path)
//!
//! None of the SwapRouter02 param structs carry a deadline, and
//! sqrtPriceLimitX96 is always 0 (no price limit; the slippage bound protects
//! the trade). Only ERC-20 → ERC-20 swaps are built, so `value` is always "0x0".
//!
//! Created: 2026-10-19

use crate::contracts::ISwapRouter02::{
    exactInputCall, exactInputSingleCall, exactOutputCall, exactOutputSingleCall,
    ExactInputParams, ExactInputSingleParams, ExactOutputParams, ExactOutputSingleParams,
};
use crate::error::{Result, SwapError};
use crate::types::{EncodedCall, Route, SwapOptions, Trade, TradeType, MAX_FEE};
use alloy::hex;
use alloy::primitives::aliases::{U160, U24};
use alloy::primitives::Bytes;
use alloy::sol_types::SolCall;
use std::fmt;
use tracing::{debug, trace};

/// Native value attached to every router call
pub const ZERO_VALUE: &str = "0x0";

/// Packed path: bytes per token address
pub const ADDR_SIZE: usize = 20;
/// Packed path: bytes per fee (uint24)
pub const FEE_SIZE: usize = 3;

/// The four router entry points, one per (hop count, trade type) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapKind {
    SingleHopExactIn,
    SingleHopExactOut,
    MultiHopExactIn,
    MultiHopExactOut,
}

impl SwapKind {
    /// Assumes a validated route (at least one pool)
    pub fn classify(route: &Route, trade_type: TradeType) -> Self {
        match (route.is_single_hop(), trade_type) {
            (true, TradeType::ExactInput) => SwapKind::SingleHopExactIn,
            (true, TradeType::ExactOutput) => SwapKind::SingleHopExactOut,
            (false, TradeType::ExactInput) => SwapKind::MultiHopExactIn,
            (false, TradeType::ExactOutput) => SwapKind::MultiHopExactOut,
        }
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            SwapKind::SingleHopExactIn => "exactInputSingle",
            SwapKind::SingleHopExactOut => "exactOutputSingle",
            SwapKind::MultiHopExactIn => "exactInput",
            SwapKind::MultiHopExactOut => "exactOutput",
        }
    }

    pub fn selector(&self) -> [u8; 4] {
        match self {
            SwapKind::SingleHopExactIn => exactInputSingleCall::SELECTOR,
            SwapKind::SingleHopExactOut => exactOutputSingleCall::SELECTOR,
            SwapKind::MultiHopExactIn => exactInputCall::SELECTOR,
            SwapKind::MultiHopExactOut => exactOutputCall::SELECTOR,
        }
    }

    pub fn is_single_hop(&self) -> bool {
        matches!(self, SwapKind::SingleHopExactIn | SwapKind::SingleHopExactOut)
    }

    pub fn trade_type(&self) -> TradeType {
        match self {
            SwapKind::SingleHopExactIn | SwapKind::MultiHopExactIn => TradeType::ExactInput,
            SwapKind::SingleHopExactOut | SwapKind::MultiHopExactOut => TradeType::ExactOutput,
        }
    }
}

impl fmt::Display for SwapKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

/// Build SwapRouter02 calldata for `trade`.
///
/// Fails with `InvalidRoute` / `InvalidSlippage` before any encoding happens;
/// no partial result is ever returned.
pub fn swap_router02_call_parameters(trade: &Trade, options: &SwapOptions) -> Result<EncodedCall> {
    trade.route.validate()?;
    options.slippage_tolerance.validate_tolerance()?;

    let kind = SwapKind::classify(&trade.route, trade.trade_type);
    debug!(
        function = kind.function_name(),
        hops = trade.route.pools.len(),
        slippage = %options.slippage_tolerance,
        "Encoding SwapRouter02 call"
    );

    let calldata = encode_call(kind, trade, options)?;

    Ok(EncodedCall {
        calldata: hex::encode_prefixed(calldata),
        value: ZERO_VALUE.to_string(),
    })
}

fn encode_call(kind: SwapKind, trade: &Trade, options: &SwapOptions) -> Result<Vec<u8>> {
    let route = &trade.route;
    let slippage = &options.slippage_tolerance;
    let recipient = options.recipient;

    let calldata = match kind {
        SwapKind::SingleHopExactIn => {
            let params = ExactInputSingleParams {
                tokenIn: route.token_path[0].address,
                tokenOut: route.token_path[1].address,
                fee: fee_to_u24(route.pools[0].fee)?,
                recipient,
                amountIn: trade.input_amount,
                amountOutMinimum: trade.minimum_amount_out(slippage)?,
                sqrtPriceLimitX96: U160::ZERO,
            };
            exactInputSingleCall { params }.abi_encode()
        }
        SwapKind::SingleHopExactOut => {
            let params = ExactOutputSingleParams {
                tokenIn: route.token_path[0].address,
                tokenOut: route.token_path[1].address,
                fee: fee_to_u24(route.pools[0].fee)?,
                recipient,
                amountOut: trade.output_amount,
                amountInMaximum: trade.maximum_amount_in(slippage)?,
                sqrtPriceLimitX96: U160::ZERO,
            };
            exactOutputSingleCall { params }.abi_encode()
        }
        SwapKind::MultiHopExactIn => {
            let params = ExactInputParams {
                path: encode_route_to_path(route, false)?,
                recipient,
                amountIn: trade.input_amount,
                amountOutMinimum: trade.minimum_amount_out(slippage)?,
            };
            exactInputCall { params }.abi_encode()
        }
        SwapKind::MultiHopExactOut => {
            let params = ExactOutputParams {
                path: encode_route_to_path(route, true)?,
                recipient,
                amountOut: trade.output_amount,
                amountInMaximum: trade.maximum_amount_in(slippage)?,
            };
            exactOutputCall { params }.abi_encode()
        }
    };

    Ok(calldata)
}

/// Tight-pack the route: token(20) | fee(3) | token(20) [| fee(3) | token(20) ...]
///
/// `exact_output` does not change the layout: tokens are always written in
/// route order, input first. SwapRouter02 reads exactOutput paths starting
/// from tokenOut, so a router-side mismatch here shows up as a reverted swap,
/// not as an encoding error.
pub fn encode_route_to_path(route: &Route, exact_output: bool) -> Result<Bytes> {
    route.validate()?;

    let mut path = Vec::with_capacity(packed_path_len(route.pools.len()));
    path.extend_from_slice(route.token_path[0].address.as_slice());

    for (pool, token) in route.pools.iter().zip(&route.token_path[1..]) {
        path.extend_from_slice(&fee_bytes(pool.fee));
        path.extend_from_slice(token.address.as_slice());
    }

    trace!(
        hops = route.pools.len(),
        exact_output,
        len = path.len(),
        "Packed route path"
    );

    Ok(Bytes::from(path))
}

/// Byte length of a packed path with `hops` pools
pub const fn packed_path_len(hops: usize) -> usize {
    ADDR_SIZE * (hops + 1) + FEE_SIZE * hops
}

/// Low three bytes of the fee, big-endian
fn fee_bytes(fee: u32) -> [u8; FEE_SIZE] {
    let be = fee.to_be_bytes();
    [be[1], be[2], be[3]]
}

fn fee_to_u24(fee: u32) -> Result<U24> {
    if fee > MAX_FEE {
        return Err(SwapError::Encoding(format!("fee {} does not fit in uint24", fee)));
    }
    Ok(U24::from_be_slice(&fee_bytes(fee)))
}
