//! SwapRouter02 Calldata Decoder
//!
//! Purpose:
//!     Inverse of the router builder: turns SwapRouter02 calldata back into
//!     its fields for logging and for checking what a built call will do.
//!
//! Supported Function Selectors (SwapRouter02, no deadline):
//!     0x04e45aaf — exactInputSingle(ExactInputSingleParams)
//!     0x5023b4df — exactOutputSingle(ExactOutputSingleParams)
//!     0xb858183f — exactInput(ExactInputParams)
//!     0x09b81346 — exactOutput(ExactOutputParams)
//!
//! Created: 2026-10-19

use crate::contracts::ISwapRouter02::{
    exactInputCall, exactInputSingleCall, exactOutputCall, exactOutputSingleCall,
};
use crate::router::{SwapKind, ADDR_SIZE, FEE_SIZE};
use alloy::primitives::aliases::U160;
use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use tracing::trace;

/// Fields recovered from a router call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSwap {
    pub kind: SwapKind,
    pub token_in: Address,
    pub token_out: Address,
    /// One fee per hop, in path order
    pub fees: Vec<u32>,
    pub recipient: Address,
    /// amountIn (exact input) or amountInMaximum (exact output)
    pub amount_in: U256,
    /// amountOutMinimum (exact input) or amountOut (exact output)
    pub amount_out: U256,
    /// Single-hop calls only
    pub sqrt_price_limit_x96: Option<U160>,
    /// Multi-hop calls only
    pub path: Option<Bytes>,
}

/// Decode SwapRouter02 calldata.
/// Returns None if the selector is unknown or decoding fails.
pub fn decode_swap_calldata(input: &[u8]) -> Option<DecodedSwap> {
    if input.len() < 4 {
        return None;
    }

    let selector: [u8; 4] = input[..4].try_into().ok()?;

    if selector == exactInputSingleCall::SELECTOR {
        decode_exact_input_single(input)
    } else if selector == exactOutputSingleCall::SELECTOR {
        decode_exact_output_single(input)
    } else if selector == exactInputCall::SELECTOR {
        decode_exact_input(input)
    } else if selector == exactOutputCall::SELECTOR {
        decode_exact_output(input)
    } else {
        trace!("Unknown selector: {}", selector_hex(input));
        None
    }
}

/// Return the 4-byte selector as a hex string for logging
pub fn selector_hex(input: &[u8]) -> String {
    if input.len() < 4 {
        return "0x????".to_string();
    }
    format!("0x{:02x}{:02x}{:02x}{:02x}", input[0], input[1], input[2], input[3])
}

fn decode_exact_input_single(input: &[u8]) -> Option<DecodedSwap> {
    let params = exactInputSingleCall::abi_decode(input).ok()?.params;

    Some(DecodedSwap {
        kind: SwapKind::SingleHopExactIn,
        token_in: params.tokenIn,
        token_out: params.tokenOut,
        fees: vec![params.fee.to::<u32>()],
        recipient: params.recipient,
        amount_in: params.amountIn,
        amount_out: params.amountOutMinimum,
        sqrt_price_limit_x96: Some(params.sqrtPriceLimitX96),
        path: None,
    })
}

fn decode_exact_output_single(input: &[u8]) -> Option<DecodedSwap> {
    let params = exactOutputSingleCall::abi_decode(input).ok()?.params;

    Some(DecodedSwap {
        kind: SwapKind::SingleHopExactOut,
        token_in: params.tokenIn,
        token_out: params.tokenOut,
        fees: vec![params.fee.to::<u32>()],
        recipient: params.recipient,
        amount_in: params.amountInMaximum,
        amount_out: params.amountOut,
        sqrt_price_limit_x96: Some(params.sqrtPriceLimitX96),
        path: None,
    })
}

fn decode_exact_input(input: &[u8]) -> Option<DecodedSwap> {
    let params = exactInputCall::abi_decode(input).ok()?.params;
    let (tokens, fees) = decode_path(&params.path)?;

    Some(DecodedSwap {
        kind: SwapKind::MultiHopExactIn,
        token_in: *tokens.first()?,
        token_out: *tokens.last()?,
        fees,
        recipient: params.recipient,
        amount_in: params.amountIn,
        amount_out: params.amountOutMinimum,
        sqrt_price_limit_x96: None,
        path: Some(params.path),
    })
}

/// Paths are read in forward order, matching what the builder writes
fn decode_exact_output(input: &[u8]) -> Option<DecodedSwap> {
    let params = exactOutputCall::abi_decode(input).ok()?.params;
    let (tokens, fees) = decode_path(&params.path)?;

    Some(DecodedSwap {
        kind: SwapKind::MultiHopExactOut,
        token_in: *tokens.first()?,
        token_out: *tokens.last()?,
        fees,
        recipient: params.recipient,
        amount_in: params.amountInMaximum,
        amount_out: params.amountOut,
        sqrt_price_limit_x96: None,
        path: Some(params.path),
    })
}

/// Unpack token(20) | fee(3) | token(20) [| fee(3) | token(20) ...]
pub fn decode_path(path: &[u8]) -> Option<(Vec<Address>, Vec<u32>)> {
    // Minimum path: token(20) + fee(3) + token(20) = 43 bytes
    let hop = ADDR_SIZE + FEE_SIZE;
    if path.len() < ADDR_SIZE + hop || (path.len() - ADDR_SIZE) % hop != 0 {
        return None;
    }

    let hops = (path.len() - ADDR_SIZE) / hop;
    let mut tokens = Vec::with_capacity(hops + 1);
    let mut fees = Vec::with_capacity(hops);

    tokens.push(Address::from_slice(&path[..ADDR_SIZE]));
    for i in 0..hops {
        let start = ADDR_SIZE + i * hop;
        let fee = u32::from(path[start]) << 16
            | u32::from(path[start + 1]) << 8
            | u32::from(path[start + 2]);
        fees.push(fee);
        tokens.push(Address::from_slice(&path[start + FEE_SIZE..start + hop]));
    }

    Some((tokens, fees))
}
