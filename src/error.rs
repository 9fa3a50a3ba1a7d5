//! Swap encoding errors
//!
//! Every failure is surfaced to the caller immediately. The encoder is pure,
//! so none of these are transient and none are retried.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// Malformed route: empty, inconsistent token path, or a fee that does
    /// not fit the router's uint24.
    #[error("invalid route: {0}")]
    InvalidRoute(String),

    /// Slippage tolerance with a zero denominator or a ratio of 100% or more.
    #[error("invalid slippage tolerance: {0}")]
    InvalidSlippage(String),

    /// Slippage-bounded amount does not fit in 256 bits.
    #[error("amount overflow while applying slippage to {0}")]
    AmountOverflow(String),

    /// ABI layer rejected the parameters. Not expected for a validated trade.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A wire request carried an unparseable address, amount or percentage.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, SwapError>;
