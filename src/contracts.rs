//! Centralized Contract Definitions
//!
//! Solidity interfaces used by the swap encoder, defined with alloy's `sol!`
//! macro. Only the calldata side is needed here: nothing in this crate talks
//! to a provider, so the interfaces carry no `#[sol(rpc)]` bindings.
//!
//! Created: 2026-10-19

use alloy::sol;

// ── Uniswap V3 SwapRouter02 ──────────────────────────────────────────
//
// SwapRouter02 drops the `deadline` member that the original SwapRouter
// carried in every params struct. Deadlines are enforced through
// `multicall(uint256 deadline, bytes[])` instead, which this crate does not use.

sol! {
    #[sol(all_derives)]
    interface ISwapRouter02 {
        struct ExactInputSingleParams {
            address tokenIn;
            address tokenOut;
            uint24 fee;
            address recipient;
            uint256 amountIn;
            uint256 amountOutMinimum;
            uint160 sqrtPriceLimitX96;
        }

        struct ExactOutputSingleParams {
            address tokenIn;
            address tokenOut;
            uint24 fee;
            address recipient;
            uint256 amountOut;
            uint256 amountInMaximum;
            uint160 sqrtPriceLimitX96;
        }

        struct ExactInputParams {
            bytes path;
            address recipient;
            uint256 amountIn;
            uint256 amountOutMinimum;
        }

        struct ExactOutputParams {
            bytes path;
            address recipient;
            uint256 amountOut;
            uint256 amountInMaximum;
        }

        function exactInputSingle(ExactInputSingleParams calldata params) external payable returns (uint256 amountOut);
        function exactOutputSingle(ExactOutputSingleParams calldata params) external payable returns (uint256 amountIn);
        function exactInput(ExactInputParams calldata params) external payable returns (uint256 amountOut);
        function exactOutput(ExactOutputParams calldata params) external payable returns (uint256 amountIn);
    }
}
