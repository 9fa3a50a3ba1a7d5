//! End-to-end encoder scenarios: build calldata, decode it back through the
//! router ABI and check every field.

use alloy::hex;
use alloy::primitives::aliases::{U160, U24};
use alloy::primitives::{address, Address, U256};
use alloy::sol_types::SolCall;
use dex_interface::contracts::ISwapRouter02::{
    exactInputCall, exactInputSingleCall, exactOutputCall, exactOutputSingleCall,
};
use dex_interface::decoder::decode_swap_calldata;
use dex_interface::router::{packed_path_len, swap_router02_call_parameters, SwapKind};
use dex_interface::{EncodedCall, Percent, Pool, Route, SwapError, SwapOptions, Token, Trade, TradeType};

const TOKEN_A: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
const TOKEN_B: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
const TOKEN_C: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
const TOKEN_D: Address = address!("dAC17F958D2ee523a2206206994597C13D831ec7");
const RECIPIENT: Address = address!("ABC0000000000000000000000000000000000123");

fn route(fees: &[u32], tokens: &[Address]) -> Route {
    Route::new(
        fees.iter().copied().map(Pool::new).collect(),
        tokens.iter().map(|a| Token::new(1, *a, 18)).collect(),
    )
}

fn options(bps: u32) -> SwapOptions {
    SwapOptions {
        slippage_tolerance: Percent::from_bps(bps),
        recipient: RECIPIENT,
    }
}

fn calldata_bytes(call: &EncodedCall) -> Vec<u8> {
    hex::decode(&call.calldata).unwrap()
}

#[test]
fn single_hop_exact_input_scenario() {
    // 995 quoted out, 0.5% slippage → 995 / 1.005 = 990
    let trade = Trade::new(
        route(&[3000], &[TOKEN_A, TOKEN_B]),
        TradeType::ExactInput,
        U256::from(1000u64),
        U256::from(995u64),
    );

    let call = swap_router02_call_parameters(&trade, &options(50)).unwrap();
    assert_eq!(call.value, "0x0");

    let bytes = calldata_bytes(&call);
    assert_eq!(bytes[..4], exactInputSingleCall::SELECTOR);

    let params = exactInputSingleCall::abi_decode(&bytes).unwrap().params;
    assert_eq!(params.tokenIn, TOKEN_A);
    assert_eq!(params.tokenOut, TOKEN_B);
    assert_eq!(params.fee, U24::from(3000u32));
    assert_eq!(params.recipient, RECIPIENT);
    assert_eq!(params.amountIn, U256::from(1000u64));
    assert_eq!(params.amountOutMinimum, U256::from(990u64));
    assert_eq!(params.sqrtPriceLimitX96, U160::ZERO);
}

#[test]
fn single_hop_exact_output() {
    let trade = Trade::new(
        route(&[500], &[TOKEN_A, TOKEN_B]),
        TradeType::ExactOutput,
        U256::from(2000u64),
        U256::from(1500u64),
    );

    let call = swap_router02_call_parameters(&trade, &options(100)).unwrap();
    let bytes = calldata_bytes(&call);
    assert_eq!(bytes[..4], exactOutputSingleCall::SELECTOR);

    let params = exactOutputSingleCall::abi_decode(&bytes).unwrap().params;
    assert_eq!(params.tokenIn, TOKEN_A);
    assert_eq!(params.tokenOut, TOKEN_B);
    assert_eq!(params.fee, U24::from(500u32));
    assert_eq!(params.amountOut, U256::from(1500u64));
    // 2000 * 1.01
    assert_eq!(params.amountInMaximum, U256::from(2020u64));
    assert_eq!(params.sqrtPriceLimitX96, U160::ZERO);
}

#[test]
fn multi_hop_exact_output_scenario() {
    let trade = Trade::new(
        route(&[500, 3000], &[TOKEN_A, TOKEN_B, TOKEN_C]),
        TradeType::ExactOutput,
        U256::from(10_000u64),
        U256::from(5_000u64),
    );

    let call = swap_router02_call_parameters(&trade, &options(50)).unwrap();
    assert_eq!(call.value, "0x0");

    let bytes = calldata_bytes(&call);
    assert_eq!(bytes[..4], exactOutputCall::SELECTOR);

    let params = exactOutputCall::abi_decode(&bytes).unwrap().params;
    assert_eq!(params.recipient, RECIPIENT);
    assert_eq!(params.amountOut, U256::from(5_000u64));
    assert_eq!(params.amountInMaximum, U256::from(10_050u64));

    let mut expected = Vec::new();
    expected.extend_from_slice(TOKEN_A.as_slice());
    expected.extend_from_slice(&[0x00, 0x01, 0xf4]);
    expected.extend_from_slice(TOKEN_B.as_slice());
    expected.extend_from_slice(&[0x00, 0x0b, 0xb8]);
    expected.extend_from_slice(TOKEN_C.as_slice());
    assert_eq!(params.path.len(), 66);
    assert_eq!(params.path.to_vec(), expected);
}

#[test]
fn two_hop_path_is_66_bytes() {
    // A -> B -> C: three tokens, two fees
    let trade = Trade::new(
        route(&[500, 3000], &[TOKEN_A, TOKEN_B, TOKEN_C]),
        TradeType::ExactInput,
        U256::from(1u64),
        U256::from(1u64),
    );
    let bytes = calldata_bytes(&swap_router02_call_parameters(&trade, &options(0)).unwrap());
    let params = exactInputCall::abi_decode(&bytes).unwrap().params;
    assert_eq!(params.path.len(), 20 * 3 + 3 * 2);
}

#[test]
fn multi_hop_path_length_formula() {
    let tokens = [TOKEN_A, TOKEN_B, TOKEN_C, TOKEN_D];
    let fees = [100, 500, 3000];

    for hops in 2..=3 {
        let trade = Trade::new(
            route(&fees[..hops], &tokens[..=hops]),
            TradeType::ExactInput,
            U256::from(1_000_000u64),
            U256::from(999_000u64),
        );
        let bytes = calldata_bytes(&swap_router02_call_parameters(&trade, &options(30)).unwrap());
        let params = exactInputCall::abi_decode(&bytes).unwrap().params;

        assert_eq!(params.path.len(), 20 * (hops + 1) + 3 * hops);
        assert_eq!(params.path.len(), packed_path_len(hops));
    }
}

#[test]
fn hop_count_selects_call_family() {
    let single = route(&[3000], &[TOKEN_A, TOKEN_B]);
    let multi = route(&[3000, 500], &[TOKEN_A, TOKEN_B, TOKEN_C]);

    for trade_type in [TradeType::ExactInput, TradeType::ExactOutput] {
        let one = Trade::new(single.clone(), trade_type, U256::from(5u64), U256::from(5u64));
        let many = Trade::new(multi.clone(), trade_type, U256::from(5u64), U256::from(5u64));

        let one = decode_swap_calldata(&calldata_bytes(
            &swap_router02_call_parameters(&one, &options(10)).unwrap(),
        ))
        .unwrap();
        let many = decode_swap_calldata(&calldata_bytes(
            &swap_router02_call_parameters(&many, &options(10)).unwrap(),
        ))
        .unwrap();

        assert!(one.kind.is_single_hop());
        assert!(one.path.is_none());
        assert!(!many.kind.is_single_hop());
        assert!(many.path.is_some());
        assert_eq!(one.kind.trade_type(), trade_type);
        assert_eq!(many.kind.trade_type(), trade_type);
    }
}

#[test]
fn encoding_is_deterministic() {
    let trade = Trade::new(
        route(&[500, 3000], &[TOKEN_A, TOKEN_B, TOKEN_C]),
        TradeType::ExactInput,
        U256::from(123_456_789u64),
        U256::from(987_654u64),
    );
    let opts = options(75);

    let first = swap_router02_call_parameters(&trade, &opts).unwrap();
    let second = swap_router02_call_parameters(&trade, &opts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn decoder_recovers_built_call() {
    let trade = Trade::new(
        route(&[500, 10_000], &[TOKEN_A, TOKEN_C, TOKEN_D]),
        TradeType::ExactInput,
        U256::from(5_000u64),
        U256::from(4_000u64),
    );
    let call = swap_router02_call_parameters(&trade, &options(100)).unwrap();
    let decoded = decode_swap_calldata(&calldata_bytes(&call)).unwrap();

    assert_eq!(decoded.kind, SwapKind::MultiHopExactIn);
    assert_eq!(decoded.token_in, TOKEN_A);
    assert_eq!(decoded.token_out, TOKEN_D);
    assert_eq!(decoded.fees, vec![500, 10_000]);
    assert_eq!(decoded.recipient, RECIPIENT);
    assert_eq!(decoded.amount_in, U256::from(5_000u64));
    // 4000 / 1.01 = 3960.39
    assert_eq!(decoded.amount_out, U256::from(3_960u64));
}

#[test]
fn router02_records_have_no_deadline() {
    // SwapRouter (v1) signatures carried a uint256 deadline after recipient
    assert!(!exactInputSingleCall::SIGNATURE.contains("address,uint256,uint256,uint256"));
    assert_eq!(exactInputCall::SIGNATURE, "exactInput((bytes,address,uint256,uint256))");
    assert_eq!(exactOutputCall::SIGNATURE, "exactOutput((bytes,address,uint256,uint256))");
    assert_eq!(
        exactOutputSingleCall::SIGNATURE,
        "exactOutputSingle((address,address,uint24,address,uint256,uint256,uint160))"
    );
}

#[test]
fn invalid_routes_rejected() {
    let empty = Trade::new(
        Route::new(vec![], vec![Token::new(1, TOKEN_A, 18)]),
        TradeType::ExactInput,
        U256::from(1u64),
        U256::from(1u64),
    );
    assert!(matches!(
        swap_router02_call_parameters(&empty, &options(50)),
        Err(SwapError::InvalidRoute(_))
    ));

    let short_path = Trade::new(
        route(&[500, 3000], &[TOKEN_A, TOKEN_B]),
        TradeType::ExactOutput,
        U256::from(1u64),
        U256::from(1u64),
    );
    assert!(matches!(
        swap_router02_call_parameters(&short_path, &options(50)),
        Err(SwapError::InvalidRoute(_))
    ));
}
