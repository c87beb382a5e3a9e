// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::domain::types::{BridgeToken, DestRequest, FeeConfig, PoolSummary, PoolToken, Query};
use alloy::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    #[sol(rpc)]
    contract SynapseRouter {
        struct SwapQuery {
            address swapAdapter;
            address tokenOut;
            uint256 minAmountOut;
            uint256 deadline;
            bytes rawParams;
        }

        struct BridgeToken {
            string symbol;
            address token;
        }

        struct DestRequest {
            string symbol;
            uint256 amountIn;
        }

        struct PoolToken {
            bool isWeth;
            address token;
        }

        struct Pool {
            address pool;
            address lpToken;
            PoolToken[] tokens;
        }

        function getConnectedBridgeTokens(address tokenOut) external view returns (BridgeToken[] memory tokens);
        function getOriginAmountOut(address tokenIn, string[] memory tokenSymbols, uint256 amountIn) external view returns (SwapQuery[] memory originQueries);
        function getDestinationAmountOut(DestRequest[] memory requests, address tokenOut) external view returns (SwapQuery[] memory destQueries);
        function getAmountOut(address tokenIn, address tokenOut, uint256 amountIn) external view returns (SwapQuery memory query);

        function calculateBridgeFee(address token, uint256 amount) external view returns (uint256 feeAmount);
        // On-chain widths are uint40/uint104/uint112; the return words decode identically as uint256.
        function fee(address token) external view returns (uint256 bridgeFee, uint256 minFee, uint256 maxFee);
        function synapseBridge() external view returns (address);

        function poolTokens(address pool) external view returns (PoolToken[] memory tokens);
        function poolInfo(address pool) external view returns (uint256, address);
        function allPools() external view returns (Pool[] memory pools);
        function calculateAddLiquidity(address pool, uint256[] memory amounts) external view returns (uint256);
        function calculateRemoveLiquidity(address pool, uint256 amount) external view returns (uint256[] memory amountsOut);
        function calculateWithdrawOneToken(address pool, uint256 tokenAmount, uint8 tokenIndex) external view returns (uint256 amountOut);

        function bridge(address to, uint256 chainId, address token, uint256 amount, SwapQuery memory originQuery, SwapQuery memory destQuery) external payable;
        function swap(address to, address token, uint256 amount, SwapQuery memory query) external payable returns (uint256 amountOut);
    }

    #[derive(Debug, PartialEq, Eq)]
    #[sol(rpc)]
    contract SynapseBridge {
        function chainGasAmount() external view returns (uint256);
    }
}

impl From<SynapseRouter::SwapQuery> for Query {
    fn from(q: SynapseRouter::SwapQuery) -> Self {
        Query {
            swap_adapter: q.swapAdapter,
            token_out: q.tokenOut,
            min_amount_out: q.minAmountOut,
            deadline: q.deadline,
            raw_params: q.rawParams,
        }
    }
}

impl From<&Query> for SynapseRouter::SwapQuery {
    fn from(q: &Query) -> Self {
        SynapseRouter::SwapQuery {
            swapAdapter: q.swap_adapter,
            tokenOut: q.token_out,
            minAmountOut: q.min_amount_out,
            deadline: q.deadline,
            rawParams: q.raw_params.clone(),
        }
    }
}

impl From<SynapseRouter::BridgeToken> for BridgeToken {
    fn from(t: SynapseRouter::BridgeToken) -> Self {
        BridgeToken {
            symbol: t.symbol,
            token: t.token,
        }
    }
}

impl From<&DestRequest> for SynapseRouter::DestRequest {
    fn from(r: &DestRequest) -> Self {
        SynapseRouter::DestRequest {
            symbol: r.symbol.clone(),
            amountIn: r.amount_in,
        }
    }
}

impl From<SynapseRouter::PoolToken> for PoolToken {
    fn from(t: SynapseRouter::PoolToken) -> Self {
        PoolToken {
            is_weth: t.isWeth,
            token: t.token,
        }
    }
}

impl From<SynapseRouter::Pool> for PoolSummary {
    fn from(p: SynapseRouter::Pool) -> Self {
        PoolSummary {
            pool_address: p.pool,
            tokens: p.tokens.into_iter().map(PoolToken::from).collect(),
            lp_token: p.lpToken,
        }
    }
}

impl From<SynapseRouter::feeReturn> for FeeConfig {
    fn from(f: SynapseRouter::feeReturn) -> Self {
        FeeConfig {
            bridge_fee: f.bridgeFee,
            min_fee: f.minFee,
            max_fee: f.maxFee,
        }
    }
}
