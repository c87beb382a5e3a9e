// SPDX-License-Identifier: MIT
//! In-memory router used by the integration tests.

#![allow(dead_code)]

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use std::sync::Mutex;
use synapse_router::contracts::RouterContract;
use synapse_router::domain::error::SdkError;
use synapse_router::domain::types::{
    BridgeToken, DestRequest, FeeConfig, PoolInfo, PoolSummary, PoolToken, Query,
};

#[derive(Default)]
pub struct MockRouter {
    pub chain_id: u64,
    pub address: Address,
    pub bridge_tokens: Vec<BridgeToken>,
    pub origin_queries: Vec<Query>,
    pub dest_queries: Vec<Query>,
    pub swap_query: Query,
    pub bridge_fee: U256,
    pub fee_config: Option<FeeConfig>,
    pub bridge_address: Address,
    pub gas_amount: U256,
    pub pool_tokens: Vec<PoolToken>,
    pub pools: Vec<PoolSummary>,
    pub add_liquidity_out: U256,
    pub remove_liquidity_out: Vec<U256>,
    pub withdraw_one_out: U256,
    /// Call name that fails with a transport error.
    pub fail_on: Option<&'static str>,

    pub calls: Mutex<Vec<&'static str>>,
    pub seen_tokens: Mutex<Vec<Address>>,
    pub seen_symbols: Mutex<Vec<String>>,
    pub seen_requests: Mutex<Vec<DestRequest>>,
    pub seen_amounts: Mutex<Vec<U256>>,
    pub seen_index: Mutex<Option<u8>>,
}

impl MockRouter {
    pub fn new(chain_id: u64, address: Address) -> Self {
        Self {
            chain_id,
            address,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls().iter().any(|c| *c == name)
    }

    fn record(&self, call: &'static str) -> Result<(), SdkError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_on == Some(call) {
            return Err(SdkError::contract(self.chain_id, call, "execution reverted"));
        }
        Ok(())
    }

    fn see_token(&self, token: Address) {
        self.seen_tokens.lock().unwrap().push(token);
    }
}

pub fn query(min_amount_out: u64, deadline: u64, adapter: u8) -> Query {
    Query {
        swap_adapter: Address::repeat_byte(adapter),
        token_out: Address::repeat_byte(adapter.wrapping_add(1)),
        min_amount_out: U256::from(min_amount_out),
        deadline: U256::from(deadline),
        raw_params: vec![adapter].into(),
    }
}

pub fn bridge_token(symbol: &str, byte: u8) -> BridgeToken {
    BridgeToken {
        symbol: symbol.to_string(),
        token: Address::repeat_byte(byte),
    }
}

pub fn pool_token(byte: u8) -> PoolToken {
    PoolToken {
        is_weth: false,
        token: Address::repeat_byte(byte),
    }
}

#[async_trait]
impl RouterContract for MockRouter {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn address(&self) -> Address {
        self.address
    }

    async fn get_connected_bridge_tokens(
        &self,
        token_out: Address,
    ) -> Result<Vec<BridgeToken>, SdkError> {
        self.record("getConnectedBridgeTokens")?;
        self.see_token(token_out);
        Ok(self.bridge_tokens.clone())
    }

    async fn get_origin_amount_out(
        &self,
        token_in: Address,
        symbols: &[String],
        _amount_in: U256,
    ) -> Result<Vec<Query>, SdkError> {
        self.record("getOriginAmountOut")?;
        self.see_token(token_in);
        self.seen_symbols.lock().unwrap().extend(symbols.iter().cloned());
        Ok(self.origin_queries.clone())
    }

    async fn get_destination_amount_out(
        &self,
        requests: &[DestRequest],
        token_out: Address,
    ) -> Result<Vec<Query>, SdkError> {
        self.record("getDestinationAmountOut")?;
        self.see_token(token_out);
        self.seen_requests.lock().unwrap().extend(requests.iter().cloned());
        Ok(self.dest_queries.clone())
    }

    async fn get_amount_out(
        &self,
        token_in: Address,
        token_out: Address,
        _amount_in: U256,
    ) -> Result<Query, SdkError> {
        self.record("getAmountOut")?;
        self.see_token(token_in);
        self.see_token(token_out);
        Ok(self.swap_query.clone())
    }

    async fn calculate_bridge_fee(&self, token: Address, amount: U256) -> Result<U256, SdkError> {
        self.record("calculateBridgeFee")?;
        self.see_token(token);
        self.seen_amounts.lock().unwrap().push(amount);
        Ok(self.bridge_fee)
    }

    async fn fee(&self, token: Address) -> Result<FeeConfig, SdkError> {
        self.record("fee")?;
        self.see_token(token);
        Ok(self.fee_config.clone().unwrap_or(FeeConfig {
            bridge_fee: U256::ZERO,
            min_fee: U256::ZERO,
            max_fee: U256::ZERO,
        }))
    }

    async fn synapse_bridge(&self) -> Result<Address, SdkError> {
        self.record("synapseBridge")?;
        Ok(self.bridge_address)
    }

    async fn chain_gas_amount(&self, bridge: Address) -> Result<U256, SdkError> {
        self.record("chainGasAmount")?;
        self.see_token(bridge);
        Ok(self.gas_amount)
    }

    async fn pool_tokens(&self, _pool: Address) -> Result<Vec<PoolToken>, SdkError> {
        self.record("poolTokens")?;
        Ok(self.pool_tokens.clone())
    }

    async fn pool_info(&self, _pool: Address) -> Result<PoolInfo, SdkError> {
        self.record("poolInfo")?;
        Ok(PoolInfo {
            tokens: U256::from(self.pool_tokens.len()),
            lp_token: Address::repeat_byte(0x1f),
        })
    }

    async fn all_pools(&self) -> Result<Vec<PoolSummary>, SdkError> {
        self.record("allPools")?;
        Ok(self.pools.clone())
    }

    async fn calculate_add_liquidity(
        &self,
        _pool: Address,
        amounts: &[U256],
    ) -> Result<U256, SdkError> {
        self.record("calculateAddLiquidity")?;
        self.seen_amounts.lock().unwrap().extend_from_slice(amounts);
        Ok(self.add_liquidity_out)
    }

    async fn calculate_remove_liquidity(
        &self,
        _pool: Address,
        _amount: U256,
    ) -> Result<Vec<U256>, SdkError> {
        self.record("calculateRemoveLiquidity")?;
        Ok(self.remove_liquidity_out.clone())
    }

    async fn calculate_withdraw_one_token(
        &self,
        _pool: Address,
        _amount: U256,
        index: u8,
    ) -> Result<U256, SdkError> {
        self.record("calculateWithdrawOneToken")?;
        *self.seen_index.lock().unwrap() = Some(index);
        Ok(self.withdraw_one_out)
    }
}

/// SDK over the given mocks, registered under their own chain ids.
pub fn sdk_with(routers: &[std::sync::Arc<MockRouter>]) -> synapse_router::SynapseSdk {
    let chain_ids = routers.iter().map(|r| r.chain_id).collect();
    let clients = routers
        .iter()
        .map(|r| r.clone() as std::sync::Arc<dyn RouterContract>)
        .collect();
    synapse_router::SynapseSdk::from_clients(chain_ids, clients).expect("sdk")
}
