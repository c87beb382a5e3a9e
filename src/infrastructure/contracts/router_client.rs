// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::domain::error::SdkError;
use crate::domain::types::{
    BridgeToken, DestRequest, FeeConfig, PoolInfo, PoolSummary, PoolToken, Query,
    UnsignedTransaction,
};
use crate::infrastructure::contracts::abi::{SynapseBridge, SynapseRouter};
use crate::network::provider::HttpProvider;
use alloy::primitives::{Address, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;

/// One chain's router contract. Reads go to the chain; payload builders are local.
#[async_trait]
pub trait RouterContract: Send + Sync {
    fn chain_id(&self) -> u64;

    fn address(&self) -> Address;

    async fn get_connected_bridge_tokens(&self, token_out: Address)
    -> Result<Vec<BridgeToken>, SdkError>;

    async fn get_origin_amount_out(
        &self,
        token_in: Address,
        symbols: &[String],
        amount_in: U256,
    ) -> Result<Vec<Query>, SdkError>;

    async fn get_destination_amount_out(
        &self,
        requests: &[DestRequest],
        token_out: Address,
    ) -> Result<Vec<Query>, SdkError>;

    async fn get_amount_out(
        &self,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
    ) -> Result<Query, SdkError>;

    async fn calculate_bridge_fee(&self, token: Address, amount: U256) -> Result<U256, SdkError>;

    async fn fee(&self, token: Address) -> Result<FeeConfig, SdkError>;

    async fn synapse_bridge(&self) -> Result<Address, SdkError>;

    async fn chain_gas_amount(&self, bridge: Address) -> Result<U256, SdkError>;

    async fn pool_tokens(&self, pool: Address) -> Result<Vec<PoolToken>, SdkError>;

    async fn pool_info(&self, pool: Address) -> Result<PoolInfo, SdkError>;

    async fn all_pools(&self) -> Result<Vec<PoolSummary>, SdkError>;

    async fn calculate_add_liquidity(
        &self,
        pool: Address,
        amounts: &[U256],
    ) -> Result<U256, SdkError>;

    async fn calculate_remove_liquidity(
        &self,
        pool: Address,
        amount: U256,
    ) -> Result<Vec<U256>, SdkError>;

    async fn calculate_withdraw_one_token(
        &self,
        pool: Address,
        amount: U256,
        index: u8,
    ) -> Result<U256, SdkError>;

    fn populate_bridge(
        &self,
        to: Address,
        chain_id: u64,
        token: Address,
        amount: U256,
        origin_query: &Query,
        dest_query: &Query,
    ) -> UnsignedTransaction {
        let call = SynapseRouter::bridgeCall {
            to,
            chainId: U256::from(chain_id),
            token,
            amount,
            originQuery: origin_query.into(),
            destQuery: dest_query.into(),
        };
        UnsignedTransaction {
            to: self.address(),
            data: call.abi_encode().into(),
        }
    }

    fn populate_swap(
        &self,
        to: Address,
        token: Address,
        amount: U256,
        query: &Query,
    ) -> UnsignedTransaction {
        let call = SynapseRouter::swapCall {
            to,
            token,
            amount,
            query: query.into(),
        };
        UnsignedTransaction {
            to: self.address(),
            data: call.abi_encode().into(),
        }
    }
}

/// `RouterContract` backed by an alloy HTTP provider.
#[derive(Clone)]
pub struct SynapseRouterClient {
    chain_id: u64,
    provider: HttpProvider,
    router: SynapseRouter::SynapseRouterInstance<HttpProvider>,
}

impl SynapseRouterClient {
    pub fn new(chain_id: u64, router_address: Address, provider: HttpProvider) -> Self {
        let router = SynapseRouter::new(router_address, provider.clone());
        Self {
            chain_id,
            provider,
            router,
        }
    }

    fn err(&self, call: &'static str, e: impl std::fmt::Display) -> SdkError {
        tracing::debug!(
            target: "router",
            chain_id = self.chain_id,
            call,
            error = %e,
            "Router call failed"
        );
        SdkError::contract(self.chain_id, call, e)
    }

    fn trace_call(&self, call: &'static str) {
        tracing::debug!(
            target: "router",
            chain_id = self.chain_id,
            router = %self.router.address(),
            call,
            "Router call"
        );
    }
}

#[async_trait]
impl RouterContract for SynapseRouterClient {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn address(&self) -> Address {
        *self.router.address()
    }

    async fn get_connected_bridge_tokens(
        &self,
        token_out: Address,
    ) -> Result<Vec<BridgeToken>, SdkError> {
        self.trace_call("getConnectedBridgeTokens");
        let tokens = self
            .router
            .getConnectedBridgeTokens(token_out)
            .call()
            .await
            .map_err(|e| self.err("getConnectedBridgeTokens", e))?;
        Ok(tokens.into_iter().map(BridgeToken::from).collect())
    }

    async fn get_origin_amount_out(
        &self,
        token_in: Address,
        symbols: &[String],
        amount_in: U256,
    ) -> Result<Vec<Query>, SdkError> {
        self.trace_call("getOriginAmountOut");
        let queries = self
            .router
            .getOriginAmountOut(token_in, symbols.to_vec(), amount_in)
            .call()
            .await
            .map_err(|e| self.err("getOriginAmountOut", e))?;
        Ok(queries.into_iter().map(Query::from).collect())
    }

    async fn get_destination_amount_out(
        &self,
        requests: &[DestRequest],
        token_out: Address,
    ) -> Result<Vec<Query>, SdkError> {
        self.trace_call("getDestinationAmountOut");
        let requests = requests.iter().map(SynapseRouter::DestRequest::from).collect();
        let queries = self
            .router
            .getDestinationAmountOut(requests, token_out)
            .call()
            .await
            .map_err(|e| self.err("getDestinationAmountOut", e))?;
        Ok(queries.into_iter().map(Query::from).collect())
    }

    async fn get_amount_out(
        &self,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
    ) -> Result<Query, SdkError> {
        self.trace_call("getAmountOut");
        let query = self
            .router
            .getAmountOut(token_in, token_out, amount_in)
            .call()
            .await
            .map_err(|e| self.err("getAmountOut", e))?;
        Ok(query.into())
    }

    async fn calculate_bridge_fee(&self, token: Address, amount: U256) -> Result<U256, SdkError> {
        self.trace_call("calculateBridgeFee");
        self.router
            .calculateBridgeFee(token, amount)
            .call()
            .await
            .map_err(|e| self.err("calculateBridgeFee", e))
    }

    async fn fee(&self, token: Address) -> Result<FeeConfig, SdkError> {
        self.trace_call("fee");
        let fee = self
            .router
            .fee(token)
            .call()
            .await
            .map_err(|e| self.err("fee", e))?;
        Ok(fee.into())
    }

    async fn synapse_bridge(&self) -> Result<Address, SdkError> {
        self.trace_call("synapseBridge");
        self.router
            .synapseBridge()
            .call()
            .await
            .map_err(|e| self.err("synapseBridge", e))
    }

    async fn chain_gas_amount(&self, bridge: Address) -> Result<U256, SdkError> {
        self.trace_call("chainGasAmount");
        SynapseBridge::new(bridge, self.provider.clone())
            .chainGasAmount()
            .call()
            .await
            .map_err(|e| self.err("chainGasAmount", e))
    }

    async fn pool_tokens(&self, pool: Address) -> Result<Vec<PoolToken>, SdkError> {
        self.trace_call("poolTokens");
        let tokens = self
            .router
            .poolTokens(pool)
            .call()
            .await
            .map_err(|e| self.err("poolTokens", e))?;
        Ok(tokens.into_iter().map(PoolToken::from).collect())
    }

    async fn pool_info(&self, pool: Address) -> Result<PoolInfo, SdkError> {
        self.trace_call("poolInfo");
        let info = self
            .router
            .poolInfo(pool)
            .call()
            .await
            .map_err(|e| self.err("poolInfo", e))?;
        Ok(PoolInfo {
            tokens: info._0,
            lp_token: info._1,
        })
    }

    async fn all_pools(&self) -> Result<Vec<PoolSummary>, SdkError> {
        self.trace_call("allPools");
        let pools = self
            .router
            .allPools()
            .call()
            .await
            .map_err(|e| self.err("allPools", e))?;
        Ok(pools.into_iter().map(PoolSummary::from).collect())
    }

    async fn calculate_add_liquidity(
        &self,
        pool: Address,
        amounts: &[U256],
    ) -> Result<U256, SdkError> {
        self.trace_call("calculateAddLiquidity");
        self.router
            .calculateAddLiquidity(pool, amounts.to_vec())
            .call()
            .await
            .map_err(|e| self.err("calculateAddLiquidity", e))
    }

    async fn calculate_remove_liquidity(
        &self,
        pool: Address,
        amount: U256,
    ) -> Result<Vec<U256>, SdkError> {
        self.trace_call("calculateRemoveLiquidity");
        self.router
            .calculateRemoveLiquidity(pool, amount)
            .call()
            .await
            .map_err(|e| self.err("calculateRemoveLiquidity", e))
    }

    async fn calculate_withdraw_one_token(
        &self,
        pool: Address,
        amount: U256,
        index: u8,
    ) -> Result<U256, SdkError> {
        self.trace_call("calculateWithdrawOneToken");
        self.router
            .calculateWithdrawOneToken(pool, amount, index)
            .call()
            .await
            .map_err(|e| self.err("calculateWithdrawOneToken", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::SYNAPSE_ROUTER;
    use alloy::primitives::Bytes;
    use url::Url;

    fn offline_client() -> SynapseRouterClient {
        let http = HttpProvider::new_http(Url::parse("http://127.0.0.1:8545").unwrap());
        SynapseRouterClient::new(42161, SYNAPSE_ROUTER, http)
    }

    #[test]
    fn bridge_payload_targets_router_and_decodes() {
        let client = offline_client();
        let origin = Query {
            min_amount_out: U256::from(10u64),
            ..Default::default()
        };
        let dest = Query {
            min_amount_out: U256::from(9u64),
            raw_params: Bytes::from(vec![0xff]),
            ..Default::default()
        };
        let to = Address::repeat_byte(0x0a);
        let token = Address::repeat_byte(0x0b);

        let tx = client.populate_bridge(to, 43114, token, U256::from(100u64), &origin, &dest);
        assert_eq!(tx.to, SYNAPSE_ROUTER);

        let decoded = SynapseRouter::bridgeCall::abi_decode(&tx.data).expect("decode bridge");
        assert_eq!(decoded.to, to);
        assert_eq!(decoded.chainId, U256::from(43114u64));
        assert_eq!(decoded.token, token);
        assert_eq!(Query::from(decoded.originQuery), origin);
        assert_eq!(Query::from(decoded.destQuery), dest);
    }

    #[test]
    fn client_reports_its_chain_and_router() {
        let client = offline_client();
        assert_eq!(client.chain_id(), 42161);
        assert_eq!(client.address(), SYNAPSE_ROUTER);
    }
}
