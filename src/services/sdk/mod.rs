// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

pub mod liquidity;
pub mod quotes;
pub mod registry;

use crate::domain::constants::{DEFAULT_DEADLINE_SECS, router_for_chain};
use crate::domain::error::SdkError;
use crate::domain::types::{Query, UnsignedTransaction};
use crate::infrastructure::contracts::{RouterContract, SynapseRouterClient};
use crate::network::provider::HttpProvider;
use alloy::primitives::{Address, U256};
use registry::ChainRegistry;
use std::sync::Arc;

pub use registry::is_native_placeholder;

/// Entry point for quoting and building bridge/swap transactions across chains.
pub struct SynapseSdk {
    registry: ChainRegistry,
    deadline_secs: u64,
}

impl SynapseSdk {
    /// One router client per `(chain_ids[i], providers[i])` at the chain's default router.
    pub fn new(chain_ids: Vec<u64>, providers: Vec<HttpProvider>) -> Result<Self, SdkError> {
        if chain_ids.len() != providers.len() {
            return Err(SdkError::ChainCountMismatch {
                chains: chain_ids.len(),
                providers: providers.len(),
            });
        }
        let clients = chain_ids
            .iter()
            .zip(providers)
            .map(|(&chain_id, provider)| {
                Arc::new(SynapseRouterClient::new(
                    chain_id,
                    router_for_chain(chain_id),
                    provider,
                )) as Arc<dyn RouterContract>
            })
            .collect();
        Self::from_clients(chain_ids, clients)
    }

    pub fn from_clients(
        chain_ids: Vec<u64>,
        clients: Vec<Arc<dyn RouterContract>>,
    ) -> Result<Self, SdkError> {
        let registry = ChainRegistry::from_clients(&chain_ids, clients)?;
        tracing::info!(target: "sdk", chains = ?registry.chain_ids(), "Synapse SDK initialized");
        Ok(Self {
            registry,
            deadline_secs: DEFAULT_DEADLINE_SECS,
        })
    }

    /// Override the address that native-token placeholders resolve to on `chain_id`.
    pub fn with_native_token(mut self, chain_id: u64, token: Address) -> Result<Self, SdkError> {
        self.registry.set_native_token(chain_id, token)?;
        Ok(self)
    }

    pub fn with_deadline_secs(mut self, secs: u64) -> Self {
        self.deadline_secs = secs;
        self
    }

    pub fn chain_ids(&self) -> Vec<u64> {
        self.registry.chain_ids()
    }

    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    pub(crate) fn router(&self, chain_id: u64) -> Result<&Arc<dyn RouterContract>, SdkError> {
        self.registry.router(chain_id)
    }

    /// Unsigned `bridge` call on the origin router. Queries are passed through as given.
    pub fn bridge(
        &self,
        to: Address,
        origin_chain_id: u64,
        dest_chain_id: u64,
        token: Address,
        amount: U256,
        origin_query: &Query,
        dest_query: &Query,
    ) -> Result<UnsignedTransaction, SdkError> {
        let token = self.registry.normalize_token(origin_chain_id, token)?;
        let router = self.router(origin_chain_id)?;
        Ok(router.populate_bridge(to, dest_chain_id, token, amount, origin_query, dest_query))
    }

    /// Unsigned `swap` call on the chain's router.
    pub fn swap(
        &self,
        chain_id: u64,
        to: Address,
        token: Address,
        amount: U256,
        query: &Query,
    ) -> Result<UnsignedTransaction, SdkError> {
        let token = self.registry.normalize_token(chain_id, token)?;
        let router = self.router(chain_id)?;
        Ok(router.populate_swap(to, token, amount, query))
    }

    /// Gas airdrop amount configured on the chain's bridge contract.
    pub async fn get_bridge_gas(&self, chain_id: u64) -> Result<U256, SdkError> {
        let router = self.router(chain_id)?;
        let bridge = router.synapse_bridge().await?;
        router.chain_gas_amount(bridge).await
    }
}
