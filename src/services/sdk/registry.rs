// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::domain::constants::NATIVE_TOKEN_SENTINEL;
use crate::domain::error::SdkError;
use crate::infrastructure::contracts::RouterContract;
use alloy::primitives::Address;
use std::collections::HashMap;
use std::sync::Arc;

pub struct ChainEntry {
    pub client: Arc<dyn RouterContract>,
    /// Address the router expects for this chain's gas token.
    pub native_token: Address,
}

/// Read-only map of chain id to router client, fixed at construction.
#[derive(Default)]
pub struct ChainRegistry {
    chains: HashMap<u64, ChainEntry>,
}

pub fn is_native_placeholder(token: Address) -> bool {
    token == Address::ZERO || token == NATIVE_TOKEN_SENTINEL
}

impl ChainRegistry {
    pub fn from_clients(
        chain_ids: &[u64],
        clients: Vec<Arc<dyn RouterContract>>,
    ) -> Result<Self, SdkError> {
        if chain_ids.len() != clients.len() {
            return Err(SdkError::ChainCountMismatch {
                chains: chain_ids.len(),
                providers: clients.len(),
            });
        }

        let mut chains = HashMap::with_capacity(chain_ids.len());
        for (chain_id, client) in chain_ids.iter().copied().zip(clients) {
            if client.chain_id() != chain_id {
                tracing::warn!(
                    target: "sdk",
                    chain_id,
                    client_chain_id = client.chain_id(),
                    "Router client registered under a different chain id"
                );
            }
            chains.insert(
                chain_id,
                ChainEntry {
                    client,
                    native_token: NATIVE_TOKEN_SENTINEL,
                },
            );
        }
        Ok(Self { chains })
    }

    pub fn router(&self, chain_id: u64) -> Result<&Arc<dyn RouterContract>, SdkError> {
        self.chains
            .get(&chain_id)
            .map(|entry| &entry.client)
            .ok_or(SdkError::UnsupportedChain(chain_id))
    }

    pub fn native_token(&self, chain_id: u64) -> Result<Address, SdkError> {
        self.chains
            .get(&chain_id)
            .map(|entry| entry.native_token)
            .ok_or(SdkError::UnsupportedChain(chain_id))
    }

    pub fn set_native_token(&mut self, chain_id: u64, token: Address) -> Result<(), SdkError> {
        let entry = self
            .chains
            .get_mut(&chain_id)
            .ok_or(SdkError::UnsupportedChain(chain_id))?;
        entry.native_token = token;
        Ok(())
    }

    /// Map the zero address or the native sentinel to the chain's native token address.
    pub fn normalize_token(&self, chain_id: u64, token: Address) -> Result<Address, SdkError> {
        if is_native_placeholder(token) {
            self.native_token(chain_id)
        } else {
            Ok(token)
        }
    }

    pub fn chain_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.chains.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
