// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use alloy::primitives::{Address, address};
use lazy_static::lazy_static;
use std::collections::HashMap;

// =============================================================================
// NETWORK CONSTANTS
// =============================================================================

pub const CHAIN_ETHEREUM: u64 = 1;
pub const CHAIN_OPTIMISM: u64 = 10;
pub const CHAIN_CRONOS: u64 = 25;
pub const CHAIN_BSC: u64 = 56;
pub const CHAIN_POLYGON: u64 = 137;
pub const CHAIN_FANTOM: u64 = 250;
pub const CHAIN_BOBA: u64 = 288;
pub const CHAIN_METIS: u64 = 1088;
pub const CHAIN_MOONBEAM: u64 = 1284;
pub const CHAIN_MOONRIVER: u64 = 1285;
pub const CHAIN_DOGECHAIN: u64 = 2000;
pub const CHAIN_CANTO: u64 = 7700;
pub const CHAIN_KLAYTN: u64 = 8217;
pub const CHAIN_ARBITRUM: u64 = 42161;
pub const CHAIN_AVALANCHE: u64 = 43114;
pub const CHAIN_DFK: u64 = 53935;
pub const CHAIN_AURORA: u64 = 1313161554;
pub const CHAIN_HARMONY: u64 = 1666600000;

// =============================================================================
// ROUTER CONSTANTS
// =============================================================================

/// Placeholder the router contracts use for the chain's gas token.
pub const NATIVE_TOKEN_SENTINEL: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// SynapseRouter shares one deployment address across supported chains.
pub const SYNAPSE_ROUTER: Address = address!("7E7A0e201FD38d3ADAA9523Da6C109a07118C96a");

/// Quote deadline applied when the caller gives none (10 minutes).
pub const DEFAULT_DEADLINE_SECS: u64 = 600;

#[derive(Debug, Clone, Copy)]
pub struct ChainDefaults {
    pub name: &'static str,
    pub rpc_url: &'static str,
    pub router: Address,
}

lazy_static! {
    pub static ref KNOWN_CHAINS: HashMap<u64, ChainDefaults> = {
        let mut m = HashMap::new();
        let mut add = |id: u64, name: &'static str, rpc_url: &'static str| {
            m.insert(id, ChainDefaults { name, rpc_url, router: SYNAPSE_ROUTER });
        };

        add(CHAIN_ETHEREUM, "ethereum", "https://rpc.ankr.com/eth");
        add(CHAIN_OPTIMISM, "optimism", "https://rpc.ankr.com/optimism");
        add(CHAIN_CRONOS, "cronos", "https://evm-cronos.crypto.org");
        add(CHAIN_BSC, "bsc", "https://bsc-dataseed1.ninicoin.io/");
        add(CHAIN_POLYGON, "polygon", "https://rpc-mainnet.matic.quiknode.pro");
        add(CHAIN_FANTOM, "fantom", "https://rpc.ftm.tools");
        add(CHAIN_BOBA, "boba", "https://replica-oolong.boba.network/");
        add(CHAIN_METIS, "metis", "https://andromeda.metis.io/?owner=1088");
        add(CHAIN_MOONBEAM, "moonbeam", "https://rpc.api.moonbeam.network");
        add(CHAIN_MOONRIVER, "moonriver", "https://rpc.api.moonriver.moonbeam.network");
        add(CHAIN_DOGECHAIN, "dogechain", "https://rpc.ankr.com/dogechain");
        add(CHAIN_CANTO, "canto", "https://mainnode.plexnode.org:8545");
        add(CHAIN_KLAYTN, "klaytn", "https://klaytn.blockpi.network/v1/rpc/public");
        add(CHAIN_ARBITRUM, "arbitrum", "https://arb1.arbitrum.io/rpc");
        add(CHAIN_AVALANCHE, "avalanche", "https://api.avax.network/ext/bc/C/rpc");
        add(CHAIN_DFK, "dfk", "https://subnets.avax.network/defi-kingdoms/dfk-chain/rpc");
        add(CHAIN_AURORA, "aurora", "https://mainnet.aurora.dev");
        add(CHAIN_HARMONY, "harmony", "https://harmony-mainnet.chainstacklabs.com");
        m
    };
}

pub fn chain_defaults(chain_id: u64) -> Option<&'static ChainDefaults> {
    KNOWN_CHAINS.get(&chain_id)
}

pub fn chain_name(chain_id: u64) -> &'static str {
    chain_defaults(chain_id).map(|c| c.name).unwrap_or("unknown")
}

/// Router deployment for a chain, falling back to the shared address.
pub fn router_for_chain(chain_id: u64) -> Address {
    chain_defaults(chain_id)
        .map(|c| c.router)
        .unwrap_or(SYNAPSE_ROUTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_zero_address() {
        assert_ne!(NATIVE_TOKEN_SENTINEL, Address::ZERO);
    }

    #[test]
    fn unknown_chain_falls_back_to_shared_router() {
        assert_eq!(router_for_chain(999_999), SYNAPSE_ROUTER);
        assert_eq!(chain_name(999_999), "unknown");
        assert_eq!(chain_name(CHAIN_ARBITRUM), "arbitrum");
    }
}
