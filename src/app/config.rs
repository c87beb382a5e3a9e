// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use crate::common::parsing::{parse_address, parse_chain_list};
use crate::domain::constants::{self, DEFAULT_DEADLINE_SECS};
use crate::domain::error::SdkError;
use crate::infrastructure::contracts::{RouterContract, SynapseRouterClient};
use crate::network::provider::ConnectionFactory;
use crate::services::sdk::SynapseSdk;
use alloy::primitives::Address;
use config::{Config, Environment, File};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_false")]
    pub debug: bool,
    #[serde(default = "default_false")]
    pub log_json: bool,
    /// Overrides the bare debug/info switch when set (EnvFilter directives accepted).
    pub log_level: Option<String>,
    #[serde(default = "default_chains", deserialize_with = "deserialize_chain_list")]
    pub chains: Vec<u64>,

    // Per-chain maps, keyed by chain id as a string
    pub rpc_urls: Option<HashMap<String, String>>,
    pub router_addresses: Option<HashMap<String, String>>,
    pub native_tokens: Option<HashMap<String, String>>,

    #[serde(default = "default_http_bind")]
    pub http_bind: String,
    #[serde(default = "default_deadline_secs")]
    pub default_deadline_secs: u64,
}

// Defaults
fn default_false() -> bool {
    false
}
fn default_chains() -> Vec<u64> {
    vec![constants::CHAIN_ARBITRUM, constants::CHAIN_AVALANCHE]
}
fn default_http_bind() -> String {
    "0.0.0.0:3000".to_string()
}
fn default_deadline_secs() -> u64 {
    DEFAULT_DEADLINE_SECS
}

fn deserialize_chain_list<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{Error, SeqAccess, Visitor};
    use std::fmt;

    struct ChainVisitor;

    impl<'de> Visitor<'de> for ChainVisitor {
        type Value = Vec<u64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a sequence of chain ids or a string with comma-separated ids")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            parse_chain_list(v).map_err(E::custom)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(vec![v])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut out = Vec::new();
            while let Some(elem) = seq.next_element::<u64>()? {
                out.push(elem);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_any(ChainVisitor)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Explicit path wins, then `SYNAPSE_CONFIG`; `None` means `config.*` in the working directory.
pub fn resolve_config_path(path: Option<&str>) -> Option<String> {
    if let Some(p) = path.map(str::trim).filter(|p| !p.is_empty()) {
        return Some(p.to_string());
    }
    non_empty_env("SYNAPSE_CONFIG")
}

impl Settings {
    pub fn load_with_path(path: Option<&str>) -> Result<Self, SdkError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let selected_config = resolve_config_path(path);
        let mut builder = Config::builder();

        if let Some(ref selected_path) = selected_config {
            builder = builder.add_source(File::from(Path::new(selected_path)).required(true));
        } else {
            builder = builder.add_source(File::with_name("config").required(false));
        }
        // Deterministic precedence: CLI (in main) > env/.env > selected file.
        builder = builder.add_source(Environment::default());

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        // Allow CHAINS env to be comma/space separated string (e.g. "42161,43114")
        if let Some(chains_str) = non_empty_env("CHAINS") {
            settings.chains = parse_chain_list(&chains_str)?;
        }
        // Express-style PORT keeps working for the HTTP glue.
        if let Some(port) = non_empty_env("PORT") {
            let port: u16 = port
                .parse()
                .map_err(|_| SdkError::Config(format!("Invalid PORT '{port}'")))?;
            settings.http_bind = format!("0.0.0.0:{port}");
        }

        if settings.chains.is_empty() {
            return Err(SdkError::Config("No chains configured".to_string()));
        }

        Ok(settings)
    }

    pub fn load() -> Result<Self, SdkError> {
        Self::load_with_path(None)
    }

    pub fn log_filter(&self) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| if self.debug { "debug" } else { "info" }.to_string())
    }

    /// RPC URL for a chain: config map, then `rpc_url_<chain>` env, then the public default.
    pub fn rpc_url(&self, chain_id: u64) -> Result<String, SdkError> {
        if let Some(urls) = &self.rpc_urls
            && let Some(url) = urls.get(&chain_id.to_string())
        {
            return Ok(url.clone());
        }
        if let Some(url) = non_empty_env(&format!("rpc_url_{chain_id}")) {
            return Ok(url);
        }
        constants::chain_defaults(chain_id)
            .map(|c| c.rpc_url.to_string())
            .ok_or_else(|| {
                SdkError::Config(format!(
                    "No RPC URL for chain {chain_id}; set rpc_urls.{chain_id} or rpc_url_{chain_id}"
                ))
            })
    }

    pub fn router_address(&self, chain_id: u64) -> Result<Address, SdkError> {
        match self
            .router_addresses
            .as_ref()
            .and_then(|m| m.get(&chain_id.to_string()))
        {
            Some(raw) => parse_address(raw),
            None => Ok(constants::router_for_chain(chain_id)),
        }
    }

    pub fn native_token(&self, chain_id: u64) -> Result<Option<Address>, SdkError> {
        self.native_tokens
            .as_ref()
            .and_then(|m| m.get(&chain_id.to_string()))
            .map(|raw| parse_address(raw))
            .transpose()
    }

    /// Connect one HTTP provider per configured chain and assemble the SDK.
    pub fn build_sdk(&self) -> Result<SynapseSdk, SdkError> {
        let mut clients: Vec<Arc<dyn RouterContract>> = Vec::with_capacity(self.chains.len());
        for &chain_id in &self.chains {
            let url = self.rpc_url(chain_id)?;
            let router = self.router_address(chain_id)?;
            let provider = ConnectionFactory::http(&url)?;
            tracing::info!(
                target: "config",
                chain_id,
                chain = constants::chain_name(chain_id),
                router = %router,
                rpc = %url,
                "Configured router client"
            );
            clients.push(Arc::new(SynapseRouterClient::new(chain_id, router, provider)));
        }

        let mut sdk = SynapseSdk::from_clients(self.chains.clone(), clients)?
            .with_deadline_secs(self.default_deadline_secs);
        for &chain_id in &self.chains {
            if let Some(native) = self.native_token(chain_id)? {
                sdk = sdk.with_native_token(chain_id, native)?;
            }
        }
        Ok(sdk)
    }
}
