// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@on1.no>

use crate::domain::error::SdkError;
use alloy::network::Ethereum;
use alloy::providers::RootProvider;
use url::Url;

pub type HttpProvider = RootProvider<Ethereum>;

pub struct ConnectionFactory;

impl ConnectionFactory {
    pub fn http(rpc_url: &str) -> Result<HttpProvider, SdkError> {
        let url = Url::parse(rpc_url)
            .map_err(|e| SdkError::Config(format!("Invalid RPC URL {rpc_url}: {e}")))?;

        let provider = RootProvider::new_http(url);
        Ok(provider)
    }
}
