// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Amount of chains and providers does not equal ({chains} chains, {providers} providers)")]
    ChainCountMismatch { chains: usize, providers: usize },

    #[error("Chain {0} is not configured")]
    UnsupportedChain(u64),

    #[error("No bridge tokens found for this route ({origin} -> {dest}, token_out {token_out:#x})")]
    NoRoute {
        origin: u64,
        dest: u64,
        token_out: Address,
    },

    #[error("Router call {call} failed on chain {chain_id}: {reason}")]
    Contract {
        chain_id: u64,
        call: &'static str,
        reason: String,
    },

    #[error("Address {0} is invalid")]
    InvalidAddress(String),

    #[error("Validation failed for field {field}: {message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl SdkError {
    pub fn contract(chain_id: u64, call: &'static str, err: impl std::fmt::Display) -> Self {
        SdkError::Contract {
            chain_id,
            call,
            reason: err.to_string(),
        }
    }

    /// True for failures caused by the caller's input rather than the chain.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SdkError::NoRoute { .. }
                | SdkError::UnsupportedChain(_)
                | SdkError::InvalidAddress(_)
                | SdkError::Validation { .. }
        )
    }
}

impl From<config::ConfigError> for SdkError {
    fn from(err: config::ConfigError) -> Self {
        SdkError::Config(err.to_string())
    }
}
