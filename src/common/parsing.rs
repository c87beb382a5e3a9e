// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use crate::domain::error::SdkError;
use alloy::primitives::{Address, U256};
use std::str::FromStr;

pub fn parse_boolish(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Parse a 20-byte hex address, with or without prefix; checksum is not enforced.
pub fn parse_address(s: &str) -> Result<Address, SdkError> {
    let trimmed = s.trim();
    Address::from_str(strip_0x(trimmed)).map_err(|_| SdkError::InvalidAddress(trimmed.to_string()))
}

/// Parse an integer amount given either in decimal or as `0x`-prefixed hex.
pub fn parse_amount(field: &str, s: &str) -> Result<U256, SdkError> {
    let trimmed = s.trim();
    let parsed = if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        U256::from_str_radix(strip_0x(trimmed), 16)
    } else {
        U256::from_str_radix(trimmed, 10)
    };
    parsed.map_err(|e| SdkError::Validation {
        field: field.to_string(),
        message: format!("'{trimmed}' is not an integer amount: {e}"),
    })
}

pub fn parse_chain_id(field: &str, s: &str) -> Result<u64, SdkError> {
    s.trim().parse::<u64>().map_err(|_| SdkError::Validation {
        field: field.to_string(),
        message: format!("'{}' is not a chain id", s.trim()),
    })
}

/// Accepts "42161,43114" or "42161 43114".
pub fn parse_chain_list(raw: &str) -> Result<Vec<u64>, SdkError> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .map_err(|_| SdkError::Config(format!("Invalid chain id '{part}' in chain list")))
        })
        .collect()
}
