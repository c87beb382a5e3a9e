// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use alloy::primitives::{Address, Bytes, TxKind, U256};
use alloy::rpc::types::TransactionRequest;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON amounts are decimal strings; `0x` hex input is still accepted.
pub mod u256_decimal {
    use alloy::primitives::U256;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        U256::from_str(raw.trim()).map_err(D::Error::custom)
    }

    pub mod option {
        use alloy::primitives::U256;
        use serde::Serializer;

        pub fn serialize<S: Serializer>(
            value: &Option<U256>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.collect_str(v),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// Route descriptor consumed by the router when executing a swap or bridge leg.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub swap_adapter: Address,
    pub token_out: Address,
    #[serde(with = "u256_decimal")]
    pub min_amount_out: U256,
    #[serde(with = "u256_decimal")]
    pub deadline: U256,
    pub raw_params: Bytes,
}

impl Query {
    /// Copy of this query with `deadline` replaced.
    pub fn with_deadline(&self, deadline: U256) -> Self {
        Self {
            deadline,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
    #[serde(with = "u256_decimal")]
    pub bridge_fee: U256,
    #[serde(with = "u256_decimal")]
    pub min_fee: U256,
    #[serde(with = "u256_decimal")]
    pub max_fee: U256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeToken {
    pub symbol: String,
    pub token: Address,
}

impl BridgeToken {
    pub fn is_routable(&self) -> bool {
        !self.symbol.is_empty() && self.token != Address::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestRequest {
    pub symbol: String,
    #[serde(with = "u256_decimal")]
    pub amount_in: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolToken {
    pub is_weth: bool,
    pub token: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    #[serde(with = "u256_decimal")]
    pub tokens: U256,
    pub lp_token: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSummary {
    pub pool_address: Address,
    pub tokens: Vec<PoolToken>,
    pub lp_token: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeQuote {
    #[serde(serialize_with = "u256_decimal::option::serialize")]
    pub fee_amount: Option<U256>,
    pub fee_config: Option<FeeConfig>,
    pub router_address: Address,
    #[serde(serialize_with = "u256_decimal::serialize")]
    pub max_amount_out: U256,
    pub origin_query: Option<Query>,
    pub dest_query: Option<Query>,
}

impl BridgeQuote {
    pub fn has_route(&self) -> bool {
        self.origin_query.is_some() && self.dest_query.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    pub router_address: Address,
    #[serde(serialize_with = "u256_decimal::serialize")]
    pub max_amount_out: U256,
    pub query: Query,
}

/// Target and calldata for a router call; signing and gas are left to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsignedTransaction {
    pub to: Address,
    pub data: Bytes,
}

impl UnsignedTransaction {
    pub fn into_request(self) -> TransactionRequest {
        TransactionRequest {
            to: Some(TxKind::Call(self.to)),
            input: self.data.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLiquidityQuote {
    #[serde(serialize_with = "u256_decimal::serialize")]
    pub amount: U256,
    pub router_address: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexedAmount {
    #[serde(serialize_with = "u256_decimal::serialize")]
    pub value: U256,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveLiquidityQuote {
    pub amounts: BTreeMap<Address, IndexedAmount>,
    pub router_address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveLiquidityOneQuote {
    pub amount: IndexedAmount,
    pub router_address: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_deadline_only_touches_deadline() {
        let q = Query {
            swap_adapter: Address::repeat_byte(0x01),
            token_out: Address::repeat_byte(0x02),
            min_amount_out: U256::from(42u64),
            deadline: U256::from(1u64),
            raw_params: Bytes::from(vec![0xde, 0xad]),
        };
        let stamped = q.with_deadline(U256::from(999u64));
        assert_eq!(stamped.deadline, U256::from(999u64));
        assert_eq!(stamped.with_deadline(q.deadline), q);
    }

    #[test]
    fn bridge_token_routability() {
        let ok = BridgeToken {
            symbol: "nUSD".into(),
            token: Address::repeat_byte(0x11),
        };
        let no_symbol = BridgeToken {
            symbol: String::new(),
            token: Address::repeat_byte(0x11),
        };
        let zero = BridgeToken {
            symbol: "nETH".into(),
            token: Address::ZERO,
        };
        assert!(ok.is_routable());
        assert!(!no_symbol.is_routable());
        assert!(!zero.is_routable());
    }

    #[test]
    fn unsigned_tx_converts_to_call_request() {
        let tx = UnsignedTransaction {
            to: Address::repeat_byte(0x7e),
            data: Bytes::from(vec![1, 2, 3]),
        };
        let req = tx.clone().into_request();
        assert_eq!(req.to, Some(TxKind::Call(tx.to)));
        assert_eq!(req.input.input().cloned(), Some(tx.data));
    }

    #[test]
    fn query_serializes_camel_case() {
        let json = serde_json::to_value(Query::default()).expect("serialize");
        assert!(json.get("minAmountOut").is_some());
        assert!(json.get("rawParams").is_some());
    }

    #[test]
    fn amounts_serialize_as_decimal_strings() {
        let q = Query {
            min_amount_out: U256::from(70u64),
            deadline: U256::from(1_700_000_000u64),
            ..Default::default()
        };
        let json = serde_json::to_value(&q).expect("serialize");
        assert_eq!(json["minAmountOut"], "70");
        assert_eq!(json["deadline"], "1700000000");

        let quote = BridgeQuote {
            fee_amount: Some(U256::from(3u64)),
            fee_config: None,
            router_address: Address::ZERO,
            max_amount_out: U256::from(70u64),
            origin_query: None,
            dest_query: None,
        };
        let json = serde_json::to_value(&quote).expect("serialize");
        assert_eq!(json["maxAmountOut"], "70");
        assert_eq!(json["feeAmount"], "3");
        assert!(json["feeConfig"].is_null());
    }

    #[test]
    fn amounts_deserialize_from_decimal_or_hex() {
        let fee: FeeConfig = serde_json::from_value(serde_json::json!({
            "bridgeFee": "4000000",
            "minFee": "0x46",
            "maxFee": "0"
        }))
        .expect("deserialize");
        assert_eq!(fee.bridge_fee, U256::from(4_000_000u64));
        assert_eq!(fee.min_fee, U256::from(70u64));
        assert!(serde_json::from_value::<PoolInfo>(serde_json::json!({
            "tokens": "three",
            "lpToken": Address::ZERO
        }))
        .is_err());
    }
}
