// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::domain::error::SdkError;
use crate::domain::types::{
    AddLiquidityQuote, IndexedAmount, PoolInfo, PoolSummary, PoolToken, RemoveLiquidityOneQuote,
    RemoveLiquidityQuote,
};
use crate::services::sdk::SynapseSdk;
use crate::services::sdk::quotes::ensure_len;
use alloy::primitives::{Address, U256};
use std::collections::{BTreeMap, HashMap};

/// Amounts laid out in pool-token order; tokens absent from `amounts` get zero.
pub fn align_amounts(pool_tokens: &[PoolToken], amounts: &HashMap<Address, U256>) -> Vec<U256> {
    pool_tokens
        .iter()
        .map(|t| amounts.get(&t.token).copied().unwrap_or(U256::ZERO))
        .collect()
}

/// Position of `token` in the pool. Last match wins; an absent token maps to 0.
pub fn pool_token_index(pool_tokens: &[PoolToken], token: Address) -> usize {
    pool_tokens
        .iter()
        .rposition(|t| t.token == token)
        .unwrap_or(0)
}

impl SynapseSdk {
    pub async fn get_pool_tokens(
        &self,
        chain_id: u64,
        pool: Address,
    ) -> Result<Vec<PoolToken>, SdkError> {
        self.router(chain_id)?.pool_tokens(pool).await
    }

    pub async fn get_pool_info(&self, chain_id: u64, pool: Address) -> Result<PoolInfo, SdkError> {
        self.router(chain_id)?.pool_info(pool).await
    }

    pub async fn get_all_pools(&self, chain_id: u64) -> Result<Vec<PoolSummary>, SdkError> {
        self.router(chain_id)?.all_pools().await
    }

    /// LP tokens minted for depositing `amounts` (keyed by token address) into `pool`.
    pub async fn calculate_add_liquidity(
        &self,
        chain_id: u64,
        pool: Address,
        amounts: &HashMap<Address, U256>,
    ) -> Result<AddLiquidityQuote, SdkError> {
        let router = self.router(chain_id)?;
        let router_address = router.address();
        let pool_tokens = router.pool_tokens(pool).await?;
        let aligned = align_amounts(&pool_tokens, amounts);

        if aligned.iter().all(|a| a.is_zero()) {
            return Ok(AddLiquidityQuote {
                amount: U256::ZERO,
                router_address,
            });
        }

        let amount = router.calculate_add_liquidity(pool, &aligned).await?;
        Ok(AddLiquidityQuote {
            amount,
            router_address,
        })
    }

    /// Per-token amounts returned for burning `amount` LP tokens.
    pub async fn calculate_remove_liquidity(
        &self,
        chain_id: u64,
        pool: Address,
        amount: U256,
    ) -> Result<RemoveLiquidityQuote, SdkError> {
        let router = self.router(chain_id)?;
        let amounts_out = router.calculate_remove_liquidity(pool, amount).await?;
        let pool_tokens = router.pool_tokens(pool).await?;

        ensure_len(
            chain_id,
            "calculateRemoveLiquidity",
            amounts_out.len(),
            pool_tokens.len(),
        )?;

        let amounts = pool_tokens
            .iter()
            .zip(amounts_out)
            .enumerate()
            .map(|(index, (t, value))| (t.token, IndexedAmount { value, index }))
            .collect::<BTreeMap<_, _>>();

        Ok(RemoveLiquidityQuote {
            amounts,
            router_address: router.address(),
        })
    }

    /// Amount of `token` returned for burning `amount` LP tokens into that single token.
    pub async fn calculate_remove_liquidity_one(
        &self,
        chain_id: u64,
        pool: Address,
        amount: U256,
        token: Address,
    ) -> Result<RemoveLiquidityOneQuote, SdkError> {
        let router = self.router(chain_id)?;
        let pool_tokens = router.pool_tokens(pool).await?;
        let index = pool_token_index(&pool_tokens, token);
        let index_u8 = u8::try_from(index).map_err(|_| SdkError::Validation {
            field: "token".to_string(),
            message: format!("pool token index {index} exceeds uint8"),
        })?;

        let value = router
            .calculate_withdraw_one_token(pool, amount, index_u8)
            .await?;

        Ok(RemoveLiquidityOneQuote {
            amount: IndexedAmount { value, index },
            router_address: router.address(),
        })
    }
}
