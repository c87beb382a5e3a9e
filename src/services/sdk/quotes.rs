// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::time_utils::resolve_deadline;
use crate::domain::error::SdkError;
use crate::domain::types::{BridgeQuote, BridgeToken, DestRequest, Query, SwapQuote};
use crate::services::sdk::SynapseSdk;
use alloy::primitives::{Address, U256};

/// Router array responses must carry one entry per request.
pub(crate) fn ensure_len(
    chain_id: u64,
    call: &'static str,
    results: usize,
    requests: usize,
) -> Result<(), SdkError> {
    if results != requests {
        return Err(SdkError::contract(
            chain_id,
            call,
            format!("{results} results for {requests} requests"),
        ));
    }
    Ok(())
}

/// Winning candidate of a bridge route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestRoute {
    pub index: usize,
    pub origin_query: Query,
    pub dest_query: Query,
    pub bridge_token: Address,
}

/// Arg-max of destination `min_amount_out` over index-aligned candidates.
/// Strict `>` against a running max that starts at zero: ties keep the earliest
/// candidate and a candidate quoting zero never wins.
pub fn select_best_route(
    candidates: &[BridgeToken],
    origin_queries: &[Query],
    dest_queries: &[Query],
) -> (U256, Option<BestRoute>) {
    let mut max_amount_out = U256::ZERO;
    let mut best = None;
    for (index, dest) in dest_queries.iter().enumerate() {
        if dest.min_amount_out <= max_amount_out {
            continue;
        }
        let (Some(origin), Some(candidate)) = (origin_queries.get(index), candidates.get(index))
        else {
            break;
        };
        max_amount_out = dest.min_amount_out;
        best = Some(BestRoute {
            index,
            origin_query: origin.clone(),
            dest_query: dest.clone(),
            bridge_token: candidate.token,
        });
    }
    (max_amount_out, best)
}

impl SynapseSdk {
    /// Best bridge route from `token_in` on the origin chain to `token_out` on the destination.
    pub async fn bridge_quote(
        &self,
        origin_chain_id: u64,
        dest_chain_id: u64,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        deadline: Option<U256>,
    ) -> Result<BridgeQuote, SdkError> {
        let token_out = self.registry.normalize_token(dest_chain_id, token_out)?;
        let token_in = self.registry.normalize_token(origin_chain_id, token_in)?;
        let origin_router = self.router(origin_chain_id)?;
        let dest_router = self.router(dest_chain_id)?;
        let deadline = resolve_deadline(deadline, self.deadline_secs);

        let bridge_tokens = dest_router.get_connected_bridge_tokens(token_out).await?;
        if bridge_tokens.is_empty() {
            return Err(SdkError::NoRoute {
                origin: origin_chain_id,
                dest: dest_chain_id,
                token_out,
            });
        }

        let candidates: Vec<BridgeToken> = bridge_tokens
            .into_iter()
            .filter(BridgeToken::is_routable)
            .collect();
        let symbols: Vec<String> = candidates.iter().map(|t| t.symbol.clone()).collect();

        let origin_queries = origin_router
            .get_origin_amount_out(token_in, &symbols, amount_in)
            .await?;
        ensure_len(
            origin_chain_id,
            "getOriginAmountOut",
            origin_queries.len(),
            candidates.len(),
        )?;

        // Zero-amount requests stay in to keep the arrays index-aligned.
        let requests: Vec<DestRequest> = candidates
            .iter()
            .zip(origin_queries.iter())
            .map(|(candidate, origin)| DestRequest {
                symbol: candidate.symbol.clone(),
                amount_in: origin.min_amount_out,
            })
            .collect();

        let dest_queries = dest_router
            .get_destination_amount_out(&requests, token_out)
            .await?;
        ensure_len(
            dest_chain_id,
            "getDestinationAmountOut",
            dest_queries.len(),
            requests.len(),
        )?;

        let (max_amount_out, best) = select_best_route(&candidates, &origin_queries, &dest_queries);

        let router_address = origin_router.address();
        let Some(best) = best else {
            tracing::info!(
                target: "sdk",
                origin = origin_chain_id,
                dest = dest_chain_id,
                candidates = candidates.len(),
                "No bridge route beats zero output"
            );
            return Ok(BridgeQuote {
                fee_amount: None,
                fee_config: None,
                router_address,
                max_amount_out,
                origin_query: None,
                dest_query: None,
            });
        };

        let (fee_amount, fee_config) = tokio::try_join!(
            dest_router.calculate_bridge_fee(best.bridge_token, best.origin_query.min_amount_out),
            dest_router.fee(best.bridge_token),
        )?;

        tracing::debug!(
            target: "sdk",
            origin = origin_chain_id,
            dest = dest_chain_id,
            symbol = %candidates[best.index].symbol,
            max_amount_out = %max_amount_out,
            fee_amount = %fee_amount,
            "Selected bridge route"
        );

        Ok(BridgeQuote {
            fee_amount: Some(fee_amount),
            fee_config: Some(fee_config),
            router_address,
            max_amount_out,
            origin_query: Some(best.origin_query.with_deadline(deadline)),
            dest_query: Some(best.dest_query.with_deadline(deadline)),
        })
    }

    /// Single-chain swap quote from the chain's router.
    pub async fn swap_quote(
        &self,
        chain_id: u64,
        token_in: Address,
        token_out: Address,
        amount_in: U256,
        deadline: Option<U256>,
    ) -> Result<SwapQuote, SdkError> {
        let token_out = self.registry.normalize_token(chain_id, token_out)?;
        let token_in = self.registry.normalize_token(chain_id, token_in)?;
        let deadline = resolve_deadline(deadline, self.deadline_secs);
        let router = self.router(chain_id)?;

        let query = router.get_amount_out(token_in, token_out, amount_in).await?;

        Ok(SwapQuote {
            router_address: router.address(),
            max_amount_out: query.min_amount_out,
            query: query.with_deadline(deadline),
        })
    }
}
