// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@on1.no>

use crate::common::parsing::{parse_address, parse_amount, parse_chain_id};
use crate::domain::constants::chain_name;
use crate::domain::error::SdkError;
use crate::domain::types::{BridgeQuote, SwapQuote};
use crate::services::sdk::SynapseSdk;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub sdk: Arc<SynapseSdk>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
pub struct ChainSummary {
    pub chain_id: u64,
    pub name: &'static str,
    pub router_address: String,
}

pub struct ApiError(pub SdkError);

impl From<SdkError> for ApiError {
    fn from(err: SdkError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            SdkError::NoRoute { .. } => (StatusCode::BAD_REQUEST, "NO_ROUTE"),
            SdkError::UnsupportedChain(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_CHAIN"),
            SdkError::InvalidAddress(_) | SdkError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            SdkError::Contract { .. } => (StatusCode::BAD_GATEWAY, "CONTRACT_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };
        if status.is_server_error() {
            tracing::warn!(target: "http", error = %self.0, "Quote request failed");
        }
        let body = ErrorResponse {
            error: code.to_string(),
            message: self.0.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_chains))
        .route("/swap/{chain}/{from_token}/{to_token}/{amount}", get(swap_quote))
        .route(
            "/bridge/{from_chain}/{to_chain}/{from_token}/{to_token}/{amount}",
            get(bridge_quote),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - configured chains and their routers
async fn list_chains(State(state): State<AppState>) -> Result<Json<Vec<ChainSummary>>, ApiError> {
    let registry = state.sdk.registry();
    let chains = registry
        .chain_ids()
        .into_iter()
        .map(|chain_id| {
            let router = registry.router(chain_id)?;
            Ok(ChainSummary {
                chain_id,
                name: chain_name(chain_id),
                router_address: format!("{:#x}", router.address()),
            })
        })
        .collect::<Result<Vec<_>, SdkError>>()?;
    Ok(Json(chains))
}

/// GET /swap/{chain}/{from_token}/{to_token}/{amount}
async fn swap_quote(
    State(state): State<AppState>,
    Path((chain, from_token, to_token, amount)): Path<(String, String, String, String)>,
) -> Result<Json<SwapQuote>, ApiError> {
    let chain_id = parse_chain_id("chain", &chain)?;
    let token_in = parse_address(&from_token)?;
    let token_out = parse_address(&to_token)?;
    let amount_in = parse_amount("amount", &amount)?;

    tracing::info!(
        target: "http",
        chain_id,
        %token_in,
        %token_out,
        %amount_in,
        "Swap quote request"
    );
    let quote = state
        .sdk
        .swap_quote(chain_id, token_in, token_out, amount_in, None)
        .await?;
    Ok(Json(quote))
}

/// GET /bridge/{from_chain}/{to_chain}/{from_token}/{to_token}/{amount}
async fn bridge_quote(
    State(state): State<AppState>,
    Path((from_chain, to_chain, from_token, to_token, amount)): Path<(
        String,
        String,
        String,
        String,
        String,
    )>,
) -> Result<Json<BridgeQuote>, ApiError> {
    let origin = parse_chain_id("fromChain", &from_chain)?;
    let dest = parse_chain_id("toChain", &to_chain)?;
    let token_in = parse_address(&from_token)?;
    let token_out = parse_address(&to_token)?;
    let amount_in = parse_amount("amount", &amount)?;

    tracing::info!(
        target: "http",
        origin,
        dest,
        %token_in,
        %token_out,
        %amount_in,
        "Bridge quote request"
    );
    let quote = state
        .sdk
        .bridge_quote(origin, dest, token_in, token_out, amount_in, None)
        .await?;
    Ok(Json(quote))
}

pub async fn serve(bind: &str, sdk: Arc<SynapseSdk>) -> Result<(), SdkError> {
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|e| SdkError::Config(format!("HTTP server failed to bind {bind}: {e}")))?;
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(target: "http", %addr, "Quote API listening");
    }
    let app = create_router(AppState { sdk });
    axum::serve(listener, app)
        .await
        .map_err(|e| SdkError::Unknown(anyhow::anyhow!("HTTP server stopped: {e}")))
}
