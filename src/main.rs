// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use alloy::primitives::U256;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use synapse_router::app::config::Settings;
use synapse_router::app::http;
use synapse_router::app::logging::setup_logging;
use synapse_router::common::parsing::{parse_address, parse_amount};
use synapse_router::domain::error::SdkError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Synapse bridge/swap quote SDK")]
struct Cli {
    /// Config file path; falls back to `config.{toml,yaml,json}` in the working directory
    #[arg(long, global = true, env = "SYNAPSE_CONFIG")]
    config: Option<String>,

    /// Emit JSON logs
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP quote API
    Serve {
        /// Bind address (overrides config/env)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Quote a single-chain swap
    SwapQuote {
        #[arg(long)]
        chain: u64,
        #[arg(long)]
        token_in: String,
        #[arg(long)]
        token_out: String,
        /// Amount in base units (decimal or 0x-hex)
        #[arg(long)]
        amount: String,
        /// Unix deadline; defaults to now + configured lifetime
        #[arg(long)]
        deadline: Option<u64>,
    },
    /// Quote the best bridge route between two chains
    BridgeQuote {
        #[arg(long)]
        from_chain: u64,
        #[arg(long)]
        to_chain: u64,
        #[arg(long)]
        token_in: String,
        #[arg(long)]
        token_out: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        deadline: Option<u64>,
    },
    /// List the router's pools on a chain
    Pools {
        #[arg(long)]
        chain: u64,
    },
    /// Gas airdrop amount of the chain's bridge
    BridgeGas {
        #[arg(long)]
        chain: u64,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), SdkError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| SdkError::Unknown(anyhow::anyhow!("JSON encode failed: {e}")))?;
    println!("{out}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    let cli = Cli::parse();

    let settings = Settings::load_with_path(cli.config.as_deref())?;
    setup_logging(&settings.log_filter(), cli.log_json || settings.log_json);

    let sdk = settings.build_sdk()?;

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.http_bind.clone());
            http::serve(&bind, Arc::new(sdk)).await?;
        }
        Command::SwapQuote {
            chain,
            token_in,
            token_out,
            amount,
            deadline,
        } => {
            let quote = sdk
                .swap_quote(
                    chain,
                    parse_address(&token_in)?,
                    parse_address(&token_out)?,
                    parse_amount("amount", &amount)?,
                    deadline.map(U256::from),
                )
                .await?;
            print_json(&quote)?;
        }
        Command::BridgeQuote {
            from_chain,
            to_chain,
            token_in,
            token_out,
            amount,
            deadline,
        } => {
            let quote = sdk
                .bridge_quote(
                    from_chain,
                    to_chain,
                    parse_address(&token_in)?,
                    parse_address(&token_out)?,
                    parse_amount("amount", &amount)?,
                    deadline.map(U256::from),
                )
                .await?;
            if !quote.has_route() {
                tracing::warn!(from_chain, to_chain, "No bridge route found");
            }
            print_json(&quote)?;
        }
        Command::Pools { chain } => {
            let pools = sdk.get_all_pools(chain).await?;
            print_json(&pools)?;
        }
        Command::BridgeGas { chain } => {
            let gas = sdk.get_bridge_gas(chain).await?;
            print_json(&gas.to_string())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_path_comes_from_flag_or_env() {
        unsafe { std::env::remove_var("SYNAPSE_CONFIG") };
        let cli = Cli::try_parse_from(["synapse-router", "pools", "--chain", "42161"]).unwrap();
        assert_eq!(cli.config, None);

        unsafe { std::env::set_var("SYNAPSE_CONFIG", "from-env.toml") };
        let cli = Cli::try_parse_from(["synapse-router", "pools", "--chain", "42161"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("from-env.toml"));

        let cli = Cli::try_parse_from([
            "synapse-router",
            "--config",
            "flag.toml",
            "bridge-gas",
            "--chain",
            "42161",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("flag.toml"));
        unsafe { std::env::remove_var("SYNAPSE_CONFIG") };
        assert!(Cli::command().render_help().to_string().contains("SYNAPSE_CONFIG"));
    }
}
