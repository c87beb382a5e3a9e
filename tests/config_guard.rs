// SPDX-License-Identifier: MIT
use regex::Regex;
use std::fs;
use std::path::Path;

/// Fail CI if config files contain 64-hex private keys or obvious secrets.
#[test]
fn no_committed_hex_keys_in_configs() {
    let re = Regex::new(r"0x?[a-fA-F0-9]{64}").unwrap();
    let candidates = ["config.toml", "config.example.toml", ".env", ".env.example"];
    for file in candidates {
        if !Path::new(file).exists() {
            continue;
        }
        let body = fs::read_to_string(file).expect("read config");
        for (idx, line) in body.lines().enumerate() {
            if re.is_match(line) {
                panic!("Secret-looking hex in {} at line {}", file, idx + 1);
            }
        }
    }
}

/// RPC URLs with embedded API keys belong in the environment, not in tracked files.
#[test]
fn example_config_has_no_keyed_rpc_urls() {
    let re = Regex::new(r"(?i)(apikey|api_key|/v2/|/v3/)[a-z0-9_-]{16,}").unwrap();
    let file = "config.example.toml";
    if !Path::new(file).exists() {
        return;
    }
    let body = fs::read_to_string(file).expect("read config");
    for (idx, line) in body.lines().enumerate() {
        assert!(
            !re.is_match(line),
            "Keyed RPC URL in {} at line {}",
            file,
            idx + 1
        );
    }
}
