// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@on1.no>

use alloy::primitives::U256;
use std::time::{SystemTime, UNIX_EPOCH};

/// Return the current UNIX timestamp in seconds.
pub fn current_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Explicit deadline, or now plus `lifetime_secs`.
pub fn resolve_deadline(deadline: Option<U256>, lifetime_secs: u64) -> U256 {
    deadline.unwrap_or_else(|| U256::from(current_unix().saturating_add(lifetime_secs)))
}
