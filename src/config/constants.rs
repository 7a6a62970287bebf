// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known network prefixes, event names and environment variables
//!
//! This module centralizes the magic constants used throughout the subledger
//! crate.

/// SS58 network prefixes
pub mod ss58_prefixes {
    /// Generic Substrate prefix (addresses starting with `5`)
    pub const SUBSTRATE: u16 = 42;

    /// Polkadot relay chain
    pub const POLKADOT: u16 = 0;

    /// Kusama relay chain
    pub const KUSAMA: u16 = 2;

    /// Bifrost parachain
    pub const BIFROST: u16 = 6;
}

/// Pallet and event names routed to the Substrate handlers by default
pub mod events {
    /// Pallet emitting balance transfers
    pub const BALANCES_SECTION: &str = "balances";

    /// Balance transfer event, payload `[from, to, amount]`
    pub const TRANSFER_METHOD: &str = "Transfer";

    /// Pallet emitting vtoken redemptions
    pub const VTOKEN_MINTING_SECTION: &str = "vtokenMinting";

    /// Redemption event, payload
    /// `[address, token_id, vtoken_amount, token_amount, fee, unlock_id]`
    pub const REDEEMED_METHOD: &str = "Redeemed";
}

/// Environment variables read by [`IndexerConfig::from_env`](super::IndexerConfig::from_env)
pub mod env {
    /// Expected SS58 prefix of Substrate addresses, e.g. `6`
    pub const SS58_PREFIX: &str = "SUBLEDGER_SS58_PREFIX";

    /// `section.method` routed to the transfer handler
    pub const TRANSFER_EVENT: &str = "SUBLEDGER_TRANSFER_EVENT";

    /// `section.method` routed to the redeem handler
    pub const REDEEM_EVENT: &str = "SUBLEDGER_REDEEM_EVENT";

    /// Comma separated contracts whose `Transfer` logs are indexed
    pub const EVM_TRANSFER_CONTRACTS: &str = "SUBLEDGER_EVM_TRANSFER_CONTRACTS";

    /// Comma separated contracts whose `approve` calls are indexed
    pub const EVM_APPROVE_CONTRACTS: &str = "SUBLEDGER_EVM_APPROVE_CONTRACTS";
}
