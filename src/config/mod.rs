// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for subledger handlers
//!
//! This module controls which chain inputs are routed to which handler and
//! how strictly addresses are validated. In a hosted deployment these
//! settings play the part of the project manifest's handler filters.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use subledger::IndexerConfig;
//!
//! // balances.Transfer and vtokenMinting.Redeemed, any SS58 prefix, any contract
//! let config = IndexerConfig::default();
//! assert!(config.ss58_prefix.is_none());
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use subledger::{IndexerConfigBuilder, config::constants::ss58_prefixes};
//! use alloy_primitives::address;
//!
//! let config = IndexerConfigBuilder::with_defaults()
//!     .ss58_prefix(ss58_prefixes::BIFROST)
//!     .evm_transfer_contract(address!("6bd193ee6d2104f14f94e2ca6efefae561a4334b"))
//!     .build();
//! ```

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;

use crate::errors::{ConfigError, ParseEventSelectorError};

pub mod constants;

use constants::{env, events};

/// Pallet section and event method identifying a Substrate event
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventSelector {
    /// Pallet name, e.g. `balances`
    pub section: String,
    /// Event name, e.g. `Transfer`
    pub method: String,
}

impl EventSelector {
    /// Creates a selector
    pub fn new(section: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            method: method.into(),
        }
    }

    /// Whether an event with this section and method is selected
    pub fn matches(&self, section: &str, method: &str) -> bool {
        self.section == section && self.method == method
    }
}

impl fmt::Display for EventSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.method)
    }
}

impl FromStr for EventSelector {
    type Err = ParseEventSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('.') {
            Some((section, method)) if !section.is_empty() && !method.is_empty() => {
                Ok(Self::new(section, method))
            }
            _ => Err(ParseEventSelectorError::new(s)),
        }
    }
}

/// Configuration for mapping handlers and the dispatcher
///
/// Use [`IndexerConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Expected SS58 prefix of Substrate addresses
    /// Default: None (any network)
    pub ss58_prefix: Option<u16>,

    /// Event routed to the balance transfer handler
    /// Default: `balances.Transfer`
    pub transfer_event: EventSelector,

    /// Event routed to the redeem handler
    /// Default: `vtokenMinting.Redeemed`
    pub redeem_event: EventSelector,

    /// Contracts whose `Transfer` logs are indexed
    /// Default: empty (every contract)
    pub evm_transfer_contracts: Vec<Address>,

    /// Contracts whose `approve` calls are indexed
    /// Default: empty (every contract)
    pub evm_approve_contracts: Vec<Address>,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            ss58_prefix: None,
            transfer_event: EventSelector::new(events::BALANCES_SECTION, events::TRANSFER_METHOD),
            redeem_event: EventSelector::new(
                events::VTOKEN_MINTING_SECTION,
                events::REDEEMED_METHOD,
            ),
            evm_transfer_contracts: Vec::new(),
            evm_approve_contracts: Vec::new(),
        }
    }
}

impl IndexerConfig {
    /// Load configuration from the process environment (and a `.env` file
    /// if one is present), falling back to defaults for unset variables.
    ///
    /// See [`constants::env`] for the variable names.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = IndexerConfigBuilder::with_defaults();

        if let Some(raw) = lookup(env::SS58_PREFIX) {
            let prefix = raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid_value(env::SS58_PREFIX, &raw, e.to_string()))?;
            builder = builder.ss58_prefix(prefix);
        }

        if let Some(raw) = lookup(env::TRANSFER_EVENT) {
            let selector = raw.parse().map_err(|e: ParseEventSelectorError| {
                ConfigError::invalid_value(env::TRANSFER_EVENT, &raw, e.to_string())
            })?;
            builder = builder.transfer_event(selector);
        }

        if let Some(raw) = lookup(env::REDEEM_EVENT) {
            let selector = raw.parse().map_err(|e: ParseEventSelectorError| {
                ConfigError::invalid_value(env::REDEEM_EVENT, &raw, e.to_string())
            })?;
            builder = builder.redeem_event(selector);
        }

        if let Some(raw) = lookup(env::EVM_TRANSFER_CONTRACTS) {
            for contract in parse_addresses(env::EVM_TRANSFER_CONTRACTS, &raw)? {
                builder = builder.evm_transfer_contract(contract);
            }
        }

        if let Some(raw) = lookup(env::EVM_APPROVE_CONTRACTS) {
            for contract in parse_addresses(env::EVM_APPROVE_CONTRACTS, &raw)? {
                builder = builder.evm_approve_contract(contract);
            }
        }

        Ok(builder.build())
    }

    /// Whether `Transfer` logs emitted by `contract` are indexed
    pub fn accepts_transfer_contract(&self, contract: Address) -> bool {
        self.evm_transfer_contracts.is_empty() || self.evm_transfer_contracts.contains(&contract)
    }

    /// Whether `approve` calls sent to `contract` are indexed
    pub fn accepts_approve_contract(&self, contract: Address) -> bool {
        self.evm_approve_contracts.is_empty() || self.evm_approve_contracts.contains(&contract)
    }
}

fn parse_addresses(field: &str, raw: &str) -> Result<Vec<Address>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Address>()
                .map_err(|e| ConfigError::invalid_value(field, s, e.to_string()))
        })
        .collect()
}

/// Builder for [`IndexerConfig`]
///
/// # Example
///
/// ```rust
/// use subledger::{EventSelector, IndexerConfigBuilder};
///
/// let config = IndexerConfigBuilder::new()
///     .ss58_prefix(6)
///     .redeem_event(EventSelector::new("vtokenMinting", "RedeemSuccess"))
///     .build();
/// ```
pub struct IndexerConfigBuilder {
    config: IndexerConfig,
}

impl Default for IndexerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexerConfigBuilder {
    /// Create a new builder with default routing
    pub fn new() -> Self {
        Self::with_defaults()
    }

    /// Start with [`IndexerConfig::default`]
    pub fn with_defaults() -> Self {
        Self {
            config: IndexerConfig::default(),
        }
    }

    /// Require Substrate addresses to carry this SS58 prefix
    pub fn ss58_prefix(mut self, prefix: u16) -> Self {
        self.config.ss58_prefix = Some(prefix);
        self
    }

    /// Route a different event to the transfer handler
    pub fn transfer_event(mut self, selector: EventSelector) -> Self {
        self.config.transfer_event = selector;
        self
    }

    /// Route a different event to the redeem handler
    pub fn redeem_event(mut self, selector: EventSelector) -> Self {
        self.config.redeem_event = selector;
        self
    }

    /// Index `Transfer` logs from this contract (may be called repeatedly)
    pub fn evm_transfer_contract(mut self, contract: Address) -> Self {
        if !self.config.evm_transfer_contracts.contains(&contract) {
            self.config.evm_transfer_contracts.push(contract);
        }
        self
    }

    /// Index `approve` calls to this contract (may be called repeatedly)
    pub fn evm_approve_contract(mut self, contract: Address) -> Self {
        if !self.config.evm_approve_contracts.contains(&contract) {
            self.config.evm_approve_contracts.push(contract);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> IndexerConfig {
        self.config
    }
}
