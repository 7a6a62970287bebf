// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Substrate inputs handed to the mapping handlers by the host
//!
//! The host has already fetched and decoded the block; these types carry the
//! fields the handlers read. Event payload arguments arrive as [`EventArg`]s
//! and are checked against the expected shape by the decoders in
//! [`payload`].

use alloy_primitives::{BlockNumber, B256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Balance;

pub mod payload;

pub use payload::{BalancesTransfer, VtokenRedeemed};

/// A block being replayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstrateBlock {
    pub number: BlockNumber,
    pub hash: B256,
    /// Timestamp set by the block author
    pub timestamp: DateTime<Utc>,
}

/// One decoded argument of an event payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum EventArg {
    /// Account address as rendered by the chain (SS58 or hex)
    AccountId(String),
    /// Amount in the smallest unit
    Balance(Balance),
    /// Currency identifier, e.g. `{"VToken":"KSM"}` rendered as a string
    CurrencyId(String),
    /// Small unsigned integer (indices, ids)
    U32(u32),
}

impl EventArg {
    /// Name of the argument kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            EventArg::AccountId(_) => "AccountId",
            EventArg::Balance(_) => "Balance",
            EventArg::CurrencyId(_) => "CurrencyId",
            EventArg::U32(_) => "u32",
        }
    }
}

/// An event emitted in a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstrateEvent {
    pub block: SubstrateBlock,
    /// Position of the event within its block
    pub idx: u32,
    /// Pallet name, e.g. `balances`
    pub section: String,
    /// Event name, e.g. `Transfer`
    pub method: String,
    pub data: Vec<EventArg>,
}

impl SubstrateEvent {
    /// Number of the enclosing block
    pub fn block_number(&self) -> BlockNumber {
        self.block.number
    }
}

impl fmt::Display for SubstrateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}@{}-{}",
            self.section, self.method, self.block.number, self.idx
        )
    }
}

/// An extrinsic included in a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstrateExtrinsic {
    pub block: SubstrateBlock,
    /// Position of the extrinsic within its block
    pub idx: u32,
    pub section: String,
    pub method: String,
    /// Signing account, absent for inherents
    pub signer: Option<String>,
    pub success: bool,
}
