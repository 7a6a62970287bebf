// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Frontier EVM inputs handed to the mapping handlers by the host
//!
//! A Frontier chain runs an EVM on top of Substrate; the host surfaces its
//! logs and calls the way an Ethereum indexer would. Decoded arguments are
//! optional: when a log or call does not match the expected ABI the input
//! still reaches the handler, which then refuses to record it.
//!
//! # Examples
//!
//! ```rust,ignore
//! use subledger::evm::FrontierEvmEvent;
//!
//! for log in logs {
//!     let event = FrontierEvmEvent::from_log(&log);
//!     handlers.handle_frontier_evm_event(&event).await?;
//! }
//! ```

use alloy_primitives::{Address, BlockNumber, FixedBytes, TxHash, B256, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::{SolCall, SolEvent};
use serde::{Deserialize, Serialize};

pub mod abi;

pub use abi::{APPROVE_FUNCTION_SIGNATURE, TRANSFER_EVENT_SIGNATURE};

/// Topic0 of an ERC-20 `Transfer` log
pub const TRANSFER_TOPIC: B256 = abi::Transfer::SIGNATURE_HASH;

/// 4-byte selector of `approve(address,uint256)`
pub const APPROVE_SELECTOR: FixedBytes<4> = FixedBytes(abi::approveCall::SELECTOR);

/// Decoded arguments of a `Transfer(from, to, value)` log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferArgs {
    pub from: Address,
    pub to: Address,
    pub value: U256,
}

impl From<abi::Transfer> for TransferArgs {
    fn from(event: abi::Transfer) -> Self {
        Self {
            from: event.from,
            to: event.to,
            value: event.value,
        }
    }
}

/// Decoded arguments of an `approve(_spender, _value)` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveArgs {
    pub spender: Address,
    pub value: U256,
}

impl From<abi::approveCall> for ApproveArgs {
    fn from(call: abi::approveCall) -> Self {
        Self {
            spender: call._spender,
            value: call._value,
        }
    }
}

/// A log emitted by an EVM contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontierEvmEvent {
    /// Emitting contract
    pub address: Address,
    pub transaction_hash: Option<TxHash>,
    pub block_number: Option<BlockNumber>,
    pub log_index: Option<u64>,
    /// `None` when the log is not an ERC-20 `Transfer`
    pub args: Option<TransferArgs>,
}

impl FrontierEvmEvent {
    /// Build from an RPC log, decoding it as an ERC-20 `Transfer`
    pub fn from_log(log: &Log) -> Self {
        let args = abi::Transfer::decode_log(&log.inner)
            .ok()
            .map(|decoded| TransferArgs::from(decoded.data));

        Self {
            address: log.inner.address,
            transaction_hash: log.transaction_hash,
            block_number: log.block_number,
            log_index: log.log_index,
            args,
        }
    }
}

/// A call into an EVM contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontierEvmCall {
    pub hash: TxHash,
    /// Caller
    pub from: Address,
    /// Called contract; `None` for contract creation
    pub to: Option<Address>,
    /// `None` when the input is not an `approve` call
    pub args: Option<ApproveArgs>,
}

impl FrontierEvmCall {
    /// Build from raw call fields, decoding the input as `approve`
    pub fn from_input(hash: TxHash, from: Address, to: Option<Address>, input: &[u8]) -> Self {
        let args = abi::approveCall::abi_decode(input)
            .ok()
            .map(ApproveArgs::from);

        Self {
            hash,
            from,
            to,
            args,
        }
    }
}

/// Whether `log` carries the ERC-20 `Transfer` signature in topic0
pub fn is_transfer_log(log: &Log) -> bool {
    log.inner.data.topics().first() == Some(&TRANSFER_TOPIC)
}

/// Whether `input` starts with the `approve` selector
pub fn is_approve_input(input: &[u8]) -> bool {
    input.len() >= 4 && input[..4] == APPROVE_SELECTOR[..]
}
