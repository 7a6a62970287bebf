// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Input routing
//!
//! [`Dispatcher`] decides which handler, if any, receives a chain input,
//! using the filters in [`IndexerConfig`](crate::IndexerConfig):
//!
//! | Input            | Matched by                                       | Handler                        |
//! |------------------|--------------------------------------------------|--------------------------------|
//! | Substrate event  | `transfer_event` selector                        | `handle_event`                 |
//! | Substrate event  | `redeem_event` selector                          | `handle_redeem_event`          |
//! | EVM log          | `Transfer` topic0, `evm_transfer_contracts`      | `handle_frontier_evm_event`    |
//! | EVM call         | `approve` selector, `evm_approve_contracts`      | `handle_frontier_evm_call`     |
//! | Block            | always                                           | `handle_block`                 |
//! | Extrinsic        | always                                           | `handle_call`                  |
//!
//! Inputs that match nothing are skipped, not treated as errors.

use alloy_primitives::{Address, TxHash};
use alloy_rpc_types::Log;
use std::fmt;
use tracing::debug;

use crate::errors::HandlerError;
use crate::evm::{is_approve_input, is_transfer_log, FrontierEvmCall, FrontierEvmEvent};
use crate::handlers::MappingHandlers;
use crate::store::EntityStore;
use crate::substrate::{SubstrateBlock, SubstrateEvent, SubstrateExtrinsic};

/// Handler an input was routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Block,
    Extrinsic,
    Transfer,
    Redeem,
    EvmTransfer,
    EvmApprove,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::Block => "handle_block",
            Route::Extrinsic => "handle_call",
            Route::Transfer => "handle_event",
            Route::Redeem => "handle_redeem_event",
            Route::EvmTransfer => "handle_frontier_evm_event",
            Route::EvmApprove => "handle_frontier_evm_call",
        };
        f.write_str(name)
    }
}

/// Outcome of dispatching one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The input was handled successfully by this handler
    Handled(Route),
    /// No handler is configured for the input
    Skipped,
}

impl Dispatch {
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatch::Handled(_))
    }
}

/// Routes chain inputs to [`MappingHandlers`]
pub struct Dispatcher<S> {
    handlers: MappingHandlers<S>,
}

impl<S: EntityStore> Dispatcher<S> {
    pub fn new(handlers: MappingHandlers<S>) -> Self {
        Self { handlers }
    }

    /// The wrapped handlers
    pub fn handlers(&self) -> &MappingHandlers<S> {
        &self.handlers
    }

    /// Route a block to the block hook
    pub async fn dispatch_block(&self, block: &SubstrateBlock) -> Result<Dispatch, HandlerError> {
        self.handlers.handle_block(block).await?;
        Ok(Dispatch::Handled(Route::Block))
    }

    /// Route an extrinsic to the call hook
    pub async fn dispatch_extrinsic(
        &self,
        extrinsic: &SubstrateExtrinsic,
    ) -> Result<Dispatch, HandlerError> {
        self.handlers.handle_call(extrinsic).await?;
        Ok(Dispatch::Handled(Route::Extrinsic))
    }

    /// Route a Substrate event by its section and method
    pub async fn dispatch_event(&self, event: &SubstrateEvent) -> Result<Dispatch, HandlerError> {
        let config = self.handlers.config();

        if config.transfer_event.matches(&event.section, &event.method) {
            self.handlers.handle_event(event).await?;
            return Ok(Dispatch::Handled(Route::Transfer));
        }

        if config.redeem_event.matches(&event.section, &event.method) {
            self.handlers.handle_redeem_event(event).await?;
            return Ok(Dispatch::Handled(Route::Redeem));
        }

        debug!(event = %event, "No handler for event");
        Ok(Dispatch::Skipped)
    }

    /// Route an EVM log by topic0 and emitting contract
    pub async fn dispatch_log(&self, log: &Log) -> Result<Dispatch, HandlerError> {
        let contract = log.inner.address;

        if !is_transfer_log(log) {
            debug!(contract = %contract, "Log is not an ERC-20 Transfer");
            return Ok(Dispatch::Skipped);
        }

        if !self.handlers.config().accepts_transfer_contract(contract) {
            debug!(contract = %contract, "Transfer log from unfiltered contract");
            return Ok(Dispatch::Skipped);
        }

        let event = FrontierEvmEvent::from_log(log);
        self.handlers.handle_frontier_evm_event(&event).await?;
        Ok(Dispatch::Handled(Route::EvmTransfer))
    }

    /// Route an EVM call by selector and destination contract
    pub async fn dispatch_call(
        &self,
        hash: TxHash,
        from: Address,
        to: Option<Address>,
        input: &[u8],
    ) -> Result<Dispatch, HandlerError> {
        if !is_approve_input(input) {
            debug!(hash = %hash, "Call is not an approve");
            return Ok(Dispatch::Skipped);
        }

        let config = self.handlers.config();
        let accepted = match to {
            Some(contract) => config.accepts_approve_contract(contract),
            // A call without a target can only match an unfiltered route;
            // the handler then rejects it.
            None => config.evm_approve_contracts.is_empty(),
        };
        if !accepted {
            debug!(hash = %hash, contract = ?to, "Approve call to unfiltered contract");
            return Ok(Dispatch::Skipped);
        }

        let call = FrontierEvmCall::from_input(hash, from, to, input);
        self.handlers.handle_frontier_evm_call(&call).await?;
        Ok(Dispatch::Handled(Route::EvmApprove))
    }
}
