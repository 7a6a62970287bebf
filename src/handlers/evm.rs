// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Frontier EVM handlers

use tracing::{info, Instrument};

use super::MappingHandlers;
use crate::entities::{Approval, Transaction};
use crate::errors::HandlerError;
use crate::evm::{FrontierEvmCall, FrontierEvmEvent};
use crate::spans;
use crate::store::{EntityStore, EntityStoreExt};

impl<S: EntityStore> MappingHandlers<S> {
    /// Index an ERC-20 `Transfer` log as a [`Transaction`] keyed by its
    /// transaction hash.
    ///
    /// Fails with a precondition error, writing nothing, when the log has no
    /// transaction hash or could not be decoded. Several `Transfer` logs in
    /// one transaction share an id; the last one handled is kept.
    pub async fn handle_frontier_evm_event(
        &self,
        event: &FrontierEvmEvent,
    ) -> Result<(), HandlerError> {
        let span = spans::handle_frontier_evm_event(
            &self.parent_span(),
            event.transaction_hash,
            event.address,
        );

        async move {
            let tx_hash = event
                .transaction_hash
                .ok_or_else(|| HandlerError::precondition("No transactionHash"))?;
            let args = event
                .args
                .ok_or_else(|| HandlerError::precondition("No event.args"))?;

            info!(from = %args.from, to = %args.to, value = %args.value, "New EVM transfer log found");

            self.store
                .save(Transaction {
                    id: tx_hash,
                    value: args.value,
                    from: args.from,
                    to: args.to,
                    contract_address: event.address,
                })
                .await?;
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Index an ERC-20 `approve` call as an [`Approval`] keyed by the call
    /// hash. The caller is the owner and the called contract is the token.
    ///
    /// Fails with a precondition error, writing nothing, when the input
    /// could not be decoded or the call has no target.
    pub async fn handle_frontier_evm_call(
        &self,
        call: &FrontierEvmCall,
    ) -> Result<(), HandlerError> {
        let span = spans::handle_frontier_evm_call(&self.parent_span(), call.hash, call.to);

        async move {
            let args = call
                .args
                .ok_or_else(|| HandlerError::precondition("No event.args"))?;
            let contract = call
                .to
                .ok_or_else(|| HandlerError::precondition("No event.to"))?;

            info!(owner = %call.from, spender = %args.spender, value = %args.value, "New EVM approve call found");

            self.store
                .save(Approval {
                    id: call.hash,
                    owner: call.from,
                    value: args.value,
                    spender: args.spender,
                    contract_address: contract,
                })
                .await?;
            Ok(())
        }
        .instrument(span)
        .await
    }
}
