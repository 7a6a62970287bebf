// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for subledger handlers.
//!
//! Telemetry concerns are kept out of the handler bodies: each instrumented
//! operation has a span helper here, and the handler instruments its future
//! with the returned span.
//!
//! Every helper takes the parent explicitly. Handlers pass the span injected
//! through [`MappingHandlers::with_parent_span`](crate::MappingHandlers::with_parent_span),
//! or the caller's current span when none was injected, so a host can scope
//! all records of one invocation under its own context.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_handler(&self, input: &Input) -> Result<(), HandlerError> {
//!     let span = spans::my_handler(&self.parent_span(), input.block);
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(span)
//!     .await
//! }
//! ```

use alloy_primitives::{Address, BlockNumber, TxHash};
use tracing::Span;

use crate::entities::EntityKind;

/// Create span for a block hook invocation.
///
/// Parent: injected or current span
/// Children: None
#[inline]
pub(crate) fn handle_block(parent: &Span, block_number: BlockNumber) -> Span {
    tracing::trace_span!(
        parent: parent,
        "subledger.handle_block",
        block_number = block_number,
    )
}

/// Create span for an extrinsic hook invocation.
///
/// Parent: injected or current span
/// Children: None
#[inline]
pub(crate) fn handle_call(
    parent: &Span,
    block_number: BlockNumber,
    extrinsic_index: u32,
    section: &str,
    method: &str,
) -> Span {
    tracing::trace_span!(
        parent: parent,
        "subledger.handle_call",
        block_number = block_number,
        extrinsic_index = extrinsic_index,
        section = section,
        method = method,
    )
}

/// Create span for a balance transfer event.
///
/// Parent: injected or current span
/// Children: resolve_account spans (one per participant)
#[inline]
pub(crate) fn handle_event(parent: &Span, block_number: BlockNumber, event_index: u32) -> Span {
    tracing::info_span!(
        parent: parent,
        "subledger.handle_event",
        block_number = block_number,
        event_index = event_index,
    )
}

/// Create span for a vtoken redemption event.
///
/// Parent: injected or current span
/// Children: resolve_account span
#[inline]
pub(crate) fn handle_redeem_event(
    parent: &Span,
    block_number: BlockNumber,
    event_index: u32,
) -> Span {
    tracing::info_span!(
        parent: parent,
        "subledger.handle_redeem_event",
        block_number = block_number,
        event_index = event_index,
    )
}

/// Create span for resolving (or creating) an account entity.
///
/// Parent: handle_event or handle_redeem_event span
/// Children: None
#[inline]
pub(crate) fn resolve_account(kind: EntityKind, id: &str) -> Span {
    tracing::debug_span!(
        "subledger.resolve_account",
        kind = %kind,
        id = id,
    )
}

/// Create span for an EVM `Transfer` log.
///
/// Parent: injected or current span
/// Children: None
#[inline]
pub(crate) fn handle_frontier_evm_event(
    parent: &Span,
    tx_hash: Option<TxHash>,
    contract: Address,
) -> Span {
    tracing::info_span!(
        parent: parent,
        "subledger.handle_frontier_evm_event",
        tx_hash = ?tx_hash,
        contract = %contract,
    )
}

/// Create span for an EVM `approve` call.
///
/// Parent: injected or current span
/// Children: None
#[inline]
pub(crate) fn handle_frontier_evm_call(
    parent: &Span,
    hash: TxHash,
    contract: Option<Address>,
) -> Span {
    tracing::info_span!(
        parent: parent,
        "subledger.handle_frontier_evm_call",
        hash = %hash,
        contract = ?contract,
    )
}
