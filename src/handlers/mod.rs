// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Mapping handlers
//!
//! [`MappingHandlers`] turns chain inputs into entity writes. Each handler
//! invocation opens a [`Session`](crate::store::Session) over the store,
//! stages every entity it touches and commits them as one batch at the end,
//! so an error at any step leaves the store as it was.
//!
//! Handlers never loop or retry; they are called once per matching input by
//! the host (directly or through a [`Dispatcher`](crate::Dispatcher)).
//!
//! # Examples
//!
//! ```rust,ignore
//! use subledger::{IndexerConfig, MappingHandlers, MemoryStore};
//!
//! let handlers = MappingHandlers::with_config(MemoryStore::new(), IndexerConfig::from_env()?);
//! for event in block_events {
//!     handlers.handle_event(&event).await?;
//! }
//! ```

use tracing::{trace, Instrument, Span};

use crate::config::IndexerConfig;
use crate::errors::HandlerError;
use crate::spans;
use crate::store::EntityStore;
use crate::substrate::{SubstrateBlock, SubstrateExtrinsic};

mod accounts;
mod evm;
mod substrate;

pub use accounts::{AccountResolver, TrackedAccount};

/// The handler set, bound to one entity store
pub struct MappingHandlers<S> {
    store: S,
    config: IndexerConfig,
    resolver: AccountResolver,
    parent: Option<Span>,
}

impl<S: EntityStore> MappingHandlers<S> {
    /// Create handlers with the default configuration
    pub fn new(store: S) -> Self {
        Self::with_config(store, IndexerConfig::default())
    }

    /// Create handlers with a custom configuration
    pub fn with_config(store: S, config: IndexerConfig) -> Self {
        let resolver = AccountResolver::new(config.ss58_prefix);
        Self {
            store,
            config,
            resolver,
            parent: None,
        }
    }

    /// Record every handler span under `span` instead of the caller's
    /// current span
    pub fn with_parent_span(mut self, span: Span) -> Self {
        self.parent = Some(span);
        self
    }

    /// The configuration handlers were built with
    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// The underlying entity store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the handlers, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    pub(crate) fn parent_span(&self) -> Span {
        self.parent.clone().unwrap_or_else(Span::current)
    }

    /// Block hook. Writes nothing.
    pub async fn handle_block(&self, block: &SubstrateBlock) -> Result<(), HandlerError> {
        let span = spans::handle_block(&self.parent_span(), block.number);
        async move {
            trace!(hash = %block.hash, "Block observed");
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Extrinsic hook. Writes nothing.
    pub async fn handle_call(&self, extrinsic: &SubstrateExtrinsic) -> Result<(), HandlerError> {
        let span = spans::handle_call(
            &self.parent_span(),
            extrinsic.block.number,
            extrinsic.idx,
            &extrinsic.section,
            &extrinsic.method,
        );
        async move {
            trace!(
                signer = extrinsic.signer.as_deref(),
                success = extrinsic.success,
                "Extrinsic observed"
            );
            Ok(())
        }
        .instrument(span)
        .await
    }
}
