// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Lazy account creation
//!
//! The first time an address shows up in a handled event an account entity
//! is created for it, with the public key decoded from the address and the
//! current block as its first block. Later lookups of the same identity
//! return the existing entity untouched; stamping the latest block is left
//! to the handler.

use alloy_primitives::BlockNumber;
use tracing::{debug, Instrument};

use crate::entities::{Account, Entity, RedeemAccount};
use crate::errors::HandlerError;
use crate::spans;
use crate::ss58::decode_address;
use crate::store::{EntityStore, Session};
use crate::types::{NormalizationPolicy, PublicKey};

/// An account entity created on first sight of its address
pub trait TrackedAccount: Entity {
    /// How an address is turned into the entity id
    const POLICY: NormalizationPolicy;

    /// New entity first seen at `block`
    fn create(id: String, public_key: PublicKey, block: BlockNumber) -> Self;

    /// Record activity at `block`
    fn mark_seen(&mut self, block: BlockNumber);
}

impl TrackedAccount for Account {
    const POLICY: NormalizationPolicy = NormalizationPolicy::Lowercase;

    fn create(id: String, public_key: PublicKey, block: BlockNumber) -> Self {
        Account {
            id,
            public_key,
            first_transfer_block: block,
            last_transfer_block: None,
        }
    }

    fn mark_seen(&mut self, block: BlockNumber) {
        self.last_transfer_block = Some(block);
    }
}

impl TrackedAccount for RedeemAccount {
    const POLICY: NormalizationPolicy = NormalizationPolicy::Preserve;

    fn create(id: String, public_key: PublicKey, block: BlockNumber) -> Self {
        RedeemAccount {
            id,
            public_key,
            first_redeem_block: block,
            last_redeem_block: None,
        }
    }

    fn mark_seen(&mut self, block: BlockNumber) {
        self.last_redeem_block = Some(block);
    }
}

/// Finds or creates account entities within a handler session
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountResolver {
    ss58_prefix: Option<u16>,
}

impl AccountResolver {
    /// Resolver accepting addresses of `ss58_prefix`, or of any network
    /// when `None`
    pub fn new(ss58_prefix: Option<u16>) -> Self {
        Self { ss58_prefix }
    }

    /// Network prefix addresses must carry
    pub fn ss58_prefix(&self) -> Option<u16> {
        self.ss58_prefix
    }

    /// Return the account for `address`, creating it at `block` if needed.
    ///
    /// A created account is staged in `session`, so it is persisted with the
    /// rest of the invocation's writes and found again by a second lookup in
    /// the same invocation. Fails without staging anything when the address
    /// cannot be decoded.
    pub async fn resolve<A, S>(
        &self,
        session: &mut Session<'_, S>,
        address: &str,
        block: BlockNumber,
    ) -> Result<A, HandlerError>
    where
        A: TrackedAccount,
        S: EntityStore + ?Sized,
    {
        let id = A::POLICY.normalize(address);
        let span = spans::resolve_account(A::KIND, &id);

        async move {
            if let Some(existing) = session.get::<A>(&id).await? {
                return Ok(existing);
            }

            let public_key = decode_address(address, self.ss58_prefix)?;
            debug!(block_number = block, public_key = %public_key, "Creating account");

            let account = A::create(id, public_key, block);
            session.stage(account.clone());
            Ok(account)
        }
        .instrument(span)
        .await
    }
}
