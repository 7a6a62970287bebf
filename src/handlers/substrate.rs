// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Substrate event handlers

use tracing::{info, Instrument};

use super::{MappingHandlers, TrackedAccount};
use crate::entities::{Account, RedeemAccount, Redeemed, Transfer};
use crate::errors::HandlerError;
use crate::spans;
use crate::store::{EntityStore, Session};
use crate::substrate::{BalancesTransfer, SubstrateEvent, VtokenRedeemed};
use crate::types::EventId;

impl<S: EntityStore> MappingHandlers<S> {
    /// Index a `balances.Transfer` event.
    ///
    /// Resolves both participants (creating them on first sight), stamps the
    /// block as their latest transfer block and records a [`Transfer`] with
    /// id `{block}-{event index}`. A self-transfer touches one account.
    pub async fn handle_event(&self, event: &SubstrateEvent) -> Result<(), HandlerError> {
        let block_number = event.block_number();
        let span = spans::handle_event(&self.parent_span(), block_number, event.idx);

        async move {
            let BalancesTransfer { from, to, amount } = BalancesTransfer::decode(event)?;
            info!(%from, %to, %amount, "New transfer event found");

            let mut session = Session::new(&self.store);
            let mut from_account: Account = self
                .resolver
                .resolve(&mut session, &from, block_number)
                .await?;
            let mut to_account: Account = self
                .resolver
                .resolve(&mut session, &to, block_number)
                .await?;

            from_account.mark_seen(block_number);
            to_account.mark_seen(block_number);

            let transfer = Transfer {
                id: EventId::new(block_number, event.idx),
                block_number,
                date: event.block.timestamp,
                from_id: from_account.id.clone(),
                to_id: to_account.id.clone(),
                amount,
            };

            session.stage(from_account);
            session.stage(to_account);
            session.stage(transfer);
            session.commit().await?;
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Index a `vtokenMinting.Redeemed` event.
    ///
    /// Resolves the redeeming account, stamps the block as its latest redeem
    /// block and records a [`Redeemed`] carrying both amounts. The token id,
    /// fee and unlock id are decoded for validation only.
    pub async fn handle_redeem_event(&self, event: &SubstrateEvent) -> Result<(), HandlerError> {
        let block_number = event.block_number();
        let span = spans::handle_redeem_event(&self.parent_span(), block_number, event.idx);

        async move {
            let VtokenRedeemed {
                address,
                vtoken_amount,
                token_amount,
                token_id: _,
                fee: _,
                unlock_id: _,
            } = VtokenRedeemed::decode(event)?;
            info!(%address, %vtoken_amount, %token_amount, "New redeem event found");

            let mut session = Session::new(&self.store);
            let mut who: RedeemAccount = self
                .resolver
                .resolve(&mut session, &address, block_number)
                .await?;
            who.mark_seen(block_number);

            let redeemed = Redeemed {
                id: EventId::new(block_number, event.idx),
                block_number,
                date: event.block.timestamp,
                who_id: who.id.clone(),
                vtoken_amount,
                token_amount,
            };

            session.stage(who);
            session.stage(redeemed);
            session.commit().await?;
            Ok(())
        }
        .instrument(span)
        .await
    }
}
