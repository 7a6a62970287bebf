// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Indexed entities
//!
//! Six entity kinds are written by the mapping handlers:
//!
//! | Entity            | Id                         | Written by                  |
//! |-------------------|----------------------------|-----------------------------|
//! | [`Account`]       | lowercased address         | balance transfers           |
//! | [`RedeemAccount`] | address, case preserved    | vtoken redemptions          |
//! | [`Transfer`]      | `{block}-{event index}`    | balance transfers           |
//! | [`Redeemed`]      | `{block}-{event index}`    | vtoken redemptions          |
//! | [`Transaction`]   | transaction hash           | EVM `Transfer` logs         |
//! | [`Approval`]      | call hash                  | EVM `approve` calls         |
//!
//! Accounts are created lazily and updated in place; everything else is
//! written once and never changed.

use alloy_primitives::{Address, BlockNumber, TxHash, B256, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Balance, EventId, PublicKey};

/// Discriminates the entity kinds a store holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Account,
    RedeemAccount,
    Transfer,
    Redeemed,
    Transaction,
    Approval,
}

impl EntityKind {
    /// All kinds, in declaration order
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Account,
        EntityKind::RedeemAccount,
        EntityKind::Transfer,
        EntityKind::Redeemed,
        EntityKind::Transaction,
        EntityKind::Approval,
    ];

    /// Entity name as a host schema would spell it
    pub const fn name(&self) -> &'static str {
        match self {
            EntityKind::Account => "Account",
            EntityKind::RedeemAccount => "RedeemAccount",
            EntityKind::Transfer => "Transfer",
            EntityKind::Redeemed => "Redeemed",
            EntityKind::Transaction => "Transaction",
            EntityKind::Approval => "Approval",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An account touched by a balance transfer.
///
/// The id is the lowercased address, so case variants of one address share
/// an entity. The public key is decoded from the address as the chain
/// reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub public_key: PublicKey,
    pub first_transfer_block: BlockNumber,
    pub last_transfer_block: Option<BlockNumber>,
}

/// An account that redeemed vtokens.
///
/// Tracked independently of [`Account`]; the id keeps the address's case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemAccount {
    pub id: String,
    pub public_key: PublicKey,
    pub first_redeem_block: BlockNumber,
    pub last_redeem_block: Option<BlockNumber>,
}

/// A balance transfer between two [`Account`]s
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: EventId,
    pub block_number: BlockNumber,
    pub date: DateTime<Utc>,
    pub from_id: String,
    pub to_id: String,
    pub amount: Balance,
}

/// A vtoken redemption by a [`RedeemAccount`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redeemed {
    pub id: EventId,
    #[serde(rename = "blockNumber")]
    pub block_number: BlockNumber,
    pub date: DateTime<Utc>,
    #[serde(rename = "whoId")]
    pub who_id: String,
    /// Amount of vtoken burned
    pub vtoken_amount: Balance,
    /// Amount of underlying token released
    pub token_amount: Balance,
}

/// An ERC-20 `Transfer` log emitted through the Frontier EVM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TxHash,
    pub value: U256,
    pub from: Address,
    pub to: Address,
    pub contract_address: Address,
}

/// An ERC-20 `approve` call made through the Frontier EVM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub id: B256,
    pub owner: Address,
    pub value: U256,
    pub spender: Address,
    pub contract_address: Address,
}

/// Any entity, as held by a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity")]
pub enum Record {
    Account(Account),
    RedeemAccount(RedeemAccount),
    Transfer(Transfer),
    Redeemed(Redeemed),
    Transaction(Transaction),
    Approval(Approval),
}

impl Record {
    /// Kind of the wrapped entity
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Account(_) => EntityKind::Account,
            Record::RedeemAccount(_) => EntityKind::RedeemAccount,
            Record::Transfer(_) => EntityKind::Transfer,
            Record::Redeemed(_) => EntityKind::Redeemed,
            Record::Transaction(_) => EntityKind::Transaction,
            Record::Approval(_) => EntityKind::Approval,
        }
    }

    /// Store id of the wrapped entity
    pub fn id(&self) -> String {
        match self {
            Record::Account(e) => e.entity_id(),
            Record::RedeemAccount(e) => e.entity_id(),
            Record::Transfer(e) => e.entity_id(),
            Record::Redeemed(e) => e.entity_id(),
            Record::Transaction(e) => e.entity_id(),
            Record::Approval(e) => e.entity_id(),
        }
    }
}

/// A typed entity that can be stored as a [`Record`].
///
/// Stores key records by `(KIND, entity_id())`.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Kind tag for this entity type
    const KIND: EntityKind;

    /// Id the entity is stored under
    fn entity_id(&self) -> String;

    /// Wrap into a [`Record`]
    fn into_record(self) -> Record;

    /// Unwrap from a [`Record`], handing the record back if the kind differs
    fn from_record(record: Record) -> Result<Self, Record>;
}

macro_rules! impl_entity {
    ($ty:ident, |$e:ident| $id:expr) => {
        impl Entity for $ty {
            const KIND: EntityKind = EntityKind::$ty;

            fn entity_id(&self) -> String {
                let $e = self;
                $id
            }

            fn into_record(self) -> Record {
                Record::$ty(self)
            }

            fn from_record(record: Record) -> Result<Self, Record> {
                match record {
                    Record::$ty(entity) => Ok(entity),
                    other => Err(other),
                }
            }
        }
    };
}

impl_entity!(Account, |e| e.id.clone());
impl_entity!(RedeemAccount, |e| e.id.clone());
impl_entity!(Transfer, |e| e.id.to_string());
impl_entity!(Redeemed, |e| e.id.to_string());
impl_entity!(Transaction, |e| e.id.to_string());
impl_entity!(Approval, |e| e.id.to_string());
