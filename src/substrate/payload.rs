// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed views of event payloads
//!
//! Each decoder checks the argument count and the kind of every argument,
//! including arguments the handlers do not store, so a runtime upgrade that
//! changes an event's shape fails loudly instead of indexing garbage.

use super::{EventArg, SubstrateEvent};
use crate::errors::HandlerError;
use crate::types::Balance;

/// Payload of `balances.Transfer`: `[from, to, amount]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancesTransfer {
    pub from: String,
    pub to: String,
    pub amount: Balance,
}

impl BalancesTransfer {
    /// Decode from an event's data
    pub fn decode(event: &SubstrateEvent) -> Result<Self, HandlerError> {
        let args = Args::new(event, 3)?;
        Ok(Self {
            from: args.account(0, "from")?,
            to: args.account(1, "to")?,
            amount: args.balance(2, "amount")?,
        })
    }
}

/// Payload of `vtokenMinting.Redeemed`:
/// `[address, token_id, vtoken_amount, token_amount, fee, unlock_id]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VtokenRedeemed {
    pub address: String,
    pub token_id: String,
    pub vtoken_amount: Balance,
    pub token_amount: Balance,
    pub fee: Balance,
    pub unlock_id: u32,
}

impl VtokenRedeemed {
    /// Decode from an event's data
    pub fn decode(event: &SubstrateEvent) -> Result<Self, HandlerError> {
        let args = Args::new(event, 6)?;
        Ok(Self {
            address: args.account(0, "address")?,
            token_id: args.currency(1, "token_id")?,
            vtoken_amount: args.balance(2, "vtoken_amount")?,
            token_amount: args.balance(3, "token_amount")?,
            fee: args.balance(4, "fee")?,
            unlock_id: args.u32(5, "unlock_id")?,
        })
    }
}

/// Positional access to event data with shape errors
struct Args<'a> {
    event: &'a SubstrateEvent,
}

impl<'a> Args<'a> {
    fn new(event: &'a SubstrateEvent, arity: usize) -> Result<Self, HandlerError> {
        if event.data.len() != arity {
            return Err(HandlerError::decode_failed(format!(
                "{event}: expected {arity} arguments, got {}",
                event.data.len()
            )));
        }
        Ok(Self { event })
    }

    fn mismatch(&self, index: usize, name: &str, expected: &str) -> HandlerError {
        HandlerError::decode_failed(format!(
            "{}: argument {index} ({name}) should be {expected}, got {}",
            self.event,
            self.event.data[index].kind()
        ))
    }

    fn account(&self, index: usize, name: &str) -> Result<String, HandlerError> {
        match &self.event.data[index] {
            EventArg::AccountId(address) => Ok(address.clone()),
            _ => Err(self.mismatch(index, name, "AccountId")),
        }
    }

    fn balance(&self, index: usize, name: &str) -> Result<Balance, HandlerError> {
        match &self.event.data[index] {
            EventArg::Balance(amount) => Ok(*amount),
            _ => Err(self.mismatch(index, name, "Balance")),
        }
    }

    fn currency(&self, index: usize, name: &str) -> Result<String, HandlerError> {
        match &self.event.data[index] {
            EventArg::CurrencyId(currency) => Ok(currency.clone()),
            _ => Err(self.mismatch(index, name, "CurrencyId")),
        }
    }

    fn u32(&self, index: usize, name: &str) -> Result<u32, HandlerError> {
        match &self.event.data[index] {
            EventArg::U32(value) => Ok(*value),
            _ => Err(self.mismatch(index, name, "u32")),
        }
    }
}
