// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for subledger integration tests
//!
//! Provides input fixtures and store implementations that let the handlers
//! be exercised without a real indexing host.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use alloy_primitives::{Address, LogData, B256, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::{sol, SolCall, SolEvent};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use subledger::store::{EntityKey, WriteBatch};
use subledger::substrate::{EventArg, SubstrateBlock, SubstrateEvent, SubstrateExtrinsic};
use subledger::{Balance, EntityStore, MemoryStore, Record, StoreError, StoreStats};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Alice's well-known dev account on the generic Substrate network (prefix 42)
pub const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
/// Alice's public key
pub const ALICE_KEY: &str = "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";
/// Alice's public key as stored on entities, comma-joined decimal bytes
pub const ALICE_KEY_BYTES: &str = "212,53,147,199,21,253,211,28,97,20,26,189,4,169,159,214,\
                                   130,44,133,88,133,76,205,227,154,86,132,231,165,109,162,125";
/// Alice on Bifrost (prefix 6)
pub const ALICE_BIFROST: &str = "gXCcrjjFX3RPyhHYgwZDmw8oe4JFpd5anko3nTY8VrmnJpe";

/// Bob's well-known dev account on the generic Substrate network (prefix 42)
pub const BOB: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";
/// Bob's public key
pub const BOB_KEY: &str = "0x8eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a48";
/// Bob on Bifrost (prefix 6)
pub const BOB_BIFROST: &str = "ex3LnZb7o3XEyCn7kycUS2Aho3QoHDk5xcTzRKs4WwY1MvQ";

sol! {
    event Transfer(address indexed from, address indexed to, uint256 value);
    event Approval(address indexed owner, address indexed spender, uint256 value);
    function approve(address _spender, uint256 _value) external returns (bool);
}

/// A block at `number` with a fixed timestamp
pub fn block(number: u64) -> SubstrateBlock {
    SubstrateBlock {
        number,
        hash: B256::with_last_byte(number as u8),
        timestamp: Utc
            .timestamp_opt(1_700_000_000 + number as i64 * 12, 0)
            .unwrap(),
    }
}

/// A Substrate event with arbitrary data
pub fn event(
    number: u64,
    idx: u32,
    section: &str,
    method: &str,
    data: Vec<EventArg>,
) -> SubstrateEvent {
    SubstrateEvent {
        block: block(number),
        idx,
        section: section.to_string(),
        method: method.to_string(),
        data,
    }
}

/// A `balances.Transfer` event
pub fn transfer_event(number: u64, idx: u32, from: &str, to: &str, amount: u128) -> SubstrateEvent {
    event(
        number,
        idx,
        "balances",
        "Transfer",
        vec![
            EventArg::AccountId(from.to_string()),
            EventArg::AccountId(to.to_string()),
            EventArg::Balance(Balance::new(amount)),
        ],
    )
}

/// A `vtokenMinting.Redeemed` event
pub fn redeem_event(
    number: u64,
    idx: u32,
    who: &str,
    vtoken_amount: u128,
    token_amount: u128,
) -> SubstrateEvent {
    event(
        number,
        idx,
        "vtokenMinting",
        "Redeemed",
        vec![
            EventArg::AccountId(who.to_string()),
            EventArg::CurrencyId("VToken(KSM)".to_string()),
            EventArg::Balance(Balance::new(vtoken_amount)),
            EventArg::Balance(Balance::new(token_amount)),
            EventArg::Balance(Balance::new(vtoken_amount.saturating_sub(token_amount))),
            EventArg::U32(0),
        ],
    )
}

/// A signed extrinsic
pub fn extrinsic(number: u64, idx: u32) -> SubstrateExtrinsic {
    SubstrateExtrinsic {
        block: block(number),
        idx,
        section: "balances".to_string(),
        method: "transferKeepAlive".to_string(),
        signer: Some(ALICE.to_string()),
        success: true,
    }
}

/// An RPC log carrying `data`, emitted by `contract`
pub fn log(contract: Address, data: LogData, tx_hash: Option<B256>) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address: contract,
            data,
        },
        block_hash: Some(B256::ZERO),
        block_number: Some(1000),
        block_timestamp: None,
        transaction_hash: tx_hash,
        transaction_index: Some(0),
        log_index: Some(0),
        removed: false,
    }
}

/// An ERC-20 `Transfer` log
pub fn transfer_log(
    contract: Address,
    from: Address,
    to: Address,
    value: U256,
    tx_hash: Option<B256>,
) -> Log {
    log(
        contract,
        Transfer { from, to, value }.encode_log_data(),
        tx_hash,
    )
}

/// An ERC-20 `Approval` log; shares nothing with `Transfer` but its shape
pub fn approval_log(contract: Address, owner: Address, spender: Address, value: U256) -> Log {
    log(
        contract,
        Approval {
            owner,
            spender,
            value,
        }
        .encode_log_data(),
        Some(B256::with_last_byte(0xee)),
    )
}

/// Calldata of `approve(spender, value)`
pub fn approve_input(spender: Address, value: U256) -> Vec<u8> {
    approveCall {
        _spender: spender,
        _value: value,
    }
    .abi_encode()
}

/// A store that serves reads from an inner [`MemoryStore`] but rejects
/// every commit.
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

#[async_trait]
impl EntityStore for FailingStore {
    async fn get_record(&self, key: &EntityKey) -> Result<Option<Record>, StoreError> {
        self.inner.get_record(key).await
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        Err(StoreError::backend(format!(
            "commit of {} records refused",
            batch.len()
        )))
    }

    async fn stats(&self) -> StoreStats {
        self.inner.stats().await
    }

    fn name(&self) -> &'static str {
        "FailingStore"
    }
}

/// Install a test subscriber honouring `RUST_LOG`, once per process
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Layer recording each new span's name with the name of its parent
#[derive(Debug, Clone, Default)]
pub struct SpanRecorder {
    spans: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl SpanRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parent names of every recorded span called `name`, in creation order
    pub fn parents_of(&self, name: &str) -> Vec<Option<String>> {
        self.spans
            .lock()
            .unwrap()
            .iter()
            .filter(|(span, _)| span == name)
            .map(|(_, parent)| parent.clone())
            .collect()
    }
}

impl<S> Layer<S> for SpanRecorder
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, _attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let parent = span.parent().map(|p| p.name().to_string());
        self.spans
            .lock()
            .unwrap()
            .push((span.name().to_string(), parent));
    }
}
