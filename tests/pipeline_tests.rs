// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests of the mapping handlers against an in-memory store
//!
//! These replay short sequences of chain inputs and check the resulting
//! entities, covering account lifecycle, composite ids, amount precision
//! and the all-or-nothing write behavior of each handler.

mod helpers;

use alloy_primitives::{address, b256, Address, U256};
use helpers::*;
use std::sync::Arc;
use subledger::evm::{ApproveArgs, FrontierEvmCall, FrontierEvmEvent};
use subledger::{
    Account, Approval, Balance, EntityKind, EntityStore, EntityStoreExt, HandlerError,
    IndexerConfigBuilder, MappingHandlers, MemoryStore, RedeemAccount, Redeemed, Transaction,
    Transfer,
};
use tracing::Instrument;
use tracing_subscriber::layer::SubscriberExt;

const TOKEN: Address = address!("6bd193ee6d2104f14f94e2ca6efefae561a4334b");
const OWNER: Address = address!("1111111111111111111111111111111111111111");
const SPENDER: Address = address!("2222222222222222222222222222222222222222");

#[tokio::test]
async fn test_transfer_id_is_block_and_event_index() {
    init_tracing();
    let handlers = MappingHandlers::new(MemoryStore::new());

    handlers
        .handle_event(&transfer_event(100, 3, ALICE, BOB, 10))
        .await
        .unwrap();

    let transfer: Transfer = handlers.store().get("100-3").await.unwrap().unwrap();
    assert_eq!(transfer.id.to_string(), "100-3");
    assert_eq!(transfer.block_number, 100);
    assert_eq!(transfer.date, block(100).timestamp);
}

#[tokio::test]
async fn test_account_lifecycle_across_blocks() {
    let handlers = MappingHandlers::new(MemoryStore::new());

    handlers
        .handle_event(&transfer_event(100, 0, ALICE, BOB, 10))
        .await
        .unwrap();
    handlers
        .handle_event(&transfer_event(250, 7, BOB, ALICE, 4))
        .await
        .unwrap();

    let store = handlers.store();
    let alice: Account = store.get(&ALICE.to_lowercase()).await.unwrap().unwrap();
    assert_eq!(alice.first_transfer_block, 100);
    assert_eq!(alice.last_transfer_block, Some(250));
    assert_eq!(alice.public_key.to_string(), ALICE_KEY);

    let bob: Account = store.get(&BOB.to_lowercase()).await.unwrap().unwrap();
    assert_eq!(bob.public_key.to_string(), BOB_KEY);

    assert_eq!(store.count(EntityKind::Account).await, 2);
    assert_eq!(store.count(EntityKind::Transfer).await, 2);
}

#[tokio::test]
async fn test_case_variant_hex_addresses_share_an_account() {
    let handlers = MappingHandlers::new(MemoryStore::new());
    let lower = ALICE_KEY.to_string();
    let upper = format!("0x{}", ALICE_KEY[2..].to_uppercase());

    handlers
        .handle_event(&transfer_event(1, 0, &lower, BOB, 1))
        .await
        .unwrap();
    handlers
        .handle_event(&transfer_event(2, 0, &upper, BOB, 1))
        .await
        .unwrap();

    let store = handlers.store();
    assert_eq!(store.count(EntityKind::Account).await, 2);

    let account: Account = store.get(&lower).await.unwrap().unwrap();
    assert_eq!(account.first_transfer_block, 1);
    assert_eq!(account.last_transfer_block, Some(2));

    let second: Transfer = store.get("2-0").await.unwrap().unwrap();
    assert_eq!(second.from_id, lower);
}

#[tokio::test]
async fn test_configured_prefix_rejects_foreign_addresses() {
    let config = IndexerConfigBuilder::new().ss58_prefix(6).build();
    let handlers = MappingHandlers::with_config(MemoryStore::new(), config);

    handlers
        .handle_event(&transfer_event(1, 0, ALICE_BIFROST, BOB_BIFROST, 5))
        .await
        .unwrap();

    let err = handlers
        .handle_event(&transfer_event(2, 0, ALICE_BIFROST, BOB, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, HandlerError::Address(_)));

    // Same public key as on the generic network
    let alice: Account = handlers
        .store()
        .get(&ALICE_BIFROST.to_lowercase())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(alice.public_key.to_string(), ALICE_KEY);
    assert_eq!(alice.last_transfer_block, Some(1));
    assert_eq!(handlers.store().count(EntityKind::Transfer).await, 1);
}

#[tokio::test]
async fn test_failed_decode_leaves_no_partial_writes() {
    let handlers = MappingHandlers::new(MemoryStore::new());

    // `from` is valid and would be created, `to` is not an address
    let err = handlers
        .handle_event(&transfer_event(9, 1, ALICE, "5Grwva0F5z", 1))
        .await
        .unwrap_err();
    assert!(err.is_input_error());

    let stats = handlers.store().stats().await;
    assert_eq!(stats.entries, 0);
    assert_eq!(stats.commits, 0);
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let handlers = MappingHandlers::new(FailingStore::new());

    let err = handlers
        .handle_event(&transfer_event(9, 1, ALICE, BOB, 1))
        .await
        .unwrap_err();

    assert!(matches!(err, HandlerError::Store(_)));
    assert!(!err.is_input_error());
    assert_eq!(handlers.store().inner().stats().await.entries, 0);
}

#[tokio::test]
async fn test_redeem_keeps_amounts_and_case() {
    let handlers = MappingHandlers::new(MemoryStore::new());

    handlers
        .handle_redeem_event(&redeem_event(300, 2, ALICE, 500, 480))
        .await
        .unwrap();

    let store = handlers.store();
    let redeemed: Redeemed = store.get("300-2").await.unwrap().unwrap();
    assert_eq!(redeemed.who_id, ALICE);
    assert_eq!(redeemed.vtoken_amount, Balance::new(500));
    assert_eq!(redeemed.token_amount, Balance::new(480));

    let who: RedeemAccount = store.get(ALICE).await.unwrap().unwrap();
    assert_eq!(who.first_redeem_block, 300);
    assert_eq!(who.last_redeem_block, Some(300));

    // The lowercased id belongs to a different entity kind
    assert!(store
        .get::<RedeemAccount>(&ALICE.to_lowercase())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_amounts_above_float_precision_survive() {
    let handlers = MappingHandlers::new(MemoryStore::new());
    let big = (1u128 << 53) + 1;
    let huge = u128::MAX;

    handlers
        .handle_redeem_event(&redeem_event(1, 0, ALICE, huge, big))
        .await
        .unwrap();
    handlers
        .handle_event(&transfer_event(1, 1, ALICE, BOB, big))
        .await
        .unwrap();

    let store = handlers.store();
    let redeemed: Redeemed = store.get("1-0").await.unwrap().unwrap();
    assert_eq!(redeemed.vtoken_amount.as_u128(), huge);
    assert_eq!(redeemed.token_amount.as_u128(), big);

    let transfer: Transfer = store.get("1-1").await.unwrap().unwrap();
    let json = serde_json::to_value(&transfer).unwrap();
    assert_eq!(json["amount"], "9007199254740993");
}

#[tokio::test]
async fn test_evm_log_without_hash_creates_nothing() {
    let handlers = MappingHandlers::new(MemoryStore::new());
    let log = transfer_log(TOKEN, OWNER, SPENDER, U256::from(7u64), None);

    let err = handlers
        .handle_frontier_evm_event(&FrontierEvmEvent::from_log(&log))
        .await
        .unwrap_err();

    assert!(
        matches!(err, HandlerError::Precondition { ref message } if message == "No transactionHash")
    );
    assert_eq!(handlers.store().count(EntityKind::Transaction).await, 0);
}

#[tokio::test]
async fn test_evm_log_records_transaction() {
    let handlers = MappingHandlers::new(MemoryStore::new());
    let hash = b256!("5a1d0a4c3b3e0a7a1e0f2b9d6c8e7f6a5b4c3d2e1f0a9b8c7d6e5f4a3b2c1d0e");
    let log = transfer_log(TOKEN, OWNER, SPENDER, U256::from(7u64), Some(hash));

    handlers
        .handle_frontier_evm_event(&FrontierEvmEvent::from_log(&log))
        .await
        .unwrap();

    let tx: Transaction = handlers
        .store()
        .get(&hash.to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tx.from, OWNER);
    assert_eq!(tx.to, SPENDER);
    assert_eq!(tx.value, U256::from(7u64));
    assert_eq!(tx.contract_address, TOKEN);
}

#[tokio::test]
async fn test_distinct_approvals_are_distinct_entities() {
    let handlers = MappingHandlers::new(MemoryStore::new());
    let input = approve_input(SPENDER, U256::from(1_000u64));

    for last in [0x01u8, 0x02] {
        let call = FrontierEvmCall::from_input(
            alloy_primitives::B256::with_last_byte(last),
            OWNER,
            Some(TOKEN),
            &input,
        );
        handlers.handle_frontier_evm_call(&call).await.unwrap();
    }

    let approvals: Vec<Approval> = handlers.store().all().await;
    assert_eq!(approvals.len(), 2);
    assert!(approvals
        .iter()
        .all(|a| a.owner == OWNER && a.spender == SPENDER && a.contract_address == TOKEN));
    assert_ne!(approvals[0].id, approvals[1].id);
}

#[tokio::test]
async fn test_approval_without_target_is_rejected() {
    let handlers = MappingHandlers::new(MemoryStore::new());
    let call = FrontierEvmCall {
        hash: alloy_primitives::B256::with_last_byte(9),
        from: OWNER,
        to: None,
        args: Some(ApproveArgs {
            spender: SPENDER,
            value: U256::from(1u64),
        }),
    };

    let err = handlers.handle_frontier_evm_call(&call).await.unwrap_err();
    assert_eq!(err.to_string(), "Precondition failed: No event.to");
    assert_eq!(handlers.store().stats().await.entries, 0);
}

#[tokio::test]
async fn test_shared_store_through_arc() {
    let store = Arc::new(MemoryStore::new());
    let substrate = MappingHandlers::new(Arc::clone(&store));
    let evm = MappingHandlers::new(Arc::clone(&store));

    substrate
        .handle_event(&transfer_event(1, 0, ALICE, BOB, 1))
        .await
        .unwrap();
    evm.handle_frontier_evm_call(&FrontierEvmCall::from_input(
        alloy_primitives::B256::with_last_byte(1),
        OWNER,
        Some(TOKEN),
        &approve_input(SPENDER, U256::from(1u64)),
    ))
    .await
    .unwrap();

    // Two accounts, one transfer, one approval
    assert_eq!(store.stats().await.entries, 4);
}

#[tokio::test]
async fn test_stored_public_key_is_decimal_byte_list() {
    let handlers = MappingHandlers::new(MemoryStore::new());

    handlers
        .handle_event(&transfer_event(1, 0, ALICE, BOB, 1))
        .await
        .unwrap();
    handlers
        .handle_redeem_event(&redeem_event(1, 1, ALICE, 2, 1))
        .await
        .unwrap();

    let store = handlers.store();
    let account: Account = store.get(&ALICE.to_lowercase()).await.unwrap().unwrap();
    let account_json = serde_json::to_value(&account).unwrap();
    assert_eq!(account_json["publicKey"], ALICE_KEY_BYTES);

    let who: RedeemAccount = store.get(ALICE).await.unwrap().unwrap();
    let json = serde_json::to_value(&who).unwrap();
    assert_eq!(json["publicKey"], ALICE_KEY_BYTES);

    let restored: Account = serde_json::from_value(account_json).unwrap();
    assert_eq!(restored.public_key.to_string(), ALICE_KEY);
}

#[tokio::test]
async fn test_handler_spans_nest_under_injected_parent() {
    let recorder = SpanRecorder::new();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let parent = tracing::info_span!("host.replay", chain = "bifrost");
    let handlers = MappingHandlers::new(MemoryStore::new()).with_parent_span(parent);

    handlers.handle_block(&block(1)).await.unwrap();
    handlers.handle_call(&extrinsic(1, 0)).await.unwrap();
    handlers
        .handle_event(&transfer_event(1, 1, ALICE, BOB, 1))
        .await
        .unwrap();

    let host = Some("host.replay".to_string());
    assert_eq!(recorder.parents_of("subledger.handle_block"), vec![host.clone()]);
    assert_eq!(recorder.parents_of("subledger.handle_call"), vec![host.clone()]);
    assert_eq!(recorder.parents_of("subledger.handle_event"), vec![host]);

    let handler = Some("subledger.handle_event".to_string());
    assert_eq!(
        recorder.parents_of("subledger.resolve_account"),
        vec![handler.clone(), handler]
    );
}

#[tokio::test]
async fn test_handler_spans_default_to_current_span() {
    let recorder = SpanRecorder::new();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let handlers = MappingHandlers::new(MemoryStore::new());
    handlers
        .handle_redeem_event(&redeem_event(1, 0, ALICE, 2, 1))
        .instrument(tracing::info_span!("host.batch"))
        .await
        .unwrap();

    assert_eq!(
        recorder.parents_of("subledger.handle_redeem_event"),
        vec![Some("host.batch".to_string())]
    );
    assert_eq!(
        recorder.parents_of("subledger.resolve_account"),
        vec![Some("subledger.handle_redeem_event".to_string())]
    );
}
