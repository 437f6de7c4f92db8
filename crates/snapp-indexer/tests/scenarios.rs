//! Integration tests for the concrete scenarios driven end to end through
//! the dispatcher against the in-memory store.

use {
    snapp_indexer::{BlockInfo, Dispatcher},
    snapp_model::{Nat, RawEvent, RawParam},
    snapp_store::{memory::InMemoryStore, Store},
    std::sync::Arc,
};

fn init_event(state_hash: &str) -> RawEvent {
    RawEvent::new(
        "SnappInitialization",
        vec![
            RawParam { name: "stateHash".into(), value: serde_json::json!(state_hash) },
            RawParam { name: "maxTokens".into(), value: serde_json::json!(10) },
            RawParam { name: "maxAccounts".into(), value: serde_json::json!(10) },
        ],
    )
}

fn deposit_event(account_id: u64, token_id: u64, amount: u64, slot: u64, slot_index: u64) -> RawEvent {
    RawEvent::new(
        "Deposit",
        vec![
            RawParam { name: "accountId".into(), value: serde_json::json!(account_id) },
            RawParam { name: "tokenId".into(), value: serde_json::json!(token_id) },
            RawParam { name: "amount".into(), value: serde_json::json!(amount) },
            RawParam { name: "slot".into(), value: serde_json::json!(slot) },
            RawParam { name: "slotIndex".into(), value: serde_json::json!(slot_index) },
        ],
    )
}

fn withdraw_event(account_id: u64, token_id: u64, amount: u64, slot: u64, slot_index: u64) -> RawEvent {
    RawEvent::new(
        "WithdrawRequest",
        vec![
            RawParam { name: "accountId".into(), value: serde_json::json!(account_id) },
            RawParam { name: "tokenId".into(), value: serde_json::json!(token_id) },
            RawParam { name: "amount".into(), value: serde_json::json!(amount) },
            RawParam { name: "slot".into(), value: serde_json::json!(slot) },
            RawParam { name: "slotIndex".into(), value: serde_json::json!(slot_index) },
        ],
    )
}

fn transition_event(transition_type: u64, state_index: u64, state_hash: &str, slot: u64) -> RawEvent {
    RawEvent::new(
        "StateTransition",
        vec![
            RawParam { name: "transitionType".into(), value: serde_json::json!(transition_type) },
            RawParam { name: "stateIndex".into(), value: serde_json::json!(state_index) },
            RawParam { name: "stateHash".into(), value: serde_json::json!(state_hash) },
            RawParam { name: "slot".into(), value: serde_json::json!(slot) },
        ],
    )
}

/// Seeds a genesis record then overwrites account-state 1 directly through
/// the store so each scenario can start from its own base balance vector
/// without replaying an entire history.
async fn seed_base_state(store: &InMemoryStore, balances: Vec<Nat>) {
    store.write_snapp_constants(10, 10).await.unwrap();
    store
        .write_account_state(snapp_model::AccountRecord::new(
            0,
            "0".repeat(64),
            vec![Nat::zero(); 100],
        ))
        .await
        .unwrap();
    store
        .write_account_state(snapp_model::AccountRecord::new(1, "1".repeat(64), balances))
        .await
        .unwrap();
}

/// S1 — Deposit batch.
#[tokio::test]
async fn s1_deposit_batch() {
    let store = Arc::new(InMemoryStore::new());
    seed_base_state(&store, vec![Nat::from_u64(42); 100]).await;
    let dispatcher = Dispatcher::new(store.clone());

    dispatcher
        .dispatch(deposit_event(0, 1, 10, 3, 0), BlockInfo::default())
        .await
        .unwrap();
    dispatcher
        .dispatch(deposit_event(6, 2, 5, 3, 1), BlockInfo::default())
        .await
        .unwrap();
    dispatcher
        .dispatch(
            transition_event(0, 2, &"2".repeat(64), 3),
            BlockInfo::default(),
        )
        .await
        .unwrap();

    let record = store.get_account_state(2).await.unwrap();
    assert_eq!(record.balances[1], Nat::from_u64(52));
    assert_eq!(record.balances[62], Nat::from_u64(47));
    assert_eq!(record.balances[0], Nat::from_u64(42));
}

/// S2 — Withdraw honoring.
#[tokio::test]
async fn s2_withdraw_honoring() {
    let store = Arc::new(InMemoryStore::new());
    seed_base_state(&store, vec![Nat::from_u64(42); 100]).await;
    let dispatcher = Dispatcher::new(store.clone());

    dispatcher
        .dispatch(withdraw_event(0, 1, 10, 3, 0), BlockInfo::default())
        .await
        .unwrap();
    dispatcher
        .dispatch(withdraw_event(6, 2, 100, 3, 1), BlockInfo::default())
        .await
        .unwrap();
    dispatcher
        .dispatch(
            transition_event(1, 2, &"2".repeat(64), 3),
            BlockInfo::default(),
        )
        .await
        .unwrap();

    let record = store.get_account_state(2).await.unwrap();
    assert_eq!(record.balances[1], Nat::from_u64(32));
    assert_eq!(record.balances[62], Nat::from_u64(42));

    let withdraws = store.get_withdraws(3).await.unwrap();
    assert!(withdraws.iter().any(|w| w.account_id == 0 && w.valid));
    assert!(withdraws.iter().any(|w| w.account_id == 6 && !w.valid));
}

/// S5 — Unknown event names are dropped without touching the store.
#[tokio::test]
async fn s5_unknown_event_is_a_noop() {
    let store = Arc::new(InMemoryStore::new());
    store.write_snapp_constants(10, 10).await.unwrap();
    let dispatcher = Dispatcher::new(store.clone());

    dispatcher
        .dispatch(RawEvent::new("Foo", vec![]), BlockInfo::default())
        .await
        .unwrap();

    assert!(store.get_account_state(0).await.is_err());
}

/// S6 — Standing order promotion.
#[tokio::test]
async fn s6_standing_order_promotion() {
    let store = Arc::new(InMemoryStore::new());
    store.write_snapp_constants(10, 10).await.unwrap();
    let dispatcher = Dispatcher::new(store.clone());

    let oneshot = RawEvent::new(
        "SellOrder",
        vec![
            RawParam { name: "auctionId".into(), value: serde_json::json!(5) },
            RawParam { name: "slotIndex".into(), value: serde_json::json!(0) },
            RawParam { name: "accountId".into(), value: serde_json::json!(0) },
            RawParam { name: "buyToken".into(), value: serde_json::json!(1) },
            RawParam { name: "sellToken".into(), value: serde_json::json!(0) },
            RawParam { name: "buyAmount".into(), value: serde_json::json!(1) },
            RawParam { name: "sellAmount".into(), value: serde_json::json!(1) },
        ],
    );
    dispatcher.dispatch(oneshot, BlockInfo::default()).await.unwrap();

    let standing_at_3 = RawEvent::new(
        "StandingSellOrderBatch",
        vec![
            RawParam { name: "accountId".into(), value: serde_json::json!(0) },
            RawParam { name: "batchIndex".into(), value: serde_json::json!(0) },
            RawParam { name: "validFromAuctionId".into(), value: serde_json::json!(3) },
            RawParam {
                name: "orders".into(),
                value: serde_json::json!([
                    { "buyToken": 1, "sellToken": 0, "buyAmount": "1", "sellAmount": "1" }
                ]),
            },
        ],
    );
    dispatcher
        .dispatch(standing_at_3, BlockInfo::default())
        .await
        .unwrap();

    let standing_at_5 = RawEvent::new(
        "StandingSellOrderBatch",
        vec![
            RawParam { name: "accountId".into(), value: serde_json::json!(0) },
            RawParam { name: "batchIndex".into(), value: serde_json::json!(1) },
            RawParam { name: "validFromAuctionId".into(), value: serde_json::json!(5) },
            RawParam {
                name: "orders".into(),
                value: serde_json::json!([
                    { "buyToken": 1, "sellToken": 0, "buyAmount": "1", "sellAmount": "1" },
                    { "buyToken": 2, "sellToken": 0, "buyAmount": "1", "sellAmount": "1" }
                ]),
            },
        ],
    );
    dispatcher
        .dispatch(standing_at_5, BlockInfo::default())
        .await
        .unwrap();

    let at_4 = store.get_orders(4).await.unwrap();
    assert_eq!(at_4.len(), 1);

    let at_5 = store.get_orders(5).await.unwrap();
    assert_eq!(at_5.len(), 3);
}
