use {
    crate::error::StoreError,
    snapp_model::{AccountRecord, Deposit, Order, StandingOrder, Withdraw},
    std::collections::HashMap,
    tokio::sync::Mutex,
};

/// A standing-order entry as kept by the store, tagged with the insertion
/// id used to break ties when two entries share a `valid_from_auction_id`.
struct StandingOrderEntry {
    id: u64,
    standing_order: StandingOrder,
}

#[derive(Default)]
struct State {
    num_tokens: Option<u64>,
    num_accounts: Option<u64>,
    num_orders: Option<u64>,
    num_reserved_accounts: Option<u64>,
    orders_per_reserved_account: Option<u64>,
    deposits: Vec<Deposit>,
    withdraws: Vec<Withdraw>,
    orders: Vec<Order>,
    standing_orders: Vec<StandingOrderEntry>,
    accounts: HashMap<u64, AccountRecord>,
    next_withdraw_id: u64,
    next_standing_order_id: u64,
}

/// A single-process, in-memory [`super::Store`].
///
/// All state lives behind one [`tokio::sync::Mutex`], so writers never
/// interleave — mirroring the host stack's single-writer event updater
/// guarding its own handler state behind a mutex rather than relying on
/// finer-grained locking. Good enough to exercise every invariant in tests
/// and to let the runtime shell run without an external database; not a
/// production backend.
#[derive(Default)]
pub struct InMemoryStore(Mutex<State>);

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn withdraw_id(withdraw: &Withdraw) -> Result<&str, StoreError> {
    withdraw
        .id
        .as_deref()
        .ok_or_else(|| StoreError::NotFound("withdraw has no store id".to_owned()))
}

#[async_trait::async_trait]
impl crate::Store for InMemoryStore {
    async fn write_deposit(&self, deposit: Deposit) -> Result<(), StoreError> {
        self.0.lock().await.deposits.push(deposit);
        Ok(())
    }

    async fn write_withdraw(&self, mut withdraw: Withdraw) -> Result<String, StoreError> {
        let mut state = self.0.lock().await;
        let id = state.next_withdraw_id.to_string();
        state.next_withdraw_id += 1;
        withdraw.id = Some(id.clone());
        state.withdraws.push(withdraw);
        Ok(id)
    }

    async fn update_withdraw(&self, withdraw: Withdraw) -> Result<(), StoreError> {
        let id = withdraw_id(&withdraw)?.to_owned();
        let mut state = self.0.lock().await;
        let slot = state
            .withdraws
            .iter_mut()
            .find(|w| w.id.as_deref() == Some(id.as_str()))
            .ok_or_else(|| StoreError::NotFound(format!("withdraw {id}")))?;
        *slot = withdraw;
        Ok(())
    }

    async fn write_order(&self, order: Order) -> Result<(), StoreError> {
        self.0.lock().await.orders.push(order);
        Ok(())
    }

    async fn write_standing_order(&self, standing_order: StandingOrder) -> Result<(), StoreError> {
        let mut state = self.0.lock().await;
        let id = state.next_standing_order_id;
        state.next_standing_order_id += 1;
        state
            .standing_orders
            .push(StandingOrderEntry { id, standing_order });
        Ok(())
    }

    async fn write_account_state(&self, record: AccountRecord) -> Result<(), StoreError> {
        let mut state = self.0.lock().await;
        if state.accounts.contains_key(&record.state_index) {
            return Err(StoreError::AlreadyInitialized("account state"));
        }
        state.accounts.insert(record.state_index, record);
        Ok(())
    }

    async fn write_snapp_constants(
        &self,
        num_tokens: u64,
        num_accounts: u64,
    ) -> Result<(), StoreError> {
        let mut state = self.0.lock().await;
        if state.num_tokens.is_some() || state.num_accounts.is_some() {
            return Err(StoreError::AlreadyInitialized("snapp constants"));
        }
        state.num_tokens = Some(num_tokens);
        state.num_accounts = Some(num_accounts);
        Ok(())
    }

    async fn write_auction_constants(
        &self,
        num_orders: u64,
        num_reserved_accounts: u64,
        orders_per_reserved_account: u64,
    ) -> Result<(), StoreError> {
        let mut state = self.0.lock().await;
        if state.num_orders.is_some() {
            return Err(StoreError::AlreadyInitialized("auction constants"));
        }
        state.num_orders = Some(num_orders);
        state.num_reserved_accounts = Some(num_reserved_accounts);
        state.orders_per_reserved_account = Some(orders_per_reserved_account);
        Ok(())
    }

    async fn get_account_state(&self, state_index: u64) -> Result<AccountRecord, StoreError> {
        self.0
            .lock()
            .await
            .accounts
            .get(&state_index)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("account state {state_index}")))
    }

    async fn get_deposits(&self, slot: u64) -> Result<Vec<Deposit>, StoreError> {
        Ok(self
            .0
            .lock()
            .await
            .deposits
            .iter()
            .filter(|d| d.slot == slot)
            .cloned()
            .collect())
    }

    async fn get_withdraws(&self, slot: u64) -> Result<Vec<Withdraw>, StoreError> {
        Ok(self
            .0
            .lock()
            .await
            .withdraws
            .iter()
            .filter(|w| w.slot == slot)
            .cloned()
            .collect())
    }

    async fn get_orders(&self, auction_id: u64) -> Result<Vec<Order>, StoreError> {
        let state = self.0.lock().await;

        let mut orders: Vec<Order> = state
            .orders
            .iter()
            .filter(|o| o.auction_id() == auction_id)
            .cloned()
            .collect();

        // The active standing-order entry per account: the one with the
        // largest `valid_from_auction_id <= auction_id`, ties broken by the
        // latest insertion id. Equivalent to the `$match`/`$sort`/`$group`
        // aggregation the document-store backend performs server-side.
        let mut active: HashMap<u64, &StandingOrderEntry> = HashMap::new();
        for entry in &state.standing_orders {
            if entry.standing_order.valid_from_auction_id > auction_id {
                continue;
            }
            let account_id = entry.standing_order.account_id;
            let is_better = match active.get(&account_id) {
                None => true,
                Some(current) => {
                    (entry.standing_order.valid_from_auction_id, entry.id)
                        > (current.standing_order.valid_from_auction_id, current.id)
                }
            };
            if is_better {
                active.insert(account_id, entry);
            }
        }

        let mut active: Vec<&StandingOrderEntry> = active.into_values().collect();
        active.sort_by_key(|entry| entry.id);
        for entry in active {
            orders.extend(entry.standing_order.orders.iter().cloned());
        }

        Ok(orders)
    }

    async fn get_num_tokens(&self) -> Result<u64, StoreError> {
        self.0
            .lock()
            .await
            .num_tokens
            .ok_or_else(|| StoreError::NotFound("num_tokens".to_owned()))
    }

    async fn get_num_accounts(&self) -> Result<u64, StoreError> {
        self.0
            .lock()
            .await
            .num_accounts
            .ok_or_else(|| StoreError::NotFound("num_accounts".to_owned()))
    }

    async fn get_num_orders(&self) -> Result<u64, StoreError> {
        self.0
            .lock()
            .await
            .num_orders
            .ok_or_else(|| StoreError::NotFound("num_orders".to_owned()))
    }
}
