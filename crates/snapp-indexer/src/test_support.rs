//! A hand-written [`mockall`] mock of [`snapp_store::Store`], shared across
//! handler unit tests that want to assert on call arguments rather than
//! exercise real state (real-state coverage lives in the scenario tests
//! against [`snapp_store::memory::InMemoryStore`]).

use snapp_model::{AccountRecord, Deposit, Order, StandingOrder, Withdraw};

mockall::mock! {
    pub Store {}

    #[async_trait::async_trait]
    impl snapp_store::Store for Store {
        async fn write_deposit(&self, deposit: Deposit) -> Result<(), snapp_store::StoreError>;
        async fn write_withdraw(&self, withdraw: Withdraw) -> Result<String, snapp_store::StoreError>;
        async fn update_withdraw(&self, withdraw: Withdraw) -> Result<(), snapp_store::StoreError>;
        async fn write_order(&self, order: Order) -> Result<(), snapp_store::StoreError>;
        async fn write_standing_order(&self, standing_order: StandingOrder) -> Result<(), snapp_store::StoreError>;
        async fn write_account_state(&self, record: AccountRecord) -> Result<(), snapp_store::StoreError>;
        async fn write_snapp_constants(&self, num_tokens: u64, num_accounts: u64) -> Result<(), snapp_store::StoreError>;
        async fn write_auction_constants(&self, num_orders: u64, num_reserved_accounts: u64, orders_per_reserved_account: u64) -> Result<(), snapp_store::StoreError>;
        async fn get_account_state(&self, state_index: u64) -> Result<AccountRecord, snapp_store::StoreError>;
        async fn get_deposits(&self, slot: u64) -> Result<Vec<Deposit>, snapp_store::StoreError>;
        async fn get_withdraws(&self, slot: u64) -> Result<Vec<Withdraw>, snapp_store::StoreError>;
        async fn get_orders(&self, auction_id: u64) -> Result<Vec<Order>, snapp_store::StoreError>;
        async fn get_num_tokens(&self) -> Result<u64, snapp_store::StoreError>;
        async fn get_num_accounts(&self) -> Result<u64, snapp_store::StoreError>;
        async fn get_num_orders(&self) -> Result<u64, snapp_store::StoreError>;
    }
}
