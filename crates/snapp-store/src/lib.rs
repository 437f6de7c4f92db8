//! The capability boundary handlers use to read and write indexed state.
//!
//! [`Store`] is implemented once here, in-process ([`memory::InMemoryStore`]),
//! for tests and local runs. A production deployment plugs in a document-store
//! adapter implementing the same trait; nothing in `snapp-indexer` depends on
//! the in-memory implementation directly.

pub mod error;
pub mod memory;

pub use error::StoreError;

use {
    async_trait::async_trait,
    snapp_model::{AccountRecord, Deposit, Order, StandingOrder, Withdraw},
};

/// Reads and writes for deposits, withdrawals, orders, standing orders,
/// account records, and system constants.
///
/// All reads are snapshot-consistent with respect to writes made by earlier
/// handler invocations in the same process; the trait does not promise
/// transactional multi-operation atomicity, so handlers must tolerate
/// partial writes by being idempotent on replay.
#[async_trait]
pub trait Store: Send + Sync {
    async fn write_deposit(&self, deposit: Deposit) -> Result<(), StoreError>;

    /// Persists `withdraw` and returns the store's opaque handle for it.
    async fn write_withdraw(&self, withdraw: Withdraw) -> Result<String, StoreError>;

    /// Whole-record replacement keyed by `withdraw.id`.
    async fn update_withdraw(&self, withdraw: Withdraw) -> Result<(), StoreError>;

    async fn write_order(&self, order: Order) -> Result<(), StoreError>;

    async fn write_standing_order(&self, standing_order: StandingOrder) -> Result<(), StoreError>;

    /// Fails with [`StoreError::AlreadyInitialized`] if `record.state_index`
    /// already has a record.
    async fn write_account_state(&self, record: AccountRecord) -> Result<(), StoreError>;

    /// Once per store lifetime.
    async fn write_snapp_constants(
        &self,
        num_tokens: u64,
        num_accounts: u64,
    ) -> Result<(), StoreError>;

    /// Once per store lifetime.
    async fn write_auction_constants(
        &self,
        num_orders: u64,
        num_reserved_accounts: u64,
        orders_per_reserved_account: u64,
    ) -> Result<(), StoreError>;

    /// Fails with [`StoreError::NotFound`] if absent.
    async fn get_account_state(&self, state_index: u64) -> Result<AccountRecord, StoreError>;

    async fn get_deposits(&self, slot: u64) -> Result<Vec<Deposit>, StoreError>;

    async fn get_withdraws(&self, slot: u64) -> Result<Vec<Withdraw>, StoreError>;

    /// One-shot orders for `auction_id` union the orders contributed by the
    /// latest standing-order entry per account whose `valid_from_auction_id`
    /// is at most `auction_id`.
    async fn get_orders(&self, auction_id: u64) -> Result<Vec<Order>, StoreError>;

    async fn get_num_tokens(&self) -> Result<u64, StoreError>;

    async fn get_num_accounts(&self) -> Result<u64, StoreError>;

    async fn get_num_orders(&self) -> Result<u64, StoreError>;
}
