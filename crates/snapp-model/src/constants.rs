use serde::{Deserialize, Serialize};

/// System-wide sizing constants, written once each by genesis events and
/// read by every handler that needs to size or index a balance matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constants {
    pub num_tokens: u64,
    pub num_accounts: u64,
    pub num_orders: u64,
    pub num_reserved_accounts: u64,
    pub orders_per_reserved_account: u64,
}

impl Constants {
    pub fn new(
        num_tokens: u64,
        num_accounts: u64,
        num_orders: u64,
        num_reserved_accounts: u64,
        orders_per_reserved_account: u64,
    ) -> Self {
        Self {
            num_tokens,
            num_accounts,
            num_orders,
            num_reserved_accounts,
            orders_per_reserved_account,
        }
    }
}
