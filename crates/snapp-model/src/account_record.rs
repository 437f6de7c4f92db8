use {
    crate::amount::Nat,
    serde::{Deserialize, Serialize},
};

/// One link in the append-only chain of balance snapshots.
///
/// `state_index` 0 is created by snapp initialization; every later record
/// is produced by exactly one state-transition or auction-settlement
/// handler and is never mutated once written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub state_index: u64,
    pub state_hash: String,
    pub balances: Vec<Nat>,
}

impl AccountRecord {
    pub fn new(state_index: u64, state_hash: impl Into<String>, balances: Vec<Nat>) -> Self {
        Self {
            state_index,
            state_hash: state_hash.into(),
            balances,
        }
    }

    /// The genesis record written by `SnappInitialization`: an all-zero
    /// balance matrix sized for `num_tokens * num_accounts` entries.
    pub fn genesis(state_hash: impl Into<String>, num_tokens: u64, num_accounts: u64) -> Self {
        Self::new(
            0,
            state_hash,
            vec![Nat::zero(); (num_tokens * num_accounts) as usize],
        )
    }

    /// Row-major `(account_id, token_id)` index into `balances`, with
    /// stride `num_tokens`.
    pub fn index(num_tokens: u64, account_id: u64, token_id: u64) -> usize {
        (num_tokens * account_id + token_id) as usize
    }
}
