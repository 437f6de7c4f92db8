use {
    crate::{amount::Nat, error::ParseError, event::RawEvent},
    serde::{Deserialize, Serialize},
};

/// A pending deposit, recorded when the chain emits a `Deposit` event.
///
/// Deposits do not change any balance by themselves — balances only move
/// once the state transition that closes `slot` is processed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub account_id: u64,
    pub token_id: u64,
    pub amount: Nat,
    pub slot: u64,
    pub slot_index: u64,
}

impl Deposit {
    pub fn parse(event: &RawEvent) -> Result<Self, ParseError> {
        let fields = event.fields();
        Ok(Self {
            account_id: fields.u64("accountId")?,
            token_id: fields.u64("tokenId")?,
            amount: fields.nat("amount")?,
            slot: fields.u64("slot")?,
            slot_index: fields.u64("slotIndex")?,
        })
    }
}
