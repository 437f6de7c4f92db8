use {
    crate::{amount::Nat, error::ParseError, event::RawEvent},
    serde::{Deserialize, Serialize},
};

/// A pending withdraw request.
///
/// `valid` starts `false` and is flipped to `true` by exactly one
/// [`super::state_transition`] application — the one that finds sufficient
/// balance to honor it. `id` is the store's opaque handle for
/// [`super::StoreError`]-free in-place replacement and is absent until the
/// store assigns one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdraw {
    pub account_id: u64,
    pub token_id: u64,
    pub amount: Nat,
    pub slot: u64,
    pub slot_index: u64,
    #[serde(default)]
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Withdraw {
    pub fn parse(event: &RawEvent) -> Result<Self, ParseError> {
        let fields = event.fields();
        Ok(Self {
            account_id: fields.u64("accountId")?,
            token_id: fields.u64("tokenId")?,
            amount: fields.nat("amount")?,
            slot: fields.u64("slot")?,
            slot_index: fields.u64("slotIndex")?,
            valid: false,
            id: None,
        })
    }

    /// Returns a copy of this record with `valid` flipped to `true`,
    /// keeping its storage id. Flipping an already-valid record is a no-op
    /// in effect, though callers should prefer skipping the store write
    /// entirely when `self.valid` already holds.
    pub fn honored(&self) -> Self {
        Self {
            valid: true,
            ..self.clone()
        }
    }
}
