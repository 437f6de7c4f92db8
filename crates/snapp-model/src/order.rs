use {
    crate::{amount::Nat, error::ParseError, event::RawEvent},
    serde::{Deserialize, Serialize},
};

/// A one-shot sell order submitted into an auction.
///
/// `slot` doubles as the auction id — an order is only ever valid for the
/// single auction it was submitted into, unlike a [`super::StandingOrder`]
/// which is re-used across many.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub slot: u64,
    pub slot_index: u64,
    pub account_id: u64,
    pub buy_token: u64,
    pub sell_token: u64,
    pub buy_amount: Nat,
    pub sell_amount: Nat,
}

impl Order {
    pub fn new(
        slot: u64,
        slot_index: u64,
        account_id: u64,
        buy_token: u64,
        sell_token: u64,
        buy_amount: Nat,
        sell_amount: Nat,
    ) -> Result<Self, ParseError> {
        if buy_token == sell_token {
            return Err(ParseError::InvalidField {
                field: "sellToken",
                value: "buy_token and sell_token must differ".to_owned(),
            });
        }
        if sell_amount == Nat::zero() {
            return Err(ParseError::InvalidField {
                field: "sellAmount",
                value: "sell_amount must be greater than zero".to_owned(),
            });
        }
        Ok(Self {
            slot,
            slot_index,
            account_id,
            buy_token,
            sell_token,
            buy_amount,
            sell_amount,
        })
    }

    pub fn parse(event: &RawEvent) -> Result<Self, ParseError> {
        let fields = event.fields();
        Self::new(
            fields.u64("auctionId")?,
            fields.u64("slotIndex")?,
            fields.u64("accountId")?,
            fields.u64("buyToken")?,
            fields.u64("sellToken")?,
            fields.nat("buyAmount")?,
            fields.nat("sellAmount")?,
        )
    }

    /// Parses one order nested inside a `StandingSellOrderBatch` payload,
    /// where `auctionId` and `accountId` are implied by the enclosing batch
    /// rather than present on the individual order.
    pub(crate) fn parse_nested(
        event: &RawEvent,
        valid_from_auction_id: u64,
        account_id: u64,
    ) -> Result<Self, ParseError> {
        let fields = event.fields();
        Self::new(
            valid_from_auction_id,
            fields.u64("slotIndex").unwrap_or(0),
            account_id,
            fields.u64("buyToken")?,
            fields.u64("sellToken")?,
            fields.nat("buyAmount")?,
            fields.nat("sellAmount")?,
        )
    }

    /// The auction this order was submitted into.
    pub fn auction_id(&self) -> u64 {
        self.slot
    }
}
