use {
    crate::{error::ParseError, event::RawEvent, order::Order},
    serde::{Deserialize, Serialize},
};

/// A persistent order template for a reserved account, re-used across
/// auctions until a later batch with a higher `valid_from_auction_id`
/// supersedes it.
///
/// Readers never consult `batch_index` directly — it is bookkeeping for the
/// submitter — but `valid_from_auction_id` drives which batch is "active"
/// for a given auction (see `snapp-store`'s `get_orders`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingOrder {
    pub account_id: u64,
    pub batch_index: u64,
    pub valid_from_auction_id: u64,
    pub orders: Vec<Order>,
}

impl StandingOrder {
    pub fn parse(event: &RawEvent) -> Result<Self, ParseError> {
        let fields = event.fields();
        let account_id = fields.u64("accountId")?;
        let batch_index = fields.u64("batchIndex")?;
        let valid_from_auction_id = fields.u64("validFromAuctionId")?;
        let orders = fields
            .raw_events("orders")?
            .iter()
            .map(|nested| Order::parse_nested(nested, valid_from_auction_id, account_id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            account_id,
            batch_index,
            valid_from_auction_id,
            orders,
        })
    }
}
