use {
    crate::{
        error::ParseError,
        event::RawEvent,
        settlement_decoder::{self, AuctionResults, MalformedSettlement},
    },
    serde::Serialize,
    thiserror::Error,
};

/// Everything that can go wrong turning a raw `AuctionSettlement` event into
/// its typed, decoded form.
#[derive(Debug, Error)]
pub enum AuctionSettlementError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Malformed(#[from] MalformedSettlement),
}

/// A cleared auction: which account record it produced and the decoded
/// per-order buy/sell volumes that settle against it.
///
/// `prices_and_volumes` is decoded once, here, at construction — callers
/// never see the raw hex payload. Decoding needs `num_tokens`/`num_orders`
/// from the store, so [`AuctionSettlement::parse`] takes them as context
/// rather than reading them out of the event itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSettlement {
    pub auction_id: u64,
    pub state_index: u64,
    pub state_hash: String,
    pub prices_and_volumes: AuctionResults,
}

impl AuctionSettlement {
    pub fn parse(
        event: &RawEvent,
        num_tokens: u64,
        num_orders: u64,
    ) -> Result<Self, AuctionSettlementError> {
        let fields = event.fields();
        let auction_id = fields.u64("auctionId")?;
        let state_index = fields.u64("stateIndex")?;
        let state_hash = fields.hash64("stateHash")?;
        let payload = fields.str("pricesAndVolumes")?;
        let prices_and_volumes = settlement_decoder::decode(payload, num_tokens, num_orders)?;
        Ok(Self {
            auction_id,
            state_index,
            state_hash,
            prices_and_volumes,
        })
    }
}
