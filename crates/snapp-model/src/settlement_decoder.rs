use {crate::amount::Nat, serde::Serialize, thiserror::Error};

/// Each packed value in a settlement payload occupies 96 bits.
const VALUE_HEX_LEN: usize = 24;

/// The decoded prices-and-volumes payload of an [`super::AuctionSettlement`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionResults {
    pub prices: Vec<Nat>,
    pub buy_amounts: Vec<Nat>,
    pub sell_amounts: Vec<Nat>,
}

/// The settlement payload's byte length did not match `24 * (N + 2M)` hex
/// digits for the token/order counts in force at decode time.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed settlement payload: expected {expected} hex digits for num_tokens={num_tokens} num_orders={num_orders}, got {actual}")]
pub struct MalformedSettlement {
    pub num_tokens: u64,
    pub num_orders: u64,
    pub expected: usize,
    pub actual: usize,
}

/// Unpacks a settlement's `pricesAndVolumes` hex payload into `num_tokens`
/// prices followed by `num_orders` interleaved `(buy, sell)` volume pairs.
///
/// `payload` may carry an optional `0x` prefix. Each 96-bit value is 24 hex
/// characters, big-endian.
pub fn decode(
    payload: &str,
    num_tokens: u64,
    num_orders: u64,
) -> Result<AuctionResults, MalformedSettlement> {
    let hex_digits = payload.strip_prefix("0x").unwrap_or(payload);
    let expected = VALUE_HEX_LEN * (num_tokens as usize + 2 * num_orders as usize);
    if hex_digits.len() != expected {
        return Err(MalformedSettlement {
            num_tokens,
            num_orders,
            expected,
            actual: hex_digits.len(),
        });
    }

    let malformed = || MalformedSettlement {
        num_tokens,
        num_orders,
        expected,
        actual: hex_digits.len(),
    };
    let values = hex_digits
        .as_bytes()
        .chunks(VALUE_HEX_LEN)
        .map(|chunk| {
            let bytes = hex::decode(chunk).map_err(|_| malformed())?;
            Ok(Nat::from_bytes_be(&bytes))
        })
        .collect::<Result<Vec<Nat>, MalformedSettlement>>()?;

    let (prices, volumes) = values.split_at(num_tokens as usize);
    let mut buy_amounts = Vec::with_capacity(num_orders as usize);
    let mut sell_amounts = Vec::with_capacity(num_orders as usize);
    for pair in volumes.chunks(2) {
        buy_amounts.push(pair[0].clone());
        sell_amounts.push(pair[1].clone());
    }

    Ok(AuctionResults {
        prices: prices.to_vec(),
        buy_amounts,
        sell_amounts,
    })
}
