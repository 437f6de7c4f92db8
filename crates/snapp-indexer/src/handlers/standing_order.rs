use {
    crate::{error::HandlerError, event_source::BlockInfo},
    snapp_model::{RawEvent, StandingOrder},
    snapp_store::Store,
};

/// Appends a standing-order batch. Readers materialize the effective order
/// set for an auction at query time (see [`snapp_store::Store::get_orders`]).
pub async fn save(
    store: &dyn Store,
    event: &RawEvent,
    block: BlockInfo,
) -> Result<(), HandlerError> {
    let standing_order = StandingOrder::parse(event)?;
    tracing::info!(
        block_number = block.block_number,
        account_id = standing_order.account_id,
        valid_from_auction_id = standing_order.valid_from_auction_id,
        order_count = standing_order.orders.len(),
        "standing order batch recorded"
    );
    store.write_standing_order(standing_order).await?;
    Ok(())
}
