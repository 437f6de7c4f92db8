use {
    crate::{error::HandlerError, event_source::BlockInfo},
    snapp_model::{Order, RawEvent},
    snapp_store::Store,
};

/// Persists a one-shot sell order submitted into an auction.
pub async fn save(
    store: &dyn Store,
    event: &RawEvent,
    block: BlockInfo,
) -> Result<(), HandlerError> {
    let order = Order::parse(event)?;
    tracing::info!(
        block_number = block.block_number,
        auction_id = order.auction_id(),
        account_id = order.account_id,
        "order recorded"
    );
    store.write_order(order).await?;
    Ok(())
}
