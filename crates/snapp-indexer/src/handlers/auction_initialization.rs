use {
    crate::{error::HandlerError, event_source::BlockInfo},
    snapp_model::RawEvent,
    snapp_store::Store,
};

/// Writes the auction-wide order/reserved-account counts. Exactly-once, like
/// [`super::snapp_initialization::save`].
pub async fn save(
    store: &dyn Store,
    event: &RawEvent,
    block: BlockInfo,
) -> Result<(), HandlerError> {
    let fields = event.fields();
    let num_orders = fields.u64("maxOrders")?;
    let num_reserved_accounts = fields.u64("numReservedAccounts")?;
    let orders_per_reserved_account = fields.u64("ordersPerReservedAccount")?;

    tracing::info!(
        block_number = block.block_number,
        num_orders,
        num_reserved_accounts,
        orders_per_reserved_account,
        "auction initialized"
    );

    store
        .write_auction_constants(num_orders, num_reserved_accounts, orders_per_reserved_account)
        .await?;
    Ok(())
}
