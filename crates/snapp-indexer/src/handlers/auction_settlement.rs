use {
    crate::{error::HandlerError, event_source::BlockInfo},
    snapp_model::{AccountRecord, AuctionSettlement, RawEvent},
    snapp_store::{Store, StoreError},
};

/// Applies a cleared auction's decoded buy/sell volumes to the predecessor
/// balance matrix and writes the resulting [`AccountRecord`].
///
/// Does NOT re-verify solution feasibility (non-negativity, limit price,
/// conservation) — that is the prover's responsibility upstream. A balance
/// that would go negative here means that upstream guarantee was broken, not
/// a recoverable data condition, so it surfaces as
/// [`HandlerError::AssertViolation`] rather than being silently clamped.
pub async fn save(
    store: &dyn Store,
    event: &RawEvent,
    block: BlockInfo,
) -> Result<(), HandlerError> {
    let num_tokens = store.get_num_tokens().await?;
    let num_orders = store.get_num_orders().await?;
    let settlement = AuctionSettlement::parse(event, num_tokens, num_orders)?;

    let predecessor_index = settlement.state_index.checked_sub(1).ok_or_else(|| {
        StoreError::NotFound(format!("account state {}", settlement.state_index))
    })?;
    let prev = store.get_account_state(predecessor_index).await?;
    let mut balances = prev.balances;
    let orders = store.get_orders(settlement.auction_id).await?;

    let results = &settlement.prices_and_volumes;
    for ((order, buy), sell) in orders
        .iter()
        .zip(results.buy_amounts.iter())
        .zip(results.sell_amounts.iter())
    {
        let buy_index = AccountRecord::index(num_tokens, order.account_id, order.buy_token);
        let sell_index = AccountRecord::index(num_tokens, order.account_id, order.sell_token);
        balances[buy_index] = balances[buy_index].checked_add(buy);
        balances[sell_index] = balances[sell_index].checked_sub(sell).ok_or_else(|| {
            HandlerError::AssertViolation(format!(
                "settlement would drive account {} token {} negative",
                order.account_id, order.sell_token
            ))
        })?;
    }

    tracing::info!(
        block_number = block.block_number,
        auction_id = settlement.auction_id,
        state_index = settlement.state_index,
        order_count = orders.len(),
        "auction settlement applied"
    );
    store
        .write_account_state(AccountRecord::new(
            settlement.state_index,
            settlement.state_hash.clone(),
            balances,
        ))
        .await?;
    Ok(())
}
