use {
    crate::{error::HandlerError, event_source::BlockInfo},
    snapp_model::{Deposit, RawEvent},
    snapp_store::Store,
};

/// Persists a deposit. No balance changes here — balances only move once the
/// state transition that closes `slot` is processed.
pub async fn save(
    store: &dyn Store,
    event: &RawEvent,
    block: BlockInfo,
) -> Result<(), HandlerError> {
    let deposit = Deposit::parse(event)?;
    tracing::info!(
        block_number = block.block_number,
        account_id = deposit.account_id,
        token_id = deposit.token_id,
        slot = deposit.slot,
        "deposit recorded"
    );
    store.write_deposit(deposit).await?;
    Ok(())
}
