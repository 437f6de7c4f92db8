use {
    crate::{error::HandlerError, event_source::BlockInfo},
    snapp_model::{RawEvent, Withdraw},
    snapp_store::Store,
};

/// Persists a withdraw request as `valid=false`. It is only honored later, by
/// the withdraw-batch state transition that finds sufficient balance for it.
pub async fn save(
    store: &dyn Store,
    event: &RawEvent,
    block: BlockInfo,
) -> Result<(), HandlerError> {
    let withdraw = Withdraw::parse(event)?;
    tracing::info!(
        block_number = block.block_number,
        account_id = withdraw.account_id,
        token_id = withdraw.token_id,
        slot = withdraw.slot,
        "withdraw request recorded"
    );
    store.write_withdraw(withdraw).await?;
    Ok(())
}
