use {
    crate::{error::HandlerError, event_source::BlockInfo},
    snapp_model::{AccountRecord, RawEvent, StateTransition, TransitionType},
    snapp_store::{Store, StoreError},
};

/// Replays a deposit or withdraw batch against the predecessor balance
/// matrix and writes the resulting [`AccountRecord`].
///
/// The pass over batch items is deterministic and order-sensitive: items are
/// applied in the store's insertion order, which mirrors on-chain
/// `(slot, slot_index)` order. `TransitionType` is a closed two-variant enum
/// validated at parse time, so every transition reaching this point is
/// already one of the two batch kinds below.
pub async fn save(
    store: &dyn Store,
    event: &RawEvent,
    block: BlockInfo,
) -> Result<(), HandlerError> {
    let transition = StateTransition::parse(event)?;
    let num_tokens = store.get_num_tokens().await?;
    let predecessor_index = transition.state_index.checked_sub(1).ok_or_else(|| {
        StoreError::NotFound(format!("account state {}", transition.state_index))
    })?;
    let prev = store.get_account_state(predecessor_index).await?;
    let mut balances = prev.balances;

    match transition.transition_type {
        TransitionType::Deposit => {
            for deposit in store.get_deposits(transition.slot).await? {
                let i = AccountRecord::index(num_tokens, deposit.account_id, deposit.token_id);
                balances[i] = balances[i].checked_add(&deposit.amount);
            }
        }
        TransitionType::Withdraw => {
            for withdraw in store.get_withdraws(transition.slot).await? {
                if withdraw.valid {
                    continue;
                }
                let i = AccountRecord::index(num_tokens, withdraw.account_id, withdraw.token_id);
                match balances[i].checked_sub(&withdraw.amount) {
                    Some(remaining) => {
                        balances[i] = remaining;
                        store.update_withdraw(withdraw.honored()).await?;
                    }
                    None => {
                        tracing::warn!(
                            block_number = block.block_number,
                            account_id = withdraw.account_id,
                            token_id = withdraw.token_id,
                            "insufficient balance, leaving withdraw unhonored"
                        );
                    }
                }
            }
        }
    }

    tracing::info!(
        block_number = block.block_number,
        state_index = transition.state_index,
        slot = transition.slot,
        "state transition applied"
    );
    store
        .write_account_state(AccountRecord::new(
            transition.state_index,
            transition.state_hash.clone(),
            balances,
        ))
        .await?;
    Ok(())
}
