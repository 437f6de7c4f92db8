use {
    crate::{error::HandlerError, event_source::BlockInfo},
    snapp_model::{AccountRecord, RawEvent},
    snapp_store::Store,
};

/// Writes the snapp-wide token/account counts and the genesis account
/// record, `state_index` 0. Fatal (a configuration error, not a data error)
/// if invoked a second time — the store reports that as
/// [`snapp_store::StoreError::AlreadyInitialized`].
pub async fn save(
    store: &dyn Store,
    event: &RawEvent,
    block: BlockInfo,
) -> Result<(), HandlerError> {
    let fields = event.fields();
    let state_hash = fields.hash64("stateHash")?;
    let num_tokens = fields.u64("maxTokens")?;
    let num_accounts = fields.u64("maxAccounts")?;

    tracing::info!(
        block_number = block.block_number,
        num_tokens,
        num_accounts,
        "snapp initialized"
    );

    store.write_snapp_constants(num_tokens, num_accounts).await?;
    store
        .write_account_state(AccountRecord::genesis(state_hash, num_tokens, num_accounts))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, snapp_model::RawParam, snapp_store::memory::InMemoryStore};

    fn init_event() -> RawEvent {
        RawEvent::new(
            "SnappInitialization",
            vec![
                RawParam { name: "stateHash".into(), value: serde_json::json!("0".repeat(64)) },
                RawParam { name: "maxTokens".into(), value: serde_json::json!(10) },
                RawParam { name: "maxAccounts".into(), value: serde_json::json!(10) },
            ],
        )
    }

    #[tokio::test]
    async fn writes_constants_and_genesis_record() {
        let store = InMemoryStore::new();
        save(&store, &init_event(), BlockInfo::default())
            .await
            .unwrap();
        assert_eq!(store.get_num_tokens().await.unwrap(), 10);
        let genesis = store.get_account_state(0).await.unwrap();
        assert_eq!(genesis.balances.len(), 100);
    }

    #[tokio::test]
    async fn second_initialization_fails() {
        let store = InMemoryStore::new();
        save(&store, &init_event(), BlockInfo::default())
            .await
            .unwrap();
        assert!(save(&store, &init_event(), BlockInfo::default())
            .await
            .is_err());
    }
}
