use {
    crate::{error::HandlerError, event_source::BlockInfo, handlers},
    snapp_model::RawEvent,
    snapp_store::Store,
    std::sync::Arc,
};

/// Decodes heterogeneous event records and routes each to its typed handler
/// by name.
///
/// The set of event kinds is fixed and known, so this is a name → function
/// table rather than an open trait-object hierarchy over a polymorphic
/// handler base.
pub struct Dispatcher {
    store: Arc<dyn Store>,
}

/// Whether `dispatch` found a handler for the event's name.
///
/// Distinguished from a handler error so callers can meter "we don't
/// recognize this event" separately from "we recognized it and failed to
/// apply it".
#[derive(Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled,
    Unrecognized,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Normalizes byte-string parameter values to lowercase hex without a
    /// `0x` prefix, looks up the handler for `event.name`, and invokes it.
    /// Unknown names are logged and dropped — not an error.
    pub async fn dispatch(
        &self,
        event: RawEvent,
        block: BlockInfo,
    ) -> Result<DispatchOutcome, HandlerError> {
        let event = normalize_byte_params(event);
        let store = self.store.as_ref();

        match event.name.as_str() {
            "Deposit" => handlers::deposit::save(store, &event, block).await,
            "WithdrawRequest" => handlers::withdraw_request::save(store, &event, block).await,
            "SellOrder" => handlers::order::save(store, &event, block).await,
            "StandingSellOrderBatch" => handlers::standing_order::save(store, &event, block).await,
            "StateTransition" => handlers::state_transition::save(store, &event, block).await,
            "AuctionSettlement" => handlers::auction_settlement::save(store, &event, block).await,
            "SnappInitialization" => {
                handlers::snapp_initialization::save(store, &event, block).await
            }
            "AuctionInitialization" => {
                handlers::auction_initialization::save(store, &event, block).await
            }
            other => {
                tracing::warn!(event_name = other, "dropping unrecognized event");
                return Ok(DispatchOutcome::Unrecognized);
            }
        }
        .map(|()| DispatchOutcome::Handled)
    }

    /// Reorg handling. The intended semantics (undo of balance deltas?
    /// deletion of collection entries? re-indexing the state chain?) were
    /// never specified upstream, so this refuses to guess rather than
    /// silently doing the wrong thing.
    pub async fn rollback(&self, _to_block: u64) -> Result<(), HandlerError> {
        Err(HandlerError::Unimplemented)
    }
}

fn normalize_byte_params(mut event: RawEvent) -> RawEvent {
    for param in &mut event.params {
        if let serde_json::Value::Array(bytes) = &param.value {
            if let Some(hex_string) = as_lowercase_hex(bytes) {
                param.value = serde_json::Value::String(hex_string);
            }
        }
    }
    event
}

/// Renders a JSON array of byte values (each `0..=255`) as lowercase hex
/// without a `0x` prefix. Returns `None` if the array isn't a byte string.
fn as_lowercase_hex(values: &[serde_json::Value]) -> Option<String> {
    let bytes: Vec<u8> = values
        .iter()
        .map(|v| v.as_u64().filter(|b| *b <= 0xff).map(|b| b as u8))
        .collect::<Option<_>>()?;
    Some(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use {super::*, snapp_model::RawParam, snapp_store::memory::InMemoryStore};

    #[tokio::test]
    async fn unknown_event_is_dropped_without_error() {
        let dispatcher = Dispatcher::new(Arc::new(InMemoryStore::new()));
        let event = RawEvent::new("Foo", vec![]);
        let outcome = dispatcher.dispatch(event, BlockInfo::default()).await.unwrap();
        assert_eq!(outcome, DispatchOutcome::Unrecognized);
    }

    #[tokio::test]
    async fn rollback_is_unimplemented() {
        let dispatcher = Dispatcher::new(Arc::new(InMemoryStore::new()));
        assert!(matches!(
            dispatcher.rollback(0).await,
            Err(HandlerError::Unimplemented)
        ));
    }

    #[test]
    fn byte_array_param_normalizes_to_lowercase_hex() {
        let event = RawEvent::new(
            "Deposit",
            vec![RawParam {
                name: "stateHash".into(),
                value: serde_json::json!([0xAB, 0x01]),
            }],
        );
        let normalized = normalize_byte_params(event);
        assert_eq!(
            normalized.params[0].value,
            serde_json::Value::String("ab01".to_owned())
        );
    }
}
