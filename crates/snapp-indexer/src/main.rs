use {
    clap::Parser,
    snapp_indexer::{
        arguments::Arguments, dispatcher::Dispatcher, metrics, BlockInfo, DispatchOutcome,
        EventSource, HandlerError,
    },
    snapp_model::RawEvent,
    snapp_store::{memory::InMemoryStore, Store},
    std::sync::Arc,
};

/// Stands in for the external chain listener until one is wired in. Always
/// reports "nothing new yet" — contract polling, log decoding, and reorg
/// detection are an external collaborator's job, not this crate's.
struct NoopEventSource;

#[async_trait::async_trait]
impl EventSource for NoopEventSource {
    async fn poll(&self) -> anyhow::Result<Vec<(BlockInfo, RawEvent)>> {
        Ok(Vec::new())
    }
}

#[tokio::main]
async fn main() {
    let args = Arguments::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(args.log_filter.clone()))
        .init();
    tracing::info!(
        poll_interval = ?args.poll_interval,
        metrics_address = %args.metrics_address,
        "starting snapp-indexer"
    );

    let registry = Arc::new(prometheus::Registry::new());
    let metrics = metrics::Metrics::instance(registry.as_ref()).expect("metrics registration");

    let store: Arc<dyn Store> = Arc::new(InMemoryStore::new());
    let dispatcher = Dispatcher::new(store);
    let event_source: Arc<dyn EventSource> = Arc::new(NoopEventSource);

    let serve_metrics = metrics::serve(registry.clone(), args.metrics_address);
    let poll_loop = poll_and_dispatch(&dispatcher, event_source.as_ref(), metrics, args.poll_interval);

    tokio::select! {
        result = serve_metrics => tracing::error!(?result, "metrics server exited"),
        _ = poll_loop => {},
    }
}

/// Maps a handler failure to the `reason` label recorded against
/// `events_dropped`.
fn drop_reason(err: &HandlerError) -> &'static str {
    match err {
        HandlerError::Parse(_) | HandlerError::Settlement(_) => "malformed",
        HandlerError::Store(_) => "store_error",
        HandlerError::AssertViolation(_) | HandlerError::Unimplemented => "invariant_violation",
    }
}

/// Instantiates the dispatcher over a store and an event source, polls the
/// event source, sleeps briefly between polls, repeats.
async fn poll_and_dispatch(
    dispatcher: &Dispatcher,
    event_source: &dyn EventSource,
    metrics: &metrics::Metrics,
    poll_interval: std::time::Duration,
) {
    loop {
        match event_source.poll().await {
            Ok(batch) => {
                for (block, event) in batch {
                    let event_name = event.name.clone();
                    match dispatcher.dispatch(event, block).await {
                        Ok(DispatchOutcome::Handled) => {
                            metrics.events_processed.with_label_values(&[&event_name]).inc();
                        }
                        Ok(DispatchOutcome::Unrecognized) => {
                            metrics.events_dropped.with_label_values(&["unknown_event"]).inc();
                        }
                        Err(err) => {
                            tracing::error!(%err, %event_name, "failed to apply event");
                            metrics
                                .events_dropped
                                .with_label_values(&[drop_reason(&err)])
                                .inc();
                        }
                    }
                }
            }
            Err(err) => tracing::error!(%err, "event source poll failed"),
        }
        metrics.poll_ticks.inc();
        tokio::time::sleep(poll_interval).await;
    }
}
