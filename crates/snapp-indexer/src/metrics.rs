use {
    axum::{routing::get, Router},
    prometheus::{Encoder, Registry, TextEncoder},
    std::{net::SocketAddr, sync::Arc},
};

/// Events processed by kind, events dropped by reason, and the poll loop's
/// tick counter — the indexer's own observability surface, independent of
/// whatever a store backend chooses to expose.
#[derive(prometheus_metric_storage::MetricStorage)]
#[metric(subsystem = "indexer")]
pub struct Metrics {
    /// Number of events successfully applied, labelled by event name.
    #[metric(labels("event_name"))]
    pub events_processed: prometheus::IntCounterVec,

    /// Number of events dropped, labelled by reason (`unknown_event`,
    /// `malformed`, `store_error`, `invariant_violation`).
    #[metric(labels("reason"))]
    pub events_dropped: prometheus::IntCounterVec,

    /// Number of poll/dispatch/sleep loop iterations completed.
    pub poll_ticks: prometheus::IntCounter,
}

/// Serves the process's registered Prometheus collectors as plaintext over
/// `GET /metrics`, mirroring the host stack's axum-based metrics surface.
pub async fn serve(registry: Arc<Registry>, address: SocketAddr) -> anyhow::Result<()> {
    let app = Router::new().route(
        "/metrics",
        get(move || {
            let registry = registry.clone();
            async move { render(&registry) }
        }),
    );
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn render(registry: &Registry) -> String {
    let families = registry.gather();
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&families, &mut buffer)
        .expect("prometheus text encoding is infallible for well-formed metric families");
    String::from_utf8(buffer).expect("prometheus text encoding is valid utf-8")
}
