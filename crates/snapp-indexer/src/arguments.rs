use std::{net::SocketAddr, time::Duration};

/// Flags covering only the runtime shell's own concerns. Contract addresses
/// and node URLs are read from the environment by the (external) event
/// source, not by this crate.
#[derive(clap::Parser)]
pub struct Arguments {
    /// How long to sleep between polls of the event source when it reports
    /// nothing new.
    #[clap(
        long,
        env,
        default_value = "1000",
        value_parser = duration_from_millis,
    )]
    pub poll_interval: Duration,

    /// Address the Prometheus metrics endpoint binds to.
    #[clap(long, env, default_value = "0.0.0.0:9590")]
    pub metrics_address: SocketAddr,

    /// Log filter passed to `tracing_subscriber::EnvFilter`, e.g.
    /// `snapp_indexer=debug,info`.
    #[clap(long, env, default_value = "info")]
    pub log_filter: String,
}

fn duration_from_millis(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_millis)
}
