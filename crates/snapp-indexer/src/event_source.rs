use {async_trait::async_trait, snapp_model::RawEvent};

/// The chain position a [`RawEvent`] was decoded from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockInfo {
    pub block_number: u64,
    pub log_index: u64,
}

/// The narrow boundary an external chain listener implements: hand the
/// dispatcher the next batch of decoded events, or signal nothing new yet.
///
/// This core does not poll blocks, decode logs, or detect reorgs; it only
/// drives whatever implementation it is handed.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Returns the next batch of decoded events in chain order, oldest
    /// first. An empty batch means nothing new is available yet.
    async fn poll(&self) -> anyhow::Result<Vec<(BlockInfo, RawEvent)>>;
}
