use thiserror::Error;

/// Failures a [`super::Store`] implementation can report back to a handler.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A requested `state_index` (or other keyed lookup) has no record.
    /// Indicates a gap in the event stream upstream; fatal for that event.
    #[error("not found: {0}")]
    NotFound(String),

    /// A one-time write (genesis account state, snapp/auction constants) was
    /// attempted a second time.
    #[error("{0} was already written")]
    AlreadyInitialized(&'static str),

    /// An internal invariant the store itself is responsible for failed,
    /// independent of the handler's own bookkeeping.
    #[error("invariant violated: {0}")]
    AssertViolation(String),

    /// The backing implementation failed for reasons opaque to this trait
    /// (I/O, serialization, a real document store's driver error, …).
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
