use thiserror::Error;

/// Everything a handler or the dispatcher can fail with.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A required field was missing or mistyped on the raw event. Logged and
    /// the event is dropped; processing continues with the next one.
    #[error(transparent)]
    Parse(#[from] snapp_model::ParseError),

    /// A settlement's `pricesAndVolumes` payload did not decode cleanly.
    #[error(transparent)]
    Settlement(#[from] snapp_model::AuctionSettlementError),

    /// The underlying store failed; not recovered locally.
    #[error(transparent)]
    Store(#[from] snapp_store::StoreError),

    /// An internal invariant failed independent of the store — e.g. a
    /// settlement whose decoded volumes would drive a balance negative. The
    /// settlement handler trusts the prover's feasibility check and does not
    /// re-verify it (see module docs); tripping this means that trust was
    /// misplaced.
    #[error("invariant violated: {0}")]
    AssertViolation(String),

    /// Rollback semantics were never specified upstream; the dispatcher
    /// exposes the method but refuses to guess at behavior.
    #[error("rollback is not implemented")]
    Unimplemented,
}
