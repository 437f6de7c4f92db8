//! The dispatcher, typed event handlers, settlement decoder, and runtime
//! shell that together replay a snapp's event stream into queryable state.

pub mod arguments;
pub mod dispatcher;
pub mod error;
pub mod event_source;
pub mod handlers;
pub mod metrics;

#[cfg(test)]
pub mod test_support;

pub use {
    dispatcher::{DispatchOutcome, Dispatcher},
    error::HandlerError,
    event_source::{BlockInfo, EventSource},
};
