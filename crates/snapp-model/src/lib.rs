//! Value types for snapp event payloads and persisted records.
//!
//! Every type here exposes `parse` (raw decoded event → typed value) and
//! derives `Serialize`/`Deserialize` for the `to_dictionary`-equivalent
//! persistence projection. No behavior lives here beyond validated
//! construction, canonical (de)serialization, and the settlement decoder,
//! which is intrinsic to `AuctionSettlement` construction.

pub mod account_record;
pub mod amount;
pub mod auction_settlement;
pub mod constants;
pub mod deposit;
pub mod error;
pub mod event;
pub mod order;
pub mod settlement_decoder;
pub mod standing_order;
pub mod state_transition;
pub mod withdraw;

pub use {
    account_record::AccountRecord,
    amount::Nat,
    auction_settlement::{AuctionSettlement, AuctionSettlementError},
    constants::Constants,
    deposit::Deposit,
    error::ParseError,
    event::{Fields, RawEvent, RawParam},
    order::Order,
    settlement_decoder::{AuctionResults, MalformedSettlement},
    standing_order::StandingOrder,
    state_transition::{StateTransition, TransitionType},
    withdraw::Withdraw,
};
