use {
    crate::{error::ParseError, event::RawEvent},
    serde::{Deserialize, Serialize},
};

/// The closed set of batch kinds a `StateTransition` event can carry.
///
/// An earlier source variant also had an `Auction` member; auction effects
/// now flow exclusively through `AuctionSettlement` events, so this enum
/// stays at two variants by design (see SPEC_FULL.md §9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionType {
    Deposit,
    Withdraw,
}

impl TransitionType {
    fn from_u64(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::Deposit),
            1 => Some(Self::Withdraw),
            _ => None,
        }
    }
}

/// Marks the slot that just closed and the new balance-matrix commitment
/// produced by replaying its batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateTransition {
    pub transition_type: TransitionType,
    pub state_index: u64,
    pub state_hash: String,
    pub slot: u64,
}

impl StateTransition {
    pub fn parse(event: &RawEvent) -> Result<Self, ParseError> {
        let fields = event.fields();
        let raw_type = fields.u64("transitionType")?;
        let transition_type = TransitionType::from_u64(raw_type).ok_or_else(|| {
            ParseError::InvalidField {
                field: "transitionType",
                value: raw_type.to_string(),
            }
        })?;
        Ok(Self {
            transition_type,
            state_index: fields.u64("stateIndex")?,
            state_hash: fields.hash64("stateHash")?,
            slot: fields.u64("slot")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RawParam;

    fn transition_event(transition_type: u64) -> RawEvent {
        RawEvent::new(
            "StateTransition",
            vec![
                RawParam { name: "transitionType".into(), value: serde_json::json!(transition_type) },
                RawParam { name: "stateIndex".into(), value: serde_json::json!(2) },
                RawParam { name: "stateHash".into(), value: serde_json::json!("0".repeat(64)) },
                RawParam { name: "slot".into(), value: serde_json::json!(3) },
            ],
        )
    }

    #[test]
    fn parses_known_transition_types() {
        assert_eq!(
            StateTransition::parse(&transition_event(0)).unwrap().transition_type,
            TransitionType::Deposit
        );
        assert_eq!(
            StateTransition::parse(&transition_event(1)).unwrap().transition_type,
            TransitionType::Withdraw
        );
    }

    #[test]
    fn rejects_unknown_transition_type() {
        assert!(StateTransition::parse(&transition_event(2)).is_err());
    }

    #[test]
    fn rejects_wrong_length_hash() {
        let event = RawEvent::new(
            "StateTransition",
            vec![
                RawParam { name: "transitionType".into(), value: serde_json::json!(0) },
                RawParam { name: "stateIndex".into(), value: serde_json::json!(2) },
                RawParam { name: "stateHash".into(), value: serde_json::json!("abc") },
                RawParam { name: "slot".into(), value: serde_json::json!(3) },
            ],
        );
        assert!(StateTransition::parse(&event).is_err());
    }
}
