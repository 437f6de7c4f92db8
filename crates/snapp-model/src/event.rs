use {crate::error::ParseError, serde::Serialize, std::collections::HashMap};

/// The name/params envelope a chain listener decodes on-chain logs into,
/// before any handler has interpreted it.
///
/// `params` is a flat list rather than a map because that is the shape the
/// listener hands us; [`RawEvent::fields`] turns it into the lookup table
/// each handler's parse step actually walks.
#[derive(Clone, Debug, Serialize)]
pub struct RawEvent {
    pub name: String,
    pub params: Vec<RawParam>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RawParam {
    pub name: String,
    pub value: serde_json::Value,
}

impl RawEvent {
    pub fn new(name: impl Into<String>, params: Vec<RawParam>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn fields(&self) -> Fields<'_> {
        Fields(
            self.params
                .iter()
                .map(|p| (p.name.as_str(), &p.value))
                .collect(),
        )
    }
}

/// A name → value lookup over one event's parameters, with the typed
/// accessors every domain type's `parse` uses. Centralizing these keeps the
/// "missing or mistyped field" error message consistent across handlers.
pub struct Fields<'a>(HashMap<&'a str, &'a serde_json::Value>);

impl<'a> Fields<'a> {
    fn get(&self, name: &'static str) -> Result<&'a serde_json::Value, ParseError> {
        self.0.get(name).copied().ok_or(ParseError::MissingField(name))
    }

    fn invalid(name: &'static str, value: &serde_json::Value) -> ParseError {
        ParseError::InvalidField {
            field: name,
            value: value.to_string(),
        }
    }

    pub fn u64(&self, name: &'static str) -> Result<u64, ParseError> {
        let value = self.get(name)?;
        value
            .as_u64()
            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
            .ok_or_else(|| Self::invalid(name, value))
    }

    pub fn nat(&self, name: &'static str) -> Result<crate::amount::Nat, ParseError> {
        let value = self.get(name)?;
        crate::amount::Nat::from_json(value).ok_or_else(|| Self::invalid(name, value))
    }

    pub fn str(&self, name: &'static str) -> Result<&'a str, ParseError> {
        let value = self.get(name)?;
        value.as_str().ok_or_else(|| Self::invalid(name, value))
    }

    pub fn bool(&self, name: &'static str) -> Result<bool, ParseError> {
        let value = self.get(name)?;
        value.as_bool().ok_or_else(|| Self::invalid(name, value))
    }

    /// A hex `state_hash`: exactly 64 hex characters, no `0x` prefix.
    pub fn hash64(&self, name: &'static str) -> Result<String, ParseError> {
        let value = self.get(name)?;
        match value.as_str() {
            Some(s) if s.len() == 64 && s.bytes().all(|b| b.is_ascii_hexdigit()) => {
                Ok(s.to_owned())
            }
            _ => Err(Self::invalid(name, value)),
        }
    }

    /// A nested list of events, used by `StandingSellOrderBatch.orders`.
    pub fn raw_events(&self, name: &'static str) -> Result<Vec<RawEvent>, ParseError> {
        let value = self.get(name)?;
        let items = value.as_array().ok_or_else(|| Self::invalid(name, value))?;
        items
            .iter()
            .map(|item| {
                let obj = item.as_object().ok_or_else(|| Self::invalid(name, value))?;
                let params = obj
                    .iter()
                    .map(|(k, v)| RawParam {
                        name: k.clone(),
                        value: v.clone(),
                    })
                    .collect();
                Ok(RawEvent::new(name.to_string(), params))
            })
            .collect()
    }
}
