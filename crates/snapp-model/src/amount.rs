use {
    num_bigint::BigUint,
    num_traits::Zero,
    serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _},
    std::{fmt, str::FromStr},
};

/// An arbitrary-precision, nonnegative on-chain amount.
///
/// On-chain amounts routinely exceed 64 bits, so this wraps [`BigUint`]
/// rather than a machine integer. It is transmitted over the wire and
/// persisted in the store as a decimal string, and manipulated as an
/// integer everywhere else.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nat(BigUint);

impl Nat {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn from_u64(value: u64) -> Self {
        Self(BigUint::from(value))
    }

    /// `self - rhs`, or `None` if it would go negative.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        (self.0 >= rhs.0).then(|| Self(&self.0 - &rhs.0))
    }

    pub fn checked_add(&self, rhs: &Self) -> Self {
        Self(&self.0 + &rhs.0)
    }

    /// Interprets `bytes` as a big-endian unsigned integer.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    /// Coerces a JSON event parameter value into a [`Nat`]. Event parameters
    /// arrive as either a JSON number or a decimal string so that values
    /// exceeding `u64::MAX` can still be represented.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_u64().map(Self::from_u64),
            serde_json::Value::String(s) => Self::from_str(s).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Nat {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str(s).map(Self)
    }
}

impl From<u64> for Nat {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl Serialize for Nat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Nat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(D::Error::custom)
    }
}
