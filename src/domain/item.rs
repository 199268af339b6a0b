//! Item Entity
//!
//! Represents one tracked entry together with its quantity value type.
//! Quantity coercion happens once, here at the entity boundary; the rest
//! of the crate only ever sees an already-coerced [`Quantity`].

use serde::{Deserialize, Serialize};

/// A quantity that is either a real integer or the not-a-number sentinel
/// left behind by a failed numeric coercion.
///
/// The sentinel is a domain value, not an error: it propagates through
/// sums and is never silently turned into zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Value(i64),
    /// Serializes as JSON `null`
    NotANumber,
}

impl Quantity {
    pub fn is_nan(&self) -> bool {
        matches!(self, Quantity::NotANumber)
    }

    /// Leading-decimal-prefix parse: optional sign after leading
    /// whitespace, then digits, stopping at the first non-digit.
    /// Nothing numeric consumed means the sentinel.
    fn parse_prefix(text: &str) -> Self {
        let s = text.trim_start();
        let (negative, rest) = match s.as_bytes().first().copied() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let mut value: i64 = 0;
        let mut any_digit = false;
        for b in rest.bytes() {
            if !b.is_ascii_digit() {
                break;
            }
            any_digit = true;
            value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
        }

        if !any_digit {
            return Quantity::NotANumber;
        }
        Quantity::Value(if negative { value.saturating_neg() } else { value })
    }
}

impl std::ops::Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        match (self, rhs) {
            (Quantity::Value(a), Quantity::Value(b)) => Quantity::Value(a.saturating_add(b)),
            _ => Quantity::NotANumber,
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Value(n) => write!(f, "{}", n),
            Quantity::NotANumber => write!(f, "NaN"),
        }
    }
}

/// Quantity input as supplied by callers and by the persisted payload:
/// a number, free-form text, or nothing at all (JSON `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    Number(i64),
    Text(String),
    Missing,
}

impl RawQuantity {
    /// Coerce to a [`Quantity`]. Text goes through the prefix parse;
    /// anything non-numeric ends up as the sentinel.
    pub fn coerce(&self) -> Quantity {
        match self {
            RawQuantity::Number(n) => Quantity::Value(*n),
            RawQuantity::Text(s) => Quantity::parse_prefix(s),
            RawQuantity::Missing => Quantity::NotANumber,
        }
    }
}

impl From<i64> for RawQuantity {
    fn from(n: i64) -> Self {
        RawQuantity::Number(n)
    }
}

impl From<i32> for RawQuantity {
    fn from(n: i32) -> Self {
        RawQuantity::Number(i64::from(n))
    }
}

impl From<&str> for RawQuantity {
    fn from(s: &str) -> Self {
        RawQuantity::Text(s.to_string())
    }
}

impl From<String> for RawQuantity {
    fn from(s: String) -> Self {
        RawQuantity::Text(s)
    }
}

impl From<Quantity> for RawQuantity {
    fn from(q: Quantity) -> Self {
        match q {
            Quantity::Value(n) => RawQuantity::Number(n),
            Quantity::NotANumber => RawQuantity::Missing,
        }
    }
}

/// One tracked entry
///
/// Created only by the store; never mutated afterwards. The name is kept
/// verbatim, the quantity is already coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the store, never reused
    pub id: u32,
    /// Entry label, stored verbatim
    pub name: String,
    /// Coerced quantity value
    pub quantity: Quantity,
}

impl Item {
    pub fn new(id: u32, name: String, quantity: Quantity) -> Self {
        Self { id, name, quantity }
    }
}
