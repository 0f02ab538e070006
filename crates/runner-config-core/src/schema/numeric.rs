//! Numeric field type shared by every number in the configuration schema.
//!
//! Runner configuration files store all numbers as JSON numbers without a
//! distinction between integers and decimals.  [`Numeric`] holds an `f64` and
//! serializes integral values without a fractional part, so a port of `8080`
//! is written as `8080` rather than `8080.0`.

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A JSON number stored as an IEEE-754 double.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Numeric(pub f64);

impl Numeric {
    /// Returns the raw `f64` value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` unless the value is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns the value as an `i64` when it is integral and exactly
    /// representable, `None` otherwise.
    pub fn as_integer(self) -> Option<i64> {
        if self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(integer) => write!(f, "{integer}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Numeric {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<f64>().map(Self)
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(integer) => serializer.serialize_i64(integer),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
