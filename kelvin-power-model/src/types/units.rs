//! Quantities the power model converts between.
//!
//! Both are bare 32-bit words in platform-defined units. Wrapping them
//! keeps levels and powers from being swapped at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Performance operating point of an element.
///
/// Levels are ordered and platform-defined; higher levels run faster and
/// draw more power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(pub u32);

impl From<u32> for Level {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Modeled electrical power, in platform-defined units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Power(pub u32);

impl From<u32> for Power {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
