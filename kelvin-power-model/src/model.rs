use crate::types::{Level, Power};

/// Linear relation between an element's performance level and its power.
///
/// Each level step costs `coeff` power units. Real platforms calibrate
/// something richer per element; the interface shape stays the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearModel {
    coeff: u32,
}

impl LinearModel {
    /// Returns `None` for a zero coefficient, which would leave the
    /// inverse undefined.
    pub fn new(coeff: u32) -> Option<Self> {
        if coeff == 0 {
            return None;
        }
        Some(Self { coeff })
    }

    pub fn coeff(&self) -> u32 {
        self.coeff
    }

    /// Modeled power at `level`, or `None` if the product overflows.
    pub fn level_to_power(&self, level: Level) -> Option<Power> {
        self.coeff.checked_mul(level.0).map(Power)
    }

    /// Largest level whose modeled power does not exceed `power`.
    pub fn power_to_level(&self, power: Power) -> Level {
        Level(power.0 / self.coeff)
    }
}
