//! Driver interface this module exposes to the platform.
//!
//! The platform binds module interfaces by index rather than by name. The
//! indices form a closed set: every real slot appears in [`ApiIdx`] and
//! the count sits one past the last slot, so a dispatch table sized by
//! the count holds exactly one entry per interface.

use strum::{EnumCount, FromRepr};
use thiserror::Error;

use crate::types::{ElementId, Level, Power};

/// Interface slots exposed by the power model, in binding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, FromRepr)]
#[repr(usize)]
pub enum ApiIdx {
    /// Level/power conversion consumed by the thermal-management driver.
    ThermalDriver = 0,
}

/// Errors returned by driver operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    /// The element index is outside the configured table.
    #[error("Element {id} is out of range ({count} element(s) configured)")]
    UnknownElement { id: ElementId, count: usize },

    /// The modeled power does not fit in the power word.
    #[error("Power overflows for element {label}: coeff {coeff} at level {level}")]
    PowerOverflow {
        label: String,
        coeff: u32,
        level: Level,
    },
}

/// Conversion interface between performance levels and modeled power.
///
/// The thermal-management driver calls these per element while
/// distributing a power budget. Implementations answer from static
/// configuration and must not block.
pub trait ThermalDriver {
    /// Modeled power drawn by `element` when running at `level`.
    fn level_to_power(&self, element: ElementId, level: Level) -> Result<Power, DriverError>;

    /// Highest level `element` may run at without exceeding `power`.
    fn power_to_level(&self, element: ElementId, power: Power) -> Result<Level, DriverError>;
}
