//! Per-element linear power model for platform-management firmware.
//!
//! Each configured element carries a single coefficient. Modeled power is
//! the coefficient times the element's current performance level, and the
//! level is recovered from a power value by the inverse division. A
//! [`PowerModel`] associates one configuration with each element and
//! exposes the conversion interface at a fixed driver-API slot, the way
//! the platform's registration mechanism expects to find it.

pub mod api;
pub mod config;
pub mod model;
pub mod registry;
pub mod tracing;
pub mod types;

pub use api::{ApiIdx, DriverError, ThermalDriver};
pub use config::{ConfigError, ElementConfig, ElementEntry, PowerModelConfig};
pub use model::LinearModel;
pub use registry::{BindError, ElementDescriptor, PowerModel};
pub use types::{ElementId, Level, Power};
