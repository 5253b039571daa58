//! Static configuration consumed once at module construction.
//!
//! The platform hands each module its element table at startup. The types
//! here are plain data; validation happens when [`crate::PowerModel::new`]
//! consumes the table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-element configuration.
///
/// Exactly one of these is associated with each element the module
/// drives. Read-only after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementConfig {
    /// Coefficient relating power to performance level. Modeled power is
    /// `coeff` times the level; the level is recovered from a power value
    /// by the inverse division.
    pub coeff: u32,
}

/// One row of a module's element table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementEntry {
    /// Name used in logs and tooling. Unique within a module.
    pub label: String,

    /// The element's configuration, flattened so a table row reads
    /// `{ "label": ..., "coeff": ... }`.
    #[serde(flatten)]
    pub config: ElementConfig,
}

/// Module-level configuration: the full element table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerModelConfig {
    pub elements: Vec<ElementEntry>,
}

/// Configuration defects reported at module construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Element table is empty")]
    NoElements,

    #[error("Element {index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("Duplicate element label: {label}")]
    DuplicateLabel { label: String },

    #[error("Element {label} has a zero coefficient")]
    ZeroCoefficient { label: String },
}
