mod units;

pub use units::{Level, Power};

use std::fmt;

/// Index of an element within its module's element table.
///
/// The platform addresses sub-entities by table position, so ids are
/// dense and assigned in declaration order. Labels exist for humans;
/// driver calls use the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
