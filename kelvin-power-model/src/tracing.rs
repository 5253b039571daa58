//! Logging support.
//!
//! Crate modules pull the standard macros through [`prelude`] so call
//! sites stay terse. Subscriber installation is left to binaries.

/// Common tracing imports for crate modules.
pub mod prelude {
    pub use tracing::{debug, error, info, trace, warn};
}
