//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod auto_scroll;
mod logging;
mod session;

pub use auto_scroll::*;
pub use logging::*;
pub use session::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleConfig {
    pub auto_scroll: AutoScrollConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}
