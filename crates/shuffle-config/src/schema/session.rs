use serde::{Deserialize, Serialize};

/// Flags that hold for a whole drag session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// When false, auto-scroll never moves the window; only scroll
    /// containers and manual movement absorb a jump.
    pub window_scroll_allowed: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_scroll_allowed: true,
        }
    }
}
