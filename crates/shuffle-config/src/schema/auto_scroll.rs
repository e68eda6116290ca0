//! Fluid auto-scroll tuning.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How fast a container scrolls while the dragged item is near its edge.
///
/// Distances are fractions of the container size on the scroll axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScrollConfig {
    /// Distance from an edge at which scrolling begins (valid range: 0.0-1.0).
    pub start_scrolling_from: f64,
    /// Distance from an edge at which the maximum speed is reached
    /// (valid range: 0.0-1.0, below `start_scrolling_from`).
    pub max_scroll_at_percentage: f64,
    /// Maximum scroll per frame in pixels (valid range: 1-200).
    pub max_pixel_scroll: f64,
    /// Smallest non-zero scroll per frame in pixels.
    pub min_scroll: f64,
    /// Before this much drag time only `min_scroll` is applied.
    pub accelerate_at_ms: u64,
    /// After this much drag time the speed is no longer dampened.
    pub stop_dampening_at_ms: u64,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            start_scrolling_from: 0.25,
            max_scroll_at_percentage: 0.05,
            max_pixel_scroll: 28.0,
            min_scroll: 1.0,
            accelerate_at_ms: 360,
            stop_dampening_at_ms: 1200,
        }
    }
}

impl AutoScrollConfig {
    pub fn accelerate_at(&self) -> Duration {
        Duration::from_millis(self.accelerate_at_ms)
    }

    pub fn stop_dampening_at(&self) -> Duration {
        Duration::from_millis(self.stop_dampening_at_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_scroll_defaults() {
        let config = AutoScrollConfig::default();
        assert!((config.start_scrolling_from - 0.25).abs() < f64::EPSILON);
        assert!((config.max_scroll_at_percentage - 0.05).abs() < f64::EPSILON);
        assert!((config.max_pixel_scroll - 28.0).abs() < f64::EPSILON);
        assert_eq!(config.accelerate_at(), Duration::from_millis(360));
        assert_eq!(config.stop_dampening_at(), Duration::from_millis(1200));
    }

    #[test]
    fn auto_scroll_partial_toml() {
        let config: AutoScrollConfig = toml::from_str("accelerate_at_ms = 0\n").unwrap();
        assert_eq!(config.accelerate_at_ms, 0);
        assert_eq!(config.stop_dampening_at_ms, 1200);
    }
}
