//! Full configuration validation.
//!
//! Validates numeric ranges and the ordering between related thresholds.

use crate::schema::ShuffleConfig;
use shuffle_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShuffleConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    let auto_scroll = &config.auto_scroll;

    validate_range_f64(
        &mut errors,
        "auto_scroll.start_scrolling_from",
        auto_scroll.start_scrolling_from,
        0.0,
        1.0,
    );
    validate_range_f64(
        &mut errors,
        "auto_scroll.max_scroll_at_percentage",
        auto_scroll.max_scroll_at_percentage,
        0.0,
        1.0,
    );
    validate_range_f64(
        &mut errors,
        "auto_scroll.max_pixel_scroll",
        auto_scroll.max_pixel_scroll,
        1.0,
        200.0,
    );
    validate_range_f64(
        &mut errors,
        "auto_scroll.min_scroll",
        auto_scroll.min_scroll,
        0.0,
        auto_scroll.max_pixel_scroll,
    );

    if auto_scroll.max_scroll_at_percentage >= auto_scroll.start_scrolling_from {
        errors.push(format!(
            "auto_scroll.max_scroll_at_percentage = {} must be below auto_scroll.start_scrolling_from = {}",
            auto_scroll.max_scroll_at_percentage, auto_scroll.start_scrolling_from
        ));
    }

    if auto_scroll.accelerate_at_ms > auto_scroll.stop_dampening_at_ms {
        errors.push(format!(
            "auto_scroll.accelerate_at_ms = {} must not exceed auto_scroll.stop_dampening_at_ms = {}",
            auto_scroll.accelerate_at_ms, auto_scroll.stop_dampening_at_ms
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    // NaN fails both comparisons, so it is checked explicitly.
    if value.is_nan() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
