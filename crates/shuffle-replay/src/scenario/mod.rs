//! Scenario files: a dimension snapshot and the steps of one drag.

mod types;

pub use types::*;

use std::path::Path;

use shuffle_common::ShuffleError;

/// Parse a scenario from a JSON string.
pub fn load_from_str(content: &str) -> Result<Scenario, ShuffleError> {
    let scenario: Scenario = serde_json::from_str(content)?;
    tracing::debug!(
        draggables = scenario.dimensions.draggables.len(),
        droppables = scenario.dimensions.droppables.len(),
        steps = scenario.steps.len(),
        "parsed scenario"
    );
    Ok(scenario)
}

/// Load a scenario from a JSON file.
pub fn load_from_path(path: &Path) -> Result<Scenario, ShuffleError> {
    let content = std::fs::read_to_string(path)?;
    let scenario = load_from_str(&content)?;
    tracing::info!("loaded scenario from {}", path.display());
    Ok(scenario)
}
