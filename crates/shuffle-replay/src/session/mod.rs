//! A drag in progress, driven step by step from a scenario.

mod core;
mod dispatch;

pub use core::DragSession;

use shuffle_common::ShuffleError;
use shuffle_config::ShuffleConfig;

use crate::scenario::{Scenario, StepRecord};

/// Lift the scenario's item and run every step, collecting one record per
/// step. The first contract violation aborts the whole drag.
pub fn replay(scenario: Scenario, config: ShuffleConfig) -> Result<Vec<StepRecord>, ShuffleError> {
    let mut session = DragSession::lift(
        scenario.dimensions,
        scenario.window.to_viewport(),
        &scenario.dragging,
        scenario.mode,
        config,
    )?;

    scenario
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            session.dispatch(index, step).inspect_err(|e| {
                tracing::error!(step = index, "drag aborted: {e}");
            })
        })
        .collect()
}
