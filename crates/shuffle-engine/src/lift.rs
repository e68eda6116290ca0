//! The snapshot taken when a drag starts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shuffle_common::{DraggableId, InvariantError, Position, ORIGIN};

use crate::dimension::{DimensionMap, DraggableDimension, DroppableDimension, Viewport};
use crate::impact::{reorder_impact_at, DisplacedBy, DragImpact, DragMovement};

/// Which siblings were already displaced when the drag began.
///
/// Later impacts describe displacement relative to the lift layout, so a
/// sibling that started displaced has to be shifted back to find where it
/// is drawn now.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OnLift {
    pub was_displaced: BTreeSet<DraggableId>,
    pub displaced_by: DisplacedBy,
}

impl OnLift {
    pub fn was_displaced(&self, id: &DraggableId) -> bool {
        self.was_displaced.contains(id)
    }

    /// Offset between where a sibling was measured and where it is drawn
    /// under `movement`.
    pub fn visual_offset(&self, id: &DraggableId, movement: &DragMovement) -> Position {
        let now = if movement.is_displaced(id) {
            movement.displaced_by.point
        } else {
            ORIGIN
        };
        let at_lift = if self.was_displaced(id) {
            self.displaced_by.point
        } else {
            ORIGIN
        };
        now - at_lift
    }
}

/// Build the lift snapshot and the first impact of a drag: the item sits in
/// its home at its own index with nothing displaced.
pub fn get_lift_effect(
    draggable: &DraggableDimension,
    home: &DroppableDimension,
    dimensions: &DimensionMap,
    viewport: &Viewport,
) -> Result<(OnLift, DragImpact), InvariantError> {
    if !home.is_home_of(draggable) {
        tracing::error!(
            draggable = %draggable.id(),
            droppable = %home.id(),
            "lifted draggable is not inside its home"
        );
        return Err(InvariantError::NotInDroppable {
            draggable: draggable.id().clone(),
            droppable: home.id().clone(),
        });
    }

    let inside = dimensions.draggables_inside(home.id());
    let impact = reorder_impact_at(
        draggable,
        home,
        &inside,
        draggable.descriptor.index,
        &DragImpact::none(),
        viewport,
    );

    let on_lift = OnLift {
        was_displaced: impact
            .movement
            .displaced
            .iter()
            .map(|displacement| displacement.draggable_id.clone())
            .collect(),
        displaced_by: impact.movement.displaced_by,
    };
    tracing::debug!(draggable = %draggable.id(), home = %home.id(), "lifted");

    Ok((on_lift, impact))
}
