//! DragSession struct definition and lift.

use shuffle_common::{DraggableId, DroppableId, Position, ShuffleError};
use shuffle_config::ShuffleConfig;
use shuffle_engine::{
    get_lift_effect, DimensionMap, DragImpact, DraggableDimension, OnLift, UserDirection,
    Viewport,
};

use crate::scenario::MovementMode;

/// State of one drag between steps.
///
/// The engine is stateless; everything it needs from earlier steps lives
/// here and is threaded back in on every call.
pub struct DragSession {
    pub(super) config: ShuffleConfig,
    pub(super) mode: MovementMode,

    // Snapshot, updated by scrolls and placeholders
    pub(super) dimensions: DimensionMap,
    pub(super) viewport: Viewport,

    // The dragged item as measured at lift
    pub(super) draggable: DraggableDimension,
    pub(super) on_lift: OnLift,

    pub(super) impact: DragImpact,
    pub(super) client_selection: Position,
    pub(super) page_center: Position,
    pub(super) direction: UserDirection,

    // Foreign droppable currently grown to fit the item
    pub(super) placeholder_in: Option<DroppableId>,
}

impl DragSession {
    /// Start a drag of `dragging` from where it was measured.
    pub fn lift(
        dimensions: DimensionMap,
        viewport: Viewport,
        dragging: &DraggableId,
        mode: MovementMode,
        config: ShuffleConfig,
    ) -> Result<Self, ShuffleError> {
        let draggable = dimensions.draggable(dragging)?.clone();
        let home = dimensions.droppable(&draggable.descriptor.droppable_id)?;
        let (on_lift, impact) = get_lift_effect(&draggable, home, &dimensions, &viewport)?;
        tracing::info!(draggable = %dragging, home = %home.id(), ?mode, "drag started");

        Ok(Self {
            config,
            mode,
            client_selection: draggable.client.border_box.center(),
            page_center: draggable.page.border_box.center(),
            dimensions,
            viewport,
            draggable,
            on_lift,
            impact,
            direction: UserDirection::default(),
            placeholder_in: None,
        })
    }

    /// Page center of the item when it is rendered at `client`.
    pub(super) fn page_from_client(&self, client: Position) -> Position {
        client - self.draggable.client.border_box.center()
            + self.draggable.page.border_box.center()
            + self.viewport.scroll.diff.value
    }
}

#[cfg(test)]
impl DragSession {
    pub fn impact(&self) -> &DragImpact {
        &self.impact
    }

    pub fn dimensions(&self) -> &DimensionMap {
        &self.dimensions
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
