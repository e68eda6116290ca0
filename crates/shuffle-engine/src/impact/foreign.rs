use shuffle_common::Position;

use crate::dimension::{DraggableDimension, DroppableDimension, Viewport};

use super::displacement::get_displacement;
use super::types::{
    get_displaced_by, DragImpact, DragMovement, DraggableLocation, UserDirection,
};

/// Reorder inside a list the item was not lifted from.
///
/// The list has no gap reserved for the item, so siblings only ever move
/// forward to open one. A sibling that was displaced by the previous impact
/// keeps its displacement until the center clears its displaced edge, which
/// stops it from flickering at the boundary.
pub(crate) fn in_foreign_list(
    center: Position,
    draggable: &DraggableDimension,
    destination: &DroppableDimension,
    inside_destination: &[&DraggableDimension],
    previous: &DragImpact,
    viewport: &Viewport,
    user_direction: UserDirection,
) -> DragImpact {
    let axis = destination.axis;
    let is_moving_forward = user_direction.is_moving_forward(axis);
    let displaced_by = get_displaced_by(axis, draggable.displace_by, true);
    let current = center.get(axis.line());
    let shift = displaced_by.value;

    let should_displace = |child: &DraggableDimension| {
        let border_box = &child.page.border_box;
        let was_displaced = previous.movement.is_displaced(child.id());
        let edge = if is_moving_forward {
            axis.start(border_box)
        } else {
            axis.end(border_box)
        };
        if was_displaced {
            current < edge + shift
        } else {
            current < edge
        }
    };

    // the gap opens before the first sibling that has to move; everything
    // after it moves too
    let index = inside_destination
        .iter()
        .position(|child| should_displace(*child))
        .unwrap_or(inside_destination.len());

    let displaced = inside_destination[index..]
        .iter()
        .map(|child| {
            get_displacement(
                child,
                destination,
                &previous.movement,
                viewport,
                &displaced_by,
            )
        })
        .collect();

    tracing::trace!(
        droppable = %destination.id(),
        is_moving_forward,
        index,
        "foreign list reorder"
    );

    DragImpact::reorder(
        DragMovement::new(displaced, displaced_by, true),
        DraggableLocation {
            droppable_id: destination.id().clone(),
            index,
        },
    )
}
