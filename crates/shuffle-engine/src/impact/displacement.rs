use crate::dimension::{DraggableDimension, DroppableDimension, Viewport};
use crate::visibility::is_partially_visible;

use super::types::{DisplacedBy, Displacement, DragMovement};

/// Record for a sibling that has to move out of the way.
///
/// A sibling that cannot be seen either where it is or where it is going is
/// moved without animation. One that has just come into view is also not
/// animated, so it does not slide in from its old spot.
pub(crate) fn get_displacement(
    draggable: &DraggableDimension,
    destination: &DroppableDimension,
    previous: &DragMovement,
    viewport: &Viewport,
    displaced_by: &DisplacedBy,
) -> Displacement {
    let id = draggable.id();
    let border_box = draggable.page.border_box;

    let is_visible = is_partially_visible(&border_box, destination, viewport, true)
        || is_partially_visible(
            &border_box.offset(displaced_by.point),
            destination,
            viewport,
            true,
        );

    let should_animate = if !is_visible {
        false
    } else {
        match previous.map.get(id) {
            None => true,
            Some(last) => last.is_visible,
        }
    };

    tracing::trace!(draggable = %id, is_visible, should_animate, "displacement");

    Displacement {
        draggable_id: id.clone(),
        is_visible,
        should_animate,
    }
}
