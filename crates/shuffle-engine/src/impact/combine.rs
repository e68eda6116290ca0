use shuffle_common::Position;

use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::lift::OnLift;

use super::types::{Combine, CombineImpact, DragImpact, DragMovement, UserDirection};

/// Whether the center is over a sibling closely enough to combine with it.
///
/// Siblings are tested where they are currently drawn. Entering a sibling
/// combines with it straight away; the third of it furthest along the
/// direction of travel is left for reordering past it.
pub(crate) fn get_combine_impact(
    center: Position,
    draggable: &DraggableDimension,
    destination: &DroppableDimension,
    inside_destination: &[&DraggableDimension],
    previous: &DragImpact,
    user_direction: UserDirection,
    on_lift: &OnLift,
) -> Option<DragImpact> {
    if !destination.is_combine_enabled {
        return None;
    }

    let axis = destination.axis;
    let current = center.get(axis.line());
    let is_moving_forward = user_direction.is_moving_forward(axis);

    // siblings stay where the last impact in this droppable put them
    let movement = if previous.dragging_over() == Some(destination.id()) {
        previous.movement.clone()
    } else {
        DragMovement::none()
    };

    let target = inside_destination
        .iter()
        .filter(|child| child.id() != draggable.id())
        .find(|child| {
            let visual = child
                .page
                .margin_box
                .offset(on_lift.visual_offset(child.id(), &movement));
            let start = axis.start(&visual);
            let end = axis.end(&visual);
            let third = axis.size(&visual) / 3.0;
            if is_moving_forward {
                current >= start && current <= end - third
            } else {
                current >= start + third && current <= end
            }
        })?;

    let when_entered = match &previous.merge {
        Some(merge) if &merge.combine.draggable_id == target.id() => merge.when_entered,
        _ => user_direction,
    };

    tracing::debug!(
        draggable = %draggable.id(),
        target = %target.id(),
        droppable = %destination.id(),
        "combining"
    );

    Some(DragImpact::combine(
        movement,
        CombineImpact {
            when_entered,
            combine: Combine {
                draggable_id: target.id().clone(),
                droppable_id: destination.id().clone(),
            },
        },
    ))
}
