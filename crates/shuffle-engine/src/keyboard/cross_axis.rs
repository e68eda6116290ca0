use shuffle_common::{InvariantError, Position};

use crate::candidates::{get_best_cross_axis_droppable, get_closest_draggable};
use crate::center::{get_client_from_page_border_box_center, get_page_border_box_center};
use crate::dimension::{
    with_droppable_displacement, DimensionMap, DraggableDimension, DroppableDimension, Viewport,
};
use crate::impact::{reorder_impact_at, DragImpact};
use crate::lift::OnLift;

use super::KeyboardMoveResult;

#[derive(Debug, Clone, Copy)]
pub struct MoveCrossAxisArgs<'a> {
    pub is_moving_forward: bool,
    pub previous_page_border_box_center: Position,
    pub draggable: &'a DraggableDimension,
    /// The droppable the item is currently over.
    pub is_over: &'a DroppableDimension,
    pub dimensions: &'a DimensionMap,
    pub previous_impact: &'a DragImpact,
    pub viewport: &'a Viewport,
    pub on_lift: &'a OnLift,
}

/// Jump to the neighbouring list on the cross axis, lining up with its
/// nearest visible item.
///
/// The target list is visible by construction, so this never asks for a
/// scroll jump.
pub fn move_cross_axis(
    args: MoveCrossAxisArgs<'_>,
) -> Result<Option<KeyboardMoveResult>, InvariantError> {
    let MoveCrossAxisArgs {
        is_moving_forward,
        previous_page_border_box_center,
        draggable,
        is_over,
        dimensions,
        previous_impact,
        viewport,
        on_lift,
    } = args;

    let Some(destination) = get_best_cross_axis_droppable(
        is_moving_forward,
        previous_page_border_box_center,
        is_over,
        &dimensions.droppables,
        viewport,
    ) else {
        tracing::trace!(from = %is_over.id(), "no droppable on the cross axis");
        return Ok(None);
    };

    let inside = dimensions.draggables_inside(destination.id());
    let target = get_closest_draggable(
        viewport,
        previous_page_border_box_center,
        destination,
        &inside,
    );

    let index = match target {
        None if inside.is_empty() => 0,
        // every item is out of view
        None => return Ok(None),
        Some(target) => {
            let position = inside
                .iter()
                .position(|child| child.id() == target.id())
                .unwrap_or(target.descriptor.index);
            if destination.is_home_of(draggable) {
                position
            } else {
                let axis = destination.axis;
                let target_center =
                    with_droppable_displacement(destination, target.page.border_box.center());
                let is_going_before = previous_page_border_box_center.get(axis.line())
                    < target_center.get(axis.line());
                if is_going_before {
                    position
                } else {
                    position + 1
                }
            }
        }
    };

    tracing::debug!(
        draggable = %draggable.id(),
        from = %is_over.id(),
        to = %destination.id(),
        index,
        "keyboard cross axis move"
    );

    let impact = reorder_impact_at(
        draggable,
        destination,
        &inside,
        index,
        previous_impact,
        viewport,
    );

    let page_center = get_page_border_box_center(&impact, draggable, dimensions, on_lift)?;
    Ok(Some(KeyboardMoveResult {
        client_selection: get_client_from_page_border_box_center(page_center, draggable, viewport),
        impact,
        scroll_jump_request: None,
    }))
}
