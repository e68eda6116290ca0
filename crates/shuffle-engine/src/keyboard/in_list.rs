use shuffle_common::{InvariantError, Position};

use crate::dimension::{DimensionMap, DraggableDimension, DroppableDimension, Viewport};
use crate::impact::{
    reorder_impact_at, Combine, CombineImpact, DragImpact, DraggableLocation, UserDirection,
};
use crate::lift::OnLift;

use super::{land, KeyboardMoveResult, Landing};

#[derive(Debug, Clone, Copy)]
pub struct MoveInListArgs<'a> {
    pub is_moving_forward: bool,
    pub draggable: &'a DraggableDimension,
    pub dimensions: &'a DimensionMap,
    pub previous_impact: &'a DragImpact,
    pub previous_page_border_box_center: Position,
    pub previous_client_selection: Position,
    pub viewport: &'a Viewport,
    pub on_lift: &'a OnLift,
}

/// Step one place forward or backward in the current list.
///
/// `Ok(None)` when the step is not possible: not over a list, the list is
/// disabled, or the item is already at that end.
pub fn move_in_list(
    args: MoveInListArgs<'_>,
) -> Result<Option<KeyboardMoveResult>, InvariantError> {
    let MoveInListArgs {
        is_moving_forward,
        draggable,
        dimensions,
        previous_impact,
        previous_page_border_box_center,
        previous_client_selection,
        viewport,
        on_lift,
    } = args;

    let Some(droppable_id) = previous_impact.dragging_over() else {
        return Ok(None);
    };
    let destination = dimensions.droppable(droppable_id)?;
    if !destination.is_enabled {
        tracing::trace!(droppable = %destination.id(), "keyboard move in disabled droppable");
        return Ok(None);
    }

    let inside = dimensions.draggables_inside(destination.id());
    let step = Step {
        is_moving_forward,
        draggable,
        destination,
        inside: &inside,
        previous: previous_impact,
        viewport,
    };

    let impact = match (&previous_impact.merge, &previous_impact.destination) {
        (Some(merge), _) => Some(step.from_combine(merge)?),
        (None, Some(location)) => step.from_reorder(location),
        (None, None) => None,
    };
    let Some(impact) = impact else {
        return Ok(None);
    };

    land(Landing {
        impact,
        draggable,
        destination,
        dimensions,
        viewport,
        on_lift,
        previous_page_border_box_center,
        previous_client_selection,
    })
    .map(Some)
}

struct Step<'a> {
    is_moving_forward: bool,
    draggable: &'a DraggableDimension,
    destination: &'a DroppableDimension,
    inside: &'a [&'a DraggableDimension],
    previous: &'a DragImpact,
    viewport: &'a Viewport,
}

impl Step<'_> {
    fn is_home(&self) -> bool {
        self.destination.is_home_of(self.draggable)
    }

    /// Siblings in their order on screen, without the dragged item.
    fn without_dragging(&self) -> Vec<&DraggableDimension> {
        self.inside
            .iter()
            .copied()
            .filter(|child| child.id() != self.draggable.id())
            .collect()
    }

    fn direction(&self) -> UserDirection {
        if self.is_moving_forward {
            UserDirection::forward()
        } else {
            UserDirection::backward()
        }
    }

    fn reorder_at(&self, index: usize) -> DragImpact {
        reorder_impact_at(
            self.draggable,
            self.destination,
            self.inside,
            index,
            self.previous,
            self.viewport,
        )
    }

    fn from_reorder(&self, location: &DraggableLocation) -> Option<DragImpact> {
        let index = location.index;

        if self.is_home() && self.destination.is_combine_enabled {
            // combine with the neighbour on the side we are moving to
            let without = self.without_dragging();
            let target = if self.is_moving_forward {
                without.get(index)
            } else {
                index.checked_sub(1).and_then(|before| without.get(before))
            }?;
            return Some(DragImpact::combine(
                self.previous.movement.clone(),
                CombineImpact {
                    when_entered: self.direction(),
                    combine: Combine {
                        draggable_id: target.id().clone(),
                        droppable_id: self.destination.id().clone(),
                    },
                },
            ));
        }

        let max = if self.is_home() {
            self.inside.len().checked_sub(1)?
        } else {
            self.inside.len()
        };
        let next = if self.is_moving_forward {
            index.checked_add(1).filter(|next| *next <= max)?
        } else {
            index.checked_sub(1)?
        };
        Some(self.reorder_at(next))
    }

    fn from_combine(&self, merge: &CombineImpact) -> Result<DragImpact, InvariantError> {
        let without = self.without_dragging();
        let Some(target) = without
            .iter()
            .position(|child| child.id() == &merge.combine.draggable_id)
        else {
            tracing::error!(
                target = %merge.combine.draggable_id,
                droppable = %self.destination.id(),
                "combine target is not in its droppable"
            );
            return Err(InvariantError::NotInDroppable {
                draggable: merge.combine.draggable_id.clone(),
                droppable: self.destination.id().clone(),
            });
        };

        // forward passes the target, backward returns to the slot before it
        let index = if self.is_moving_forward {
            target + 1
        } else {
            target
        };
        Ok(self.reorder_at(index))
    }
}
