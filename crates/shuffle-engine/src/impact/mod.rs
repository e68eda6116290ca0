//! Which siblings move out of the way, and where the item would land.

mod combine;
mod displacement;
mod droppable_over;
mod foreign;
mod home;
mod reorder_at;
mod types;

pub use droppable_over::get_droppable_over;
pub use reorder_at::reorder_impact_at;
pub use types::*;

pub(crate) use home::in_home_list;

use shuffle_common::Position;

use crate::dimension::{with_droppable_scroll, DimensionMap, DraggableDimension, Viewport};
use crate::lift::OnLift;

use combine::get_combine_impact;
use foreign::in_foreign_list;

/// Everything a pointer move needs to compute its impact.
#[derive(Debug, Clone, Copy)]
pub struct DragImpactArgs<'a> {
    /// Page position of the dragged item's border box center.
    pub page_border_box_center: Position,
    pub draggable: &'a DraggableDimension,
    pub dimensions: &'a DimensionMap,
    pub previous_impact: &'a DragImpact,
    pub viewport: &'a Viewport,
    pub user_direction: UserDirection,
    pub on_lift: &'a OnLift,
}

/// Compute the impact of the dragged item being at `page_border_box_center`.
pub fn get_drag_impact(args: DragImpactArgs<'_>) -> DragImpact {
    let DragImpactArgs {
        page_border_box_center,
        draggable,
        dimensions,
        previous_impact,
        viewport,
        user_direction,
        on_lift,
    } = args;

    let Some(destination) =
        get_droppable_over(page_border_box_center, draggable, &dimensions.droppables)
    else {
        tracing::debug!(draggable = %draggable.id(), "not over any droppable");
        return DragImpact::none();
    };

    let inside = dimensions.draggables_inside(destination.id());
    let center = with_droppable_scroll(destination, page_border_box_center);

    let impact = if destination.is_home_of(draggable) {
        get_combine_impact(
            center,
            draggable,
            destination,
            &inside,
            previous_impact,
            user_direction,
            on_lift,
        )
        .unwrap_or_else(|| {
            in_home_list(
                center,
                draggable,
                destination,
                &inside,
                previous_impact,
                viewport,
            )
        })
    } else {
        in_foreign_list(
            center,
            draggable,
            destination,
            &inside,
            previous_impact,
            viewport,
            user_direction,
        )
    };

    tracing::debug!(
        draggable = %draggable.id(),
        droppable = %destination.id(),
        index = ?impact.destination.as_ref().map(|location| location.index),
        combine = ?impact.merge.as_ref().map(|merge| merge.combine.draggable_id.as_str()),
        displaced = impact.movement.displaced.len(),
        "drag impact"
    );

    impact
}
