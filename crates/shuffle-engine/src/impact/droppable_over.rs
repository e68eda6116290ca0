use std::collections::HashMap;

use shuffle_common::{DroppableId, Position};

use crate::dimension::{DraggableDimension, DroppableDimension};

/// The droppable under `target`.
///
/// Only enabled droppables that accept the draggable's type count. When
/// droppables are nested the innermost one, the one with the smallest
/// active area, wins.
pub fn get_droppable_over<'a>(
    target: Position,
    draggable: &DraggableDimension,
    droppables: &'a HashMap<DroppableId, DroppableDimension>,
) -> Option<&'a DroppableDimension> {
    droppables
        .values()
        .filter(|droppable| droppable.is_enabled)
        .filter(|droppable| droppable.descriptor.type_id == draggable.descriptor.type_id)
        .filter_map(|droppable| {
            let active = droppable.subject.active?;
            active.contains(target).then_some((droppable, active.area()))
        })
        .min_by(|(a, a_area), (b, b_area)| {
            a_area
                .total_cmp(b_area)
                .then_with(|| a.descriptor.id.cmp(&b.descriptor.id))
        })
        .map(|(droppable, _)| droppable)
}
