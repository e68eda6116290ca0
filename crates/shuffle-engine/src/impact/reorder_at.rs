use crate::dimension::{DraggableDimension, DroppableDimension, Viewport};

use super::displacement::get_displacement;
use super::types::{get_displaced_by, DragImpact, DragMovement, DraggableLocation};

/// The reorder impact that puts the item at `index` in `destination`.
///
/// Used when the target slot is known up front, as for keyboard moves and
/// the lift. `inside` is the destination's draggables in index order; in
/// the home list it includes the dragged item.
pub fn reorder_impact_at(
    draggable: &DraggableDimension,
    destination: &DroppableDimension,
    inside: &[&DraggableDimension],
    index: usize,
    previous: &DragImpact,
    viewport: &Viewport,
) -> DragImpact {
    let (affected, will_displace_forward): (Vec<&DraggableDimension>, bool) =
        if destination.is_home_of(draggable) {
            let origin = inside
                .iter()
                .position(|child| child.id() == draggable.id())
                .unwrap_or(draggable.descriptor.index);
            if index > origin {
                // siblings between the origin and the target slide back,
                // the one at the target first
                let end = index.min(inside.len().saturating_sub(1));
                let between = inside.get(origin + 1..=end).unwrap_or(&[]);
                (between.iter().rev().copied().collect(), false)
            } else {
                let start = index.min(origin);
                (inside.get(start..origin).unwrap_or(&[]).to_vec(), true)
            }
        } else {
            let start = index.min(inside.len());
            (inside[start..].to_vec(), true)
        };

    let displaced_by = get_displaced_by(
        destination.axis,
        draggable.displace_by,
        will_displace_forward,
    );
    let displaced = affected
        .into_iter()
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

    DragImpact::reorder(
        DragMovement::new(displaced, displaced_by, will_displace_forward),
        DraggableLocation {
            droppable_id: destination.id().clone(),
            index,
        },
    )
}
