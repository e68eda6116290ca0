//! Choosing where a keyboard move across lists should go.

use std::collections::HashMap;

use shuffle_common::{DroppableId, Position, Rect};

use crate::dimension::{
    with_droppable_displacement, DraggableDimension, DroppableDimension, Viewport,
};
use crate::visibility::{is_partially_visible_in_viewport, is_totally_visible};

fn is_within(lower: f64, upper: f64, value: f64) -> bool {
    value >= lower && value <= upper
}

/// The droppable next to `source` on its cross axis, in the direction of
/// travel.
///
/// Candidates have to be visible, accept the same type and overlap the
/// source on its main axis. The nearest row of candidates wins; within it
/// the one whose main axis span holds the center, and failing that the one
/// with a corner nearest to the center.
pub fn get_best_cross_axis_droppable<'a>(
    is_moving_forward: bool,
    page_border_box_center: Position,
    source: &DroppableDimension,
    droppables: &'a HashMap<DroppableId, DroppableDimension>,
    viewport: &Viewport,
) -> Option<&'a DroppableDimension> {
    let source_active = source.subject.active?;
    let axis = source.axis;
    let in_source = |value| {
        is_within(
            axis.start(&source_active),
            axis.end(&source_active),
            value,
        )
    };

    let mut candidates: Vec<(&DroppableDimension, Rect)> = droppables
        .values()
        .filter(|droppable| droppable.id() != source.id())
        .filter(|droppable| droppable.descriptor.type_id == source.descriptor.type_id)
        .filter(|droppable| droppable.is_enabled)
        .filter_map(|droppable| droppable.subject.active.map(|active| (droppable, active)))
        .filter(|(_, active)| is_partially_visible_in_viewport(active, viewport))
        .filter(|(_, active)| {
            if is_moving_forward {
                axis.cross_axis_end(&source_active) < axis.cross_axis_end(active)
            } else {
                axis.cross_axis_start(active) < axis.cross_axis_start(&source_active)
            }
        })
        .filter(|(_, active)| {
            let in_target = |value| is_within(axis.start(active), axis.end(active), value);
            in_source(axis.start(active))
                || in_source(axis.end(active))
                || in_target(axis.start(&source_active))
                || in_target(axis.end(&source_active))
        })
        .collect();

    candidates.sort_by(|(a_droppable, a), (b_droppable, b)| {
        let order = axis.cross_axis_start(a).total_cmp(&axis.cross_axis_start(b));
        let order = if is_moving_forward { order } else { order.reverse() };
        order.then_with(|| a_droppable.id().cmp(b_droppable.id()))
    });

    let (_, first) = *candidates.first()?;
    let nearest_row: Vec<_> = candidates
        .into_iter()
        .filter(|(_, active)| axis.cross_axis_start(active) == axis.cross_axis_start(&first))
        .collect();

    if let [(only, _)] = nearest_row.as_slice() {
        return Some(*only);
    }

    let center_on_main = page_border_box_center.get(axis.line());
    let containing = nearest_row
        .iter()
        .filter(|(_, active)| is_within(axis.start(active), axis.end(active), center_on_main))
        .min_by(|(_, a), (_, b)| axis.start(a).total_cmp(&axis.start(b)));
    if let Some((droppable, _)) = containing {
        return Some(*droppable);
    }

    nearest_row
        .iter()
        .min_by(|(_, a), (_, b)| {
            let a_distance = page_border_box_center.closest(&a.corners());
            let b_distance = page_border_box_center.closest(&b.corners());
            a_distance
                .total_cmp(&b_distance)
                .then_with(|| axis.start(a).total_cmp(&axis.start(b)))
        })
        .map(|(droppable, _)| *droppable)
}

/// The sibling in `destination` to line up with after a cross axis move.
///
/// Only siblings that can be seen in full are considered. The one whose
/// center, as currently drawn, is nearest wins, lower index first on ties.
pub fn get_closest_draggable<'a>(
    viewport: &Viewport,
    page_border_box_center: Position,
    destination: &DroppableDimension,
    inside_destination: &[&'a DraggableDimension],
) -> Option<&'a DraggableDimension> {
    let distance = |draggable: &DraggableDimension| {
        let drawn = with_droppable_displacement(destination, draggable.page.border_box.center());
        page_border_box_center.distance(drawn)
    };

    inside_destination
        .iter()
        .copied()
        .filter(|draggable| {
            is_totally_visible(&draggable.page.border_box, destination, viewport, true)
        })
        .min_by(|a, b| {
            distance(*a)
                .total_cmp(&distance(*b))
                .then_with(|| a.descriptor.index.cmp(&b.descriptor.index))
        })
}
