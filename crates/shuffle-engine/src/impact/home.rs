use shuffle_common::Position;

use crate::dimension::{DraggableDimension, DroppableDimension, Viewport};

use super::displacement::get_displacement;
use super::types::{get_displaced_by, DragImpact, DragMovement, DraggableLocation};

/// Reorder inside the list the item was lifted from.
///
/// Past its start position the item pulls later siblings back; before it,
/// earlier siblings are pushed forward. `center` is already corrected for
/// the droppable's scroll.
pub(crate) fn in_home_list(
    center: Position,
    draggable: &DraggableDimension,
    home: &DroppableDimension,
    inside_home: &[&DraggableDimension],
    previous: &DragImpact,
    viewport: &Viewport,
) -> DragImpact {
    let axis = home.axis;
    let line = axis.line();
    let original = draggable.page.border_box.center().get(line);
    let current = center.get(line);

    let is_beyond_start = current - original > 0.0;
    let displaced_by = get_displaced_by(axis, draggable.displace_by, !is_beyond_start);

    let mut displaced: Vec<_> = inside_home
        .iter()
        .filter(|child| child.id() != draggable.id())
        .filter(|child| {
            let border_box = &child.page.border_box;
            let child_center = border_box.center().get(line);
            if is_beyond_start {
                child_center >= original && current > axis.start(border_box)
            } else {
                child_center <= original && current < axis.end(border_box)
            }
        })
        .map(|child| get_displacement(child, home, &previous.movement, viewport, &displaced_by))
        .collect();

    // closest to the drag point first
    if is_beyond_start {
        displaced.reverse();
    }

    let origin = draggable.descriptor.index;
    let index = if is_beyond_start {
        origin + displaced.len()
    } else {
        origin.saturating_sub(displaced.len())
    };

    tracing::trace!(
        droppable = %home.id(),
        is_beyond_start,
        displaced = displaced.len(),
        index,
        "home list reorder"
    );

    DragImpact::reorder(
        DragMovement::new(displaced, displaced_by, !is_beyond_start),
        DraggableLocation {
            droppable_id: home.id().clone(),
            index,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{big_viewport, horizontal_list, vertical_list};

    fn displaced_ids(impact: &DragImpact) -> Vec<String> {
        impact
            .movement
            .displaced
            .iter()
            .map(|d| d.draggable_id.to_string())
            .collect()
    }

    #[test]
    fn dragging_past_three_siblings_pulls_them_back() {
        let (home, items) = horizontal_list("row", 4, 50.0);
        let inside: Vec<_> = items.iter().collect();
        let impact = in_home_list(
            Position::new(175.0, 100.0),
            &items[0],
            &home,
            &inside,
            &DragImpact::none(),
            &big_viewport(),
        );

        assert_eq!(displaced_ids(&impact), vec!["row-3", "row-2", "row-1"]);
        assert_eq!(impact.destination.unwrap().index, 3);
        assert!(!impact.movement.will_displace_forward);
        assert_eq!(impact.movement.displaced_by.value, -50.0);
        assert_eq!(impact.movement.displaced_by.point, Position::new(-50.0, 0.0));
    }

    #[test]
    fn dragging_backward_pushes_earlier_siblings_forward() {
        let (home, items) = vertical_list("list", 4, 40.0);
        let inside: Vec<_> = items.iter().collect();
        // item 3 (center 140) moved up to 30: crosses the ends of 2, 1 and 0.
        // item 0 is now closest to the drag point
        let impact = in_home_list(
            Position::new(100.0, 30.0),
            &items[3],
            &home,
            &inside,
            &DragImpact::none(),
            &big_viewport(),
        );

        assert_eq!(displaced_ids(&impact), vec!["list-0", "list-1", "list-2"]);
        assert_eq!(impact.destination.unwrap().index, 0);
        assert!(impact.movement.will_displace_forward);
        assert_eq!(impact.movement.displaced_by.value, 40.0);
    }

    #[test]
    fn sibling_is_displaced_only_once_its_edge_is_crossed() {
        let (home, items) = vertical_list("list", 3, 40.0);
        let inside: Vec<_> = items.iter().collect();
        // item 0 center 20; item 1 starts at 40
        let short = in_home_list(
            Position::new(100.0, 40.0),
            &items[0],
            &home,
            &inside,
            &DragImpact::none(),
            &big_viewport(),
        );
        assert!(short.movement.displaced.is_empty());
        assert_eq!(short.destination.unwrap().index, 0);

        let past = in_home_list(
            Position::new(100.0, 41.0),
            &items[0],
            &home,
            &inside,
            &DragImpact::none(),
            &big_viewport(),
        );
        assert_eq!(displaced_ids(&past), vec!["list-1"]);
        assert_eq!(past.destination.unwrap().index, 1);
    }

    #[test]
    fn resting_at_origin_displaces_nothing() {
        let (home, items) = vertical_list("list", 3, 40.0);
        let inside: Vec<_> = items.iter().collect();
        let impact = in_home_list(
            items[1].page.border_box.center(),
            &items[1],
            &home,
            &inside,
            &DragImpact::none(),
            &big_viewport(),
        );
        assert!(impact.movement.displaced.is_empty());
        assert_eq!(impact.destination.unwrap().index, 1);
    }

    #[test]
    fn cross_axis_movement_is_ignored() {
        let (home, items) = vertical_list("list", 3, 40.0);
        let inside: Vec<_> = items.iter().collect();
        // large horizontal movement, no vertical movement
        let impact = in_home_list(
            Position::new(900.0, 20.0),
            &items[0],
            &home,
            &inside,
            &DragImpact::none(),
            &big_viewport(),
        );
        assert!(impact.movement.displaced.is_empty());
        assert_eq!(impact.destination.unwrap().index, 0);
    }
}
