//! Where the dragged item should be drawn for a given impact.

use shuffle_common::{InvariantError, Position};

use crate::dimension::{
    with_droppable_displacement, DimensionMap, DraggableDimension, DroppableDimension, Viewport,
};
use crate::impact::{CombineImpact, DragImpact, DraggableLocation};
use crate::lift::OnLift;
use crate::move_relative_to::{go_after, go_before, go_into_start};

/// Page border box center the dragged item comes to rest at.
///
/// Without a destination or a combine target the item goes back to where it
/// was lifted from.
pub fn get_page_border_box_center(
    impact: &DragImpact,
    draggable: &DraggableDimension,
    dimensions: &DimensionMap,
    on_lift: &OnLift,
) -> Result<Position, InvariantError> {
    let original = draggable.page.border_box.center();

    if let Some(merge) = &impact.merge {
        let droppable = dimensions.droppable(&merge.combine.droppable_id)?;
        let center = combine_center(merge, impact, dimensions, on_lift)?;
        return Ok(with_droppable_displacement(droppable, center));
    }

    let Some(location) = &impact.destination else {
        return Ok(original);
    };
    let droppable = dimensions.droppable(&location.droppable_id)?;
    let center = reorder_center(location, impact, draggable, droppable, dimensions, on_lift)?;
    Ok(with_droppable_displacement(droppable, center))
}

fn combine_center(
    merge: &CombineImpact,
    impact: &DragImpact,
    dimensions: &DimensionMap,
    on_lift: &OnLift,
) -> Result<Position, InvariantError> {
    let target = dimensions.draggable(&merge.combine.draggable_id)?;
    let offset = on_lift.visual_offset(target.id(), &impact.movement);
    Ok(target.page.border_box.center() + offset)
}

fn reorder_center(
    location: &DraggableLocation,
    impact: &DragImpact,
    draggable: &DraggableDimension,
    droppable: &DroppableDimension,
    dimensions: &DimensionMap,
    on_lift: &OnLift,
) -> Result<Position, InvariantError> {
    let axis = droppable.axis;
    let is_home = droppable.is_home_of(draggable);

    let Some(closest) = impact.movement.displaced.first() else {
        if is_home {
            return Ok(draggable.page.border_box.center());
        }

        // nothing moved out of the way: the end of the list
        let inside = dimensions.draggables_inside(droppable.id());
        return Ok(match inside.last() {
            None => go_into_start(axis, &droppable.page, &draggable.page),
            Some(last) => {
                let offset = on_lift.visual_offset(last.id(), &impact.movement);
                go_after(axis, &last.page.offset(offset), &draggable.page)
            }
        });
    };

    let sibling = dimensions.draggable(&closest.draggable_id)?;
    if !sibling.is_inside(&location.droppable_id) {
        tracing::error!(
            draggable = %sibling.id(),
            droppable = %location.droppable_id,
            "displaced sibling is not inside the destination"
        );
        return Err(InvariantError::NotInDroppable {
            draggable: sibling.id().clone(),
            droppable: location.droppable_id.clone(),
        });
    }

    let offset = on_lift.visual_offset(sibling.id(), &impact.movement);
    let drawn = sibling.page.offset(offset);
    Ok(if impact.movement.will_displace_forward {
        go_before(axis, &drawn, &draggable.page)
    } else {
        go_after(axis, &drawn, &draggable.page)
    })
}

/// Convert a page center into the client center to render at, taking the
/// window scroll since the lift into account.
pub fn get_client_from_page_border_box_center(
    page_border_box_center: Position,
    draggable: &DraggableDimension,
    viewport: &Viewport,
) -> Position {
    let offset = page_border_box_center + viewport.scroll.diff.displacement
        - draggable.page.border_box.center();
    draggable.client.border_box.center() + offset
}

pub fn get_client_border_box_center(
    impact: &DragImpact,
    draggable: &DraggableDimension,
    dimensions: &DimensionMap,
    viewport: &Viewport,
    on_lift: &OnLift,
) -> Result<Position, InvariantError> {
    let page = get_page_border_box_center(impact, draggable, dimensions, on_lift)?;
    Ok(get_client_from_page_border_box_center(page, draggable, viewport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::impact::{
        get_drag_impact, reorder_impact_at, Combine, DragImpactArgs, UserDirection,
    };
    use crate::lift::get_lift_effect;
    use crate::scroll::{scroll_droppable, scroll_viewport};
    use crate::test_support::{
        big_viewport, dimension_map, draggable, droppable, horizontal_list, list_at,
        scrollable_droppable, vertical_list,
    };
    use shuffle_common::{BoxModel, DraggableId, Rect, Spacing};

    #[test]
    fn home_at_origin_rests_on_original_center() {
        let item = draggable("item", "list", 0, Rect::from_xywh(50.0, 25.0, 100.0, 50.0));
        let list = droppable("list", Axis::Vertical, Rect::from_xywh(0.0, 0.0, 200.0, 200.0));
        let map = dimension_map(vec![list.clone()], vec![item.clone()]);
        let (on_lift, impact) = get_lift_effect(&item, &list, &map, &big_viewport()).unwrap();

        let center = get_page_border_box_center(&impact, &item, &map, &on_lift).unwrap();
        assert_eq!(center, Position::new(100.0, 50.0));
        let client =
            get_client_border_box_center(&impact, &item, &map, &big_viewport(), &on_lift).unwrap();
        assert_eq!(client, Position::new(100.0, 50.0));
    }

    #[test]
    fn no_impact_returns_to_origin() {
        let (list, items) = vertical_list("list", 2, 40.0);
        let map = dimension_map(vec![list], items.clone());
        let center =
            get_page_border_box_center(&DragImpact::none(), &items[1], &map, &OnLift::default())
                .unwrap();
        assert_eq!(center, items[1].page.border_box.center());
    }

    #[test]
    fn forward_in_home_rests_after_closest_displaced() {
        let (row, items) = horizontal_list("row", 4, 50.0);
        let map = dimension_map(vec![row.clone()], items.clone());
        let inside = map.draggables_inside(row.id());
        let impact =
            reorder_impact_at(&items[0], &row, &inside, 3, &DragImpact::none(), &big_viewport());
        let center =
            get_page_border_box_center(&impact, &items[0], &map, &OnLift::default()).unwrap();
        assert_eq!(center, Position::new(175.0, 100.0));
    }

    #[test]
    fn backward_in_home_rests_before_closest_displaced() {
        let (list, items) = vertical_list("list", 4, 40.0);
        let map = dimension_map(vec![list.clone()], items.clone());
        let inside = map.draggables_inside(list.id());
        let impact =
            reorder_impact_at(&items[3], &list, &inside, 1, &DragImpact::none(), &big_viewport());
        let center =
            get_page_border_box_center(&impact, &items[3], &map, &OnLift::default()).unwrap();
        assert_eq!(center, Position::new(100.0, 60.0));
    }

    #[test]
    fn empty_foreign_list_uses_content_start() {
        let moving = BoxModel::new(
            Rect::from_xywh(10.0, 0.0, 80.0, 40.0),
            Spacing::new(0.0, 0.0, 0.0, 10.0),
            Spacing::default(),
            Spacing::default(),
        );
        let mut item = draggable("item", "home", 0, Rect::default());
        item.client = moving;
        item.page = moving;
        let home = droppable("home", Axis::Horizontal, Rect::from_xywh(0.0, 0.0, 200.0, 40.0));
        let foreign =
            droppable("foreign", Axis::Horizontal, Rect::from_xywh(500.0, 0.0, 300.0, 40.0));
        let map = dimension_map(vec![home, foreign.clone()], vec![item.clone()]);

        let impact =
            reorder_impact_at(&item, &foreign, &[], 0, &DragImpact::none(), &big_viewport());
        assert!(impact.movement.displaced.is_empty());
        let center = get_page_border_box_center(&impact, &item, &map, &OnLift::default()).unwrap();
        assert_eq!(center.x, 510.0 + 40.0);
    }

    #[test]
    fn foreign_list_end_goes_after_last_sibling() {
        let (home, home_items) = vertical_list("home", 1, 40.0);
        let (foreign, foreign_items) =
            list_at("foreign", Axis::Vertical, Position::new(300.0, 0.0), 2, 40.0);
        let mut all = home_items.clone();
        all.extend(foreign_items);
        let map = dimension_map(vec![home, foreign.clone()], all);
        let inside = map.draggables_inside(foreign.id());

        let at_end = reorder_impact_at(
            &home_items[0],
            &foreign,
            &inside,
            2,
            &DragImpact::none(),
            &big_viewport(),
        );
        let center =
            get_page_border_box_center(&at_end, &home_items[0], &map, &OnLift::default()).unwrap();
        assert_eq!(center, Position::new(400.0, 100.0));

        let at_start = reorder_impact_at(
            &home_items[0],
            &foreign,
            &inside,
            0,
            &DragImpact::none(),
            &big_viewport(),
        );
        let center =
            get_page_border_box_center(&at_start, &home_items[0], &map, &OnLift::default())
                .unwrap();
        // before foreign-0, which is now drawn at 40..80
        assert_eq!(center, Position::new(400.0, 20.0));
    }

    #[test]
    fn combine_rests_on_target_center() {
        let (list, items) = vertical_list("list", 3, 60.0);
        let map = dimension_map(vec![list], items.clone());
        let impact = DragImpact::combine(
            crate::impact::DragMovement::none(),
            CombineImpact {
                when_entered: UserDirection::forward(),
                combine: Combine {
                    draggable_id: DraggableId::new("list-2"),
                    droppable_id: shuffle_common::DroppableId::new("list"),
                },
            },
        );
        let center =
            get_page_border_box_center(&impact, &items[0], &map, &OnLift::default()).unwrap();
        assert_eq!(center, Position::new(100.0, 150.0));
    }

    #[test]
    fn droppable_and_window_scroll_are_applied() {
        let list = scrollable_droppable(
            "list",
            Axis::Vertical,
            Rect::from_xywh(0.0, 0.0, 200.0, 100.0),
            Position::new(0.0, 300.0),
        );
        let (_, items) = vertical_list("list", 4, 40.0);
        let list = scroll_droppable(&list, Position::new(0.0, 20.0)).unwrap();
        let map = dimension_map(vec![list.clone()], items.clone());
        let inside = map.draggables_inside(list.id());
        let viewport = scroll_viewport(&big_viewport(), Position::new(0.0, 5.0));

        let impact =
            reorder_impact_at(&items[0], &list, &inside, 1, &DragImpact::none(), &viewport);
        let page =
            get_page_border_box_center(&impact, &items[0], &map, &OnLift::default()).unwrap();
        // slot 1 is centered at 60, drawn 20 higher by the droppable scroll
        assert_eq!(page, Position::new(100.0, 40.0));

        let client = get_client_from_page_border_box_center(page, &items[0], &viewport);
        // and 5 higher again on screen by the window scroll
        assert_eq!(client, Position::new(100.0, 35.0));
    }

    #[test]
    fn missing_displaced_sibling_is_an_error() {
        let (list, items) = vertical_list("list", 3, 40.0);
        let map = dimension_map(vec![list.clone()], items.clone());
        let inside = map.draggables_inside(list.id());
        let impact =
            reorder_impact_at(&items[0], &list, &inside, 2, &DragImpact::none(), &big_viewport());

        let mut partial = map.clone();
        partial.draggables.remove(&DraggableId::new("list-2"));
        let result = get_page_border_box_center(&impact, &items[0], &partial, &OnLift::default());
        assert!(matches!(result, Err(InvariantError::DraggableNotFound(_))));
    }

    #[test]
    fn pointer_impact_round_trips_to_slot_center() {
        let (list, items) = vertical_list("list", 5, 40.0);
        let map = dimension_map(vec![list], items.clone());
        let impact = get_drag_impact(DragImpactArgs {
            page_border_box_center: Position::new(100.0, 130.0),
            draggable: &items[1],
            dimensions: &map,
            previous_impact: &DragImpact::none(),
            viewport: &big_viewport(),
            user_direction: UserDirection::forward(),
            on_lift: &OnLift::default(),
        });
        assert_eq!(impact.destination.as_ref().unwrap().index, 3);
        let center =
            get_page_border_box_center(&impact, &items[1], &map, &OnLift::default()).unwrap();
        assert_eq!(center, Position::new(100.0, 140.0));
    }
}
