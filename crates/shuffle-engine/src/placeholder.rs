//! Growing a foreign droppable so the dragged item fits in it.

use shuffle_common::{patch, InvariantError, Position};

use crate::dimension::{
    get_subject, DimensionMap, DraggableDimension, DroppableDimension, PlaceholderInSubject,
    Scrollable,
};

/// Extra space the droppable needs on its main axis to hold its items plus
/// `placeholder_size`, or `None` if its content box is already big enough.
fn required_growth(
    droppable: &DroppableDimension,
    placeholder_size: Position,
    dimensions: &DimensionMap,
) -> Option<Position> {
    let axis = droppable.axis;
    let available = axis.size(&droppable.page.content_box);
    let used: f64 = dimensions
        .draggables_inside(droppable.id())
        .iter()
        .map(|child| axis.size(&child.client.margin_box))
        .sum();
    let needed = used + placeholder_size.get(axis.line()) - available;

    if needed <= 0.0 {
        None
    } else {
        Some(patch(axis.line(), needed, 0.0))
    }
}

fn with_max_scroll(frame: &Scrollable, max: Position) -> Scrollable {
    let mut frame = frame.clone();
    frame.scroll.max = max;
    frame
}

/// Make room for `draggable` at the end of a foreign `droppable`.
///
/// The subject grows by whatever the items plus the placeholder need beyond
/// the content box, and a scroll frame gets the same amount of extra scroll.
pub fn add_placeholder(
    droppable: &DroppableDimension,
    draggable: &DraggableDimension,
    dimensions: &DimensionMap,
) -> Result<DroppableDimension, InvariantError> {
    if droppable.is_home_of(draggable) {
        tracing::error!(droppable = %droppable.id(), "placeholder requested for home droppable");
        return Err(InvariantError::PlaceholderInHome(droppable.id().clone()));
    }
    if droppable.subject.with_placeholder.is_some() {
        tracing::error!(droppable = %droppable.id(), "droppable already has a placeholder");
        return Err(InvariantError::PlaceholderAlreadyAdded(droppable.id().clone()));
    }

    let axis = droppable.axis;
    let placeholder_size = patch(axis.line(), draggable.displace_by.get(axis.line()), 0.0);
    let increased_by = required_growth(droppable, placeholder_size, dimensions);
    let added = PlaceholderInSubject {
        increased_by,
        placeholder_size,
        old_frame_max_scroll: droppable.frame.as_ref().map(|frame| frame.scroll.max),
    };

    let frame = droppable.frame.as_ref().map(|frame| match increased_by {
        Some(growth) => with_max_scroll(frame, frame.scroll.max + growth),
        None => frame.clone(),
    });
    let subject = get_subject(
        droppable.subject.page_margin_box,
        Some(added),
        axis,
        frame.as_ref(),
    );

    tracing::debug!(
        droppable = %droppable.id(),
        growth = increased_by.map_or(0.0, |growth| growth.get(axis.line())),
        "added placeholder"
    );
    Ok(DroppableDimension {
        frame,
        subject,
        ..droppable.clone()
    })
}

/// Undo `add_placeholder`. A droppable without a placeholder comes back
/// unchanged.
pub fn remove_placeholder(droppable: &DroppableDimension) -> DroppableDimension {
    let Some(added) = droppable.subject.with_placeholder else {
        tracing::trace!(droppable = %droppable.id(), "no placeholder to remove");
        return droppable.clone();
    };

    let frame = droppable.frame.as_ref().map(|frame| {
        let max = added.old_frame_max_scroll.unwrap_or(frame.scroll.max);
        with_max_scroll(frame, max)
    });
    let subject = get_subject(
        droppable.subject.page_margin_box,
        None,
        droppable.axis,
        frame.as_ref(),
    );

    DroppableDimension {
        frame,
        subject,
        ..droppable.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::scroll::scroll_droppable;
    use crate::test_support::{
        dimension_map, droppable, list_at, scrollable_droppable, vertical_list,
    };
    use shuffle_common::Rect;

    fn dragged() -> DraggableDimension {
        let (_, items) = vertical_list("home", 1, 40.0);
        items[0].clone()
    }

    #[test]
    fn roomy_list_does_not_grow() {
        let (_, items) =
            list_at("foreign", Axis::Vertical, Position::new(300.0, 0.0), 3, 40.0);
        let foreign =
            droppable("foreign", Axis::Vertical, Rect::from_xywh(300.0, 0.0, 200.0, 300.0));
        let map = dimension_map(vec![foreign.clone()], items);

        let grown = add_placeholder(&foreign, &dragged(), &map).unwrap();
        let added = grown.subject.with_placeholder.unwrap();
        assert_eq!(added.increased_by, None);
        assert_eq!(added.placeholder_size, Position::new(0.0, 40.0));
        assert_eq!(grown.subject.active, foreign.subject.active);
    }

    #[test]
    fn full_list_grows_by_the_placeholder() {
        let (foreign, items) =
            list_at("foreign", Axis::Vertical, Position::new(300.0, 0.0), 3, 40.0);
        let map = dimension_map(vec![foreign.clone()], items);

        let grown = add_placeholder(&foreign, &dragged(), &map).unwrap();
        assert_eq!(
            grown.subject.with_placeholder.unwrap().increased_by,
            Some(Position::new(0.0, 40.0))
        );
        assert_eq!(grown.subject.active.unwrap().bottom, 160.0);

        let restored = remove_placeholder(&grown);
        assert_eq!(restored, foreign);
    }

    #[test]
    fn scroll_frame_gets_extra_room() {
        let list = scrollable_droppable(
            "list",
            Axis::Vertical,
            Rect::from_xywh(0.0, 0.0, 200.0, 100.0),
            Position::new(0.0, 200.0),
        );
        let (_, items) = vertical_list("list", 8, 40.0);
        let map = dimension_map(vec![list.clone()], items);
        let (_, other) = vertical_list("other", 1, 40.0);

        // 8 items and the placeholder need 360 of 300
        let grown = add_placeholder(&list, &other[0], &map).unwrap();
        let frame = grown.frame.as_ref().unwrap();
        assert_eq!(frame.scroll.max, Position::new(0.0, 260.0));

        // scrolling into the new room is allowed and moves the subject
        let scrolled = scroll_droppable(&grown, Position::new(0.0, 250.0)).unwrap();
        assert_eq!(
            scrolled.subject.active,
            Some(Rect::from_xywh(0.0, 0.0, 200.0, 100.0))
        );

        let restored = remove_placeholder(&scrolled);
        assert_eq!(
            restored.frame.as_ref().unwrap().scroll.max,
            Position::new(0.0, 200.0)
        );
        assert!(restored.subject.with_placeholder.is_none());
    }

    #[test]
    fn home_and_repeat_placeholders_are_rejected() {
        let (home, items) = vertical_list("home", 2, 40.0);
        let map = dimension_map(vec![home.clone()], items.clone());
        assert!(matches!(
            add_placeholder(&home, &items[0], &map),
            Err(InvariantError::PlaceholderInHome(_))
        ));

        let (foreign, _) = list_at("foreign", Axis::Vertical, Position::new(300.0, 0.0), 0, 40.0);
        let once = add_placeholder(&foreign, &items[0], &map).unwrap();
        assert!(matches!(
            add_placeholder(&once, &items[0], &map),
            Err(InvariantError::PlaceholderAlreadyAdded(_))
        ));
    }

    #[test]
    fn removing_without_a_placeholder_is_a_no_op() {
        let (list, _) = vertical_list("list", 2, 40.0);
        assert_eq!(remove_placeholder(&list), list);
    }
}
