//! Whether a rectangle can be seen through a droppable and the window.

use shuffle_common::Rect;

use crate::axis::Axis;
use crate::dimension::{DroppableDimension, Viewport};

fn is_within(lower: f64, upper: f64, value: f64) -> bool {
    value >= lower && value <= upper
}

/// Overlaps the frame, is contained by it, or is larger than it on one or
/// both axes while still crossing it.
fn partially_through(frame: &Rect, subject: &Rect) -> bool {
    let within_vertical = |value| is_within(frame.top, frame.bottom, value);
    let within_horizontal = |value| is_within(frame.left, frame.right, value);

    let contained = within_vertical(subject.top)
        && within_vertical(subject.bottom)
        && within_horizontal(subject.left)
        && within_horizontal(subject.right);
    if contained {
        return true;
    }

    let partially_vertical = within_vertical(subject.top) || within_vertical(subject.bottom);
    let partially_horizontal = within_horizontal(subject.left) || within_horizontal(subject.right);
    if partially_vertical && partially_horizontal {
        return true;
    }

    let bigger_vertical = subject.top < frame.top && subject.bottom > frame.bottom;
    let bigger_horizontal = subject.left < frame.left && subject.right > frame.right;
    if bigger_vertical && bigger_horizontal {
        return true;
    }

    (bigger_vertical && partially_horizontal) || (bigger_horizontal && partially_vertical)
}

fn totally_through(frame: &Rect, subject: &Rect) -> bool {
    is_within(frame.top, frame.bottom, subject.top)
        && is_within(frame.top, frame.bottom, subject.bottom)
        && is_within(frame.left, frame.right, subject.left)
        && is_within(frame.left, frame.right, subject.right)
}

fn totally_through_on_axis(axis: Axis, frame: &Rect, subject: &Rect) -> bool {
    let start = axis.start(frame);
    let end = axis.end(frame);
    is_within(start, end, axis.start(subject)) && is_within(start, end, axis.end(subject))
}

fn is_visible(
    target: &Rect,
    destination: &DroppableDimension,
    viewport: &Viewport,
    with_droppable_displacement: bool,
    through: impl Fn(&Rect, &Rect) -> bool,
) -> bool {
    let target = if with_droppable_displacement {
        target.offset(destination.scroll_displacement())
    } else {
        *target
    };

    let Some(active) = destination.subject.active.as_ref() else {
        return false;
    };

    through(active, &target) && through(&viewport.frame, &target)
}

pub fn is_partially_visible(
    target: &Rect,
    destination: &DroppableDimension,
    viewport: &Viewport,
    with_droppable_displacement: bool,
) -> bool {
    is_visible(
        target,
        destination,
        viewport,
        with_droppable_displacement,
        partially_through,
    )
}

pub fn is_totally_visible(
    target: &Rect,
    destination: &DroppableDimension,
    viewport: &Viewport,
    with_droppable_displacement: bool,
) -> bool {
    is_visible(
        target,
        destination,
        viewport,
        with_droppable_displacement,
        totally_through,
    )
}

/// Totally visible on the main axis of `destination`; the cross axis is
/// ignored.
pub fn is_totally_visible_on_axis(
    target: &Rect,
    destination: &DroppableDimension,
    viewport: &Viewport,
    with_droppable_displacement: bool,
) -> bool {
    let axis = destination.axis;
    is_visible(
        target,
        destination,
        viewport,
        with_droppable_displacement,
        move |frame, subject| totally_through_on_axis(axis, frame, subject),
    )
}

/// Partially visible in the window alone.
pub fn is_partially_visible_in_viewport(target: &Rect, viewport: &Viewport) -> bool {
    partially_through(&viewport.frame, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::scroll_droppable;
    use crate::test_support::{big_viewport, droppable, scrollable_droppable, viewport};
    use shuffle_common::Position;

    fn list() -> DroppableDimension {
        droppable("list", Axis::Vertical, Rect::from_xywh(0.0, 0.0, 100.0, 100.0))
    }

    #[test]
    fn contained_target_is_totally_visible() {
        let target = Rect::from_xywh(10.0, 10.0, 20.0, 20.0);
        assert!(is_partially_visible(&target, &list(), &big_viewport(), false));
        assert!(is_totally_visible(&target, &list(), &big_viewport(), false));
    }

    #[test]
    fn overlapping_target_is_only_partially_visible() {
        let target = Rect::from_xywh(80.0, 80.0, 40.0, 40.0);
        assert!(is_partially_visible(&target, &list(), &big_viewport(), false));
        assert!(!is_totally_visible(&target, &list(), &big_viewport(), false));
    }

    #[test]
    fn target_outside_droppable_is_invisible() {
        let target = Rect::from_xywh(300.0, 300.0, 20.0, 20.0);
        assert!(!is_partially_visible(&target, &list(), &big_viewport(), false));
    }

    #[test]
    fn target_must_also_be_in_viewport() {
        let small = viewport(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
        let target = Rect::from_xywh(60.0, 60.0, 20.0, 20.0);
        assert!(!is_partially_visible(&target, &list(), &small, false));
    }

    #[test]
    fn target_bigger_than_frame_is_partially_visible() {
        let target = Rect::from_xywh(-10.0, -10.0, 200.0, 200.0);
        assert!(is_partially_visible(&target, &list(), &big_viewport(), false));

        // taller than the frame and crossing it horizontally
        let tall = Rect::new(-50.0, 50.0, 150.0, 20.0);
        assert!(is_partially_visible(&tall, &list(), &big_viewport(), false));
    }

    #[test]
    fn no_active_subject_means_invisible() {
        let mut list = list();
        list.subject.active = None;
        let target = Rect::from_xywh(10.0, 10.0, 20.0, 20.0);
        assert!(!is_partially_visible(&target, &list, &big_viewport(), false));
        assert!(!is_totally_visible(&target, &list, &big_viewport(), false));
    }

    #[test]
    fn droppable_displacement_is_applied_before_checking() {
        let list = scrollable_droppable(
            "list",
            Axis::Vertical,
            Rect::from_xywh(0.0, 0.0, 100.0, 100.0),
            Position::new(0.0, 400.0),
        );
        let list = scroll_droppable(&list, Position::new(0.0, 200.0)).unwrap();
        // measured at lift at y=210, now drawn at y=10
        let target = Rect::from_xywh(0.0, 210.0, 100.0, 20.0);
        assert!(!is_partially_visible(&target, &list, &big_viewport(), false));
        assert!(is_totally_visible(&target, &list, &big_viewport(), true));
    }

    #[test]
    fn on_axis_ignores_cross_axis_overflow() {
        let wide = Rect::from_xywh(-20.0, 10.0, 200.0, 20.0);
        assert!(!is_totally_visible(&wide, &list(), &big_viewport(), false));
        assert!(is_totally_visible_on_axis(&wide, &list(), &big_viewport(), false));
    }
}
