//! How much of a scroll change a container can take.
//!
//! `max` is soft: a container already scrolled past its recorded max (into
//! a grown placeholder) may stay there, so the effective max on each axis is
//! `max(current, max)`.

use shuffle_common::{Position, ORIGIN};

use crate::dimension::{DroppableDimension, ScrollDetails, Viewport};

fn remainder(target: f64, max: f64) -> f64 {
    if target < 0.0 {
        target
    } else if target > max {
        target - max
    } else {
        0.0
    }
}

fn soft_max(scroll: &ScrollDetails) -> Position {
    Position::new(
        scroll.current.x.max(scroll.max.x),
        scroll.current.y.max(scroll.max.y),
    )
}

/// The part of `change` that would fall outside `[0, max]`, or `None` when
/// all of it fits.
pub fn get_overlap(scroll: &ScrollDetails, change: Position) -> Option<Position> {
    let max = soft_max(scroll);
    let target = scroll.current + change;
    let overlap = Position::new(remainder(target.x, max.x), remainder(target.y, max.y));
    if overlap == ORIGIN {
        None
    } else {
        Some(overlap)
    }
}

/// Whether at least one pixel of `change` can be applied.
pub fn can_partially_scroll(scroll: &ScrollDetails, change: Position) -> bool {
    let smallest = change.apply(|value| {
        if value > 0.0 {
            1.0
        } else if value < 0.0 {
            -1.0
        } else {
            0.0
        }
    });

    match get_overlap(scroll, smallest) {
        None => true,
        Some(overlap) => {
            (smallest.x != 0.0 && overlap.x == 0.0) || (smallest.y != 0.0 && overlap.y == 0.0)
        }
    }
}

pub fn can_scroll_window(viewport: &Viewport, change: Position) -> bool {
    can_partially_scroll(&viewport.scroll, change)
}

pub fn can_scroll_droppable(droppable: &DroppableDimension, change: Position) -> bool {
    droppable
        .frame
        .as_ref()
        .is_some_and(|frame| can_partially_scroll(&frame.scroll, change))
}

pub fn get_window_overlap(viewport: &Viewport, change: Position) -> Option<Position> {
    get_overlap(&viewport.scroll, change)
}

pub fn get_droppable_overlap(droppable: &DroppableDimension, change: Position) -> Option<Position> {
    get_overlap(&droppable.frame.as_ref()?.scroll, change)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(current: Position, max: Position) -> ScrollDetails {
        ScrollDetails::new(ORIGIN, max).scrolled_to(current)
    }

    #[test]
    fn change_within_room_has_no_overlap() {
        let scroll = details(Position::new(0.0, 10.0), Position::new(0.0, 100.0));
        assert_eq!(get_overlap(&scroll, Position::new(0.0, 50.0)), None);
        assert_eq!(get_overlap(&scroll, Position::new(0.0, -10.0)), None);
    }

    #[test]
    fn overlap_past_either_end() {
        let scroll = details(Position::new(0.0, 10.0), Position::new(0.0, 100.0));
        assert_eq!(
            get_overlap(&scroll, Position::new(0.0, 120.0)),
            Some(Position::new(0.0, 30.0))
        );
        assert_eq!(
            get_overlap(&scroll, Position::new(0.0, -25.0)),
            Some(Position::new(0.0, -15.0))
        );
    }

    #[test]
    fn scroll_past_max_is_kept() {
        // scrolled into a placeholder beyond the recorded max
        let scroll = details(Position::new(0.0, 140.0), Position::new(0.0, 100.0));
        assert_eq!(get_overlap(&scroll, ORIGIN), None);
        assert!(!can_partially_scroll(&scroll, Position::new(0.0, 5.0)));
        assert!(can_partially_scroll(&scroll, Position::new(0.0, -5.0)));
    }

    #[test]
    fn partial_scroll_needs_one_pixel_of_room() {
        let at_end = details(Position::new(0.0, 100.0), Position::new(0.0, 100.0));
        assert!(!can_partially_scroll(&at_end, Position::new(0.0, 30.0)));
        assert!(can_partially_scroll(&at_end, Position::new(0.0, -30.0)));

        // blocked on y but free on x
        let mixed = details(Position::new(0.0, 100.0), Position::new(50.0, 100.0));
        assert!(can_partially_scroll(&mixed, Position::new(10.0, 10.0)));
    }

    #[test]
    fn droppable_without_frame_cannot_scroll() {
        use crate::axis::Axis;
        use crate::test_support::droppable;
        use shuffle_common::Rect;

        let plain = droppable("list", Axis::Vertical, Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
        assert!(!can_scroll_droppable(&plain, Position::new(0.0, 10.0)));
        assert_eq!(get_droppable_overlap(&plain, Position::new(0.0, 10.0)), None);
    }
}
