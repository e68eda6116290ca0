//! Scroll updates for the viewport and for droppable frames.

use shuffle_common::{InvariantError, Position, Rect};

use crate::dimension::{refresh, DroppableDimension, Viewport};

/// Move the window to `new_scroll`.
pub fn scroll_viewport(viewport: &Viewport, new_scroll: Position) -> Viewport {
    let scroll = viewport.scroll.scrolled_to(new_scroll);
    let frame = Rect::from_xywh(
        new_scroll.x,
        new_scroll.y,
        viewport.frame.width(),
        viewport.frame.height(),
    );
    Viewport { frame, scroll }
}

/// Move the frame of a droppable to `new_scroll` and recompute its subject.
pub fn scroll_droppable(
    droppable: &DroppableDimension,
    new_scroll: Position,
) -> Result<DroppableDimension, InvariantError> {
    let Some(frame) = droppable.frame.as_ref() else {
        tracing::error!(droppable = %droppable.id(), "cannot scroll a droppable without a frame");
        return Err(InvariantError::MissingScrollFrame(droppable.id().clone()));
    };

    let mut frame = frame.clone();
    frame.scroll = frame.scroll.scrolled_to(new_scroll);
    let subject = refresh(&droppable.subject, droppable.axis, Some(&frame));

    Ok(DroppableDimension {
        frame: Some(frame),
        subject,
        ..droppable.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::test_support::{droppable, scrollable_droppable, viewport};
    use shuffle_common::ORIGIN;

    #[test]
    fn viewport_frame_follows_scroll() {
        let viewport = viewport(Rect::from_xywh(0.0, 0.0, 800.0, 600.0));
        let scrolled = scroll_viewport(&viewport, Position::new(0.0, 120.0));
        assert_eq!(scrolled.frame, Rect::from_xywh(0.0, 120.0, 800.0, 600.0));
        assert_eq!(scrolled.scroll.diff.value, Position::new(0.0, 120.0));
        assert_eq!(scrolled.scroll.diff.displacement, Position::new(0.0, -120.0));
        assert_eq!(scrolled.scroll.initial, ORIGIN);
    }

    #[test]
    fn scrolling_back_to_start_clears_the_diff() {
        let viewport = viewport(Rect::from_xywh(0.0, 0.0, 800.0, 600.0));
        let there = scroll_viewport(&viewport, Position::new(0.0, 50.0));
        let back = scroll_viewport(&there, ORIGIN);
        assert!(back.scroll.diff.value.is_origin());
        assert!(back.scroll.diff.displacement.is_origin());
    }

    #[test]
    fn droppable_scroll_moves_active_subject() {
        let list = scrollable_droppable(
            "list",
            Axis::Vertical,
            Rect::from_xywh(0.0, 0.0, 100.0, 100.0),
            Position::new(0.0, 300.0),
        );
        let scrolled = scroll_droppable(&list, Position::new(0.0, 40.0)).unwrap();
        let frame = scrolled.frame.as_ref().unwrap();
        assert_eq!(frame.scroll.current, Position::new(0.0, 40.0));
        assert_eq!(scrolled.scroll_diff(), Position::new(0.0, 40.0));
        // content moved up by 40 but is still clipped to the frame
        assert_eq!(scrolled.subject.active, Some(Rect::from_xywh(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(scrolled.page, list.page);
    }

    #[test]
    fn droppable_without_frame_cannot_scroll() {
        let list = droppable("list", Axis::Vertical, Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
        let result = scroll_droppable(&list, Position::new(0.0, 10.0));
        assert!(matches!(result, Err(InvariantError::MissingScrollFrame(_))));
    }
}
