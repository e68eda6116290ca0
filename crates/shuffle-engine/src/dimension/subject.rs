//! The active region of a droppable.

use shuffle_common::Rect;

use super::types::{DroppableSubject, PlaceholderInSubject, Scrollable};
use crate::axis::Axis;

/// Derive the subject of a droppable from its page margin box.
///
/// The box is first moved by the scroll of its frame, then grown on its
/// main axis by any placeholder, and finally clipped to the frame when the
/// frame clips its contents.
pub fn get_subject(
    page_margin_box: Rect,
    with_placeholder: Option<PlaceholderInSubject>,
    axis: Axis,
    frame: Option<&Scrollable>,
) -> DroppableSubject {
    let scrolled = match frame {
        Some(frame) => page_margin_box.offset(frame.scroll.diff.displacement),
        None => page_margin_box,
    };
    let increased = increase(scrolled, axis, with_placeholder.as_ref());
    let active = clip(frame, increased);

    DroppableSubject {
        page_margin_box,
        with_placeholder,
        active,
    }
}

fn increase(target: Rect, axis: Axis, with_placeholder: Option<&PlaceholderInSubject>) -> Rect {
    match with_placeholder.and_then(|placeholder| placeholder.increased_by) {
        Some(increased_by) => axis.with_end(
            target,
            axis.end(&target) + increased_by.get(axis.line()),
        ),
        None => target,
    }
}

fn clip(frame: Option<&Scrollable>, target: Rect) -> Option<Rect> {
    match frame {
        Some(frame) if frame.should_clip_subject => frame.page_margin_box.intersection(&target),
        _ => Some(target),
    }
}

/// Recompute a subject keeping its margin box and placeholder.
pub(crate) fn refresh(
    subject: &DroppableSubject,
    axis: Axis,
    frame: Option<&Scrollable>,
) -> DroppableSubject {
    get_subject(
        subject.page_margin_box,
        subject.with_placeholder,
        axis,
        frame,
    )
}
