//! Pointer driven auto-scroll: the closer the dragged item gets to the edge
//! of a container, the faster that container scrolls.

use std::time::Duration;

use shuffle_common::{Position, Rect, ORIGIN};
use shuffle_config::AutoScrollConfig;

use crate::axis::Axis;
use crate::dimension::{DroppableDimension, Viewport};

use super::can_scroll::{can_scroll_droppable, can_scroll_window, get_overlap};

fn ease(percentage: f64) -> f64 {
    percentage * percentage
}

fn percentage(start: f64, end: f64, current: f64) -> f64 {
    let range = end - start;
    if range == 0.0 {
        return 0.0;
    }
    (current - start) / range
}

struct Thresholds {
    start_scrolling_from: f64,
    max_scroll_value_at: f64,
}

impl Thresholds {
    fn new(container: &Rect, axis: Axis, config: &AutoScrollConfig) -> Self {
        let size = axis.size(container);
        Self {
            start_scrolling_from: size * config.start_scrolling_from,
            max_scroll_value_at: size * config.max_scroll_at_percentage,
        }
    }

    fn speed(&self, distance_to_edge: f64, config: &AutoScrollConfig) -> f64 {
        if distance_to_edge > self.start_scrolling_from {
            return 0.0;
        }
        if distance_to_edge <= self.max_scroll_value_at {
            return config.max_pixel_scroll;
        }
        if distance_to_edge == self.start_scrolling_from {
            return config.min_scroll;
        }

        let from_max = percentage(
            self.max_scroll_value_at,
            self.start_scrolling_from,
            distance_to_edge,
        );
        (config.max_pixel_scroll * ease(1.0 - from_max)).ceil()
    }
}

/// Slow the start of a drag down so a quick pass over an edge does not
/// throw the container.
fn dampen(speed: f64, elapsed: Duration, config: &AutoScrollConfig) -> f64 {
    let accelerate_at = config.accelerate_at();
    let stop_dampening_at = config.stop_dampening_at();
    if elapsed >= stop_dampening_at {
        return speed;
    }
    if elapsed < accelerate_at {
        return config.min_scroll;
    }

    let ramp = percentage(
        accelerate_at.as_millis() as f64,
        stop_dampening_at.as_millis() as f64,
        elapsed.as_millis() as f64,
    );
    (speed * ease(ramp)).ceil()
}

fn scroll_on_axis(
    container: &Rect,
    center: Position,
    axis: Axis,
    elapsed: Option<Duration>,
    config: &AutoScrollConfig,
) -> f64 {
    let thresholds = Thresholds::new(container, axis, config);
    let line = axis.line();
    let to_start = center.get(line) - axis.start(container);
    let to_end = axis.end(container) - center.get(line);

    let (distance, sign) = if to_end < to_start {
        (to_end, 1.0)
    } else {
        (to_start, -1.0)
    };

    let speed = thresholds.speed(distance, config);
    if speed == 0.0 {
        return 0.0;
    }
    let speed = match elapsed {
        Some(elapsed) => dampen(speed, elapsed, config).max(config.min_scroll),
        None => speed,
    };
    sign * speed
}

/// Per-frame scroll for `container` with the dragged item centered at
/// `center`.
///
/// `subject` is the dragged item's box; an axis on which it is bigger than
/// the container never scrolls. `elapsed` is the time since the drag
/// started, `None` to skip time dampening.
pub fn get_scroll_change(
    container: &Rect,
    subject: &Rect,
    center: Position,
    elapsed: Option<Duration>,
    config: &AutoScrollConfig,
) -> Option<Position> {
    let mut change = Position::new(
        scroll_on_axis(container, center, Axis::Horizontal, elapsed, config),
        scroll_on_axis(container, center, Axis::Vertical, elapsed, config),
    );

    if subject.width() > container.width() {
        change.x = 0.0;
    }
    if subject.height() > container.height() {
        change.y = 0.0;
    }

    if change == ORIGIN {
        None
    } else {
        Some(change)
    }
}

fn limit_to_room(change: Position, overlap: Option<Position>) -> Option<Position> {
    let limited = change - overlap.unwrap_or(ORIGIN);
    if limited == ORIGIN {
        None
    } else {
        Some(limited)
    }
}

/// Fluid scroll for the window, limited to the room it has left.
pub fn get_window_scroll_change(
    viewport: &Viewport,
    subject: &Rect,
    center: Position,
    elapsed: Option<Duration>,
    config: &AutoScrollConfig,
) -> Option<Position> {
    let change = get_scroll_change(&viewport.frame, subject, center, elapsed, config)?;
    if !can_scroll_window(viewport, change) {
        return None;
    }
    limit_to_room(change, get_overlap(&viewport.scroll, change))
}

/// Fluid scroll for a droppable's frame. `None` when the droppable has no
/// frame or `center` is outside it.
pub fn get_droppable_scroll_change(
    droppable: &DroppableDimension,
    subject: &Rect,
    center: Position,
    elapsed: Option<Duration>,
    config: &AutoScrollConfig,
) -> Option<Position> {
    let frame = droppable.frame.as_ref()?;
    if !frame.page_margin_box.contains(center) {
        return None;
    }
    let change = get_scroll_change(&frame.page_margin_box, subject, center, elapsed, config)?;
    if !can_scroll_droppable(droppable, change) {
        return None;
    }
    limit_to_room(change, get_overlap(&frame.scroll, change))
}
