use serde::{Deserialize, Serialize};
use shuffle_common::{DroppableId, Position, ORIGIN};

use crate::dimension::{DroppableDimension, Viewport};

use super::can_scroll::{
    can_scroll_droppable, can_scroll_window, get_droppable_overlap, get_window_overlap,
};

/// How a scroll jump request is split up.
///
/// The three parts always add up to the request on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpScrollPlan {
    /// The droppable to scroll, when it takes part of the jump.
    pub droppable_id: Option<DroppableId>,
    pub droppable_scroll: Position,
    pub window_scroll: Position,
    /// What neither could absorb; the item itself moves by this much.
    pub manual_move: Position,
}

impl JumpScrollPlan {
    pub fn total(&self) -> Position {
        self.droppable_scroll + self.window_scroll + self.manual_move
    }
}

/// Split `request` into the part a container takes and the overlap it
/// leaves.
fn absorb(request: Position, overlap: Option<Position>) -> (Position, Position) {
    let remainder = overlap.unwrap_or(ORIGIN);
    (request - remainder, remainder)
}

/// Split a keyboard scroll jump across the droppable's frame, then the
/// window, then a manual move of the item.
pub fn distribute_jump(
    request: Position,
    droppable: Option<&DroppableDimension>,
    viewport: &Viewport,
    is_window_scroll_allowed: bool,
) -> JumpScrollPlan {
    let mut plan = JumpScrollPlan {
        droppable_id: None,
        droppable_scroll: ORIGIN,
        window_scroll: ORIGIN,
        manual_move: ORIGIN,
    };
    let mut remaining = request;

    if let Some(droppable) = droppable {
        if can_scroll_droppable(droppable, remaining) {
            let (absorbed, left) = absorb(remaining, get_droppable_overlap(droppable, remaining));
            plan.droppable_id = Some(droppable.id().clone());
            plan.droppable_scroll = absorbed;
            remaining = left;
        }
    }

    if is_window_scroll_allowed && can_scroll_window(viewport, remaining) {
        let (absorbed, left) = absorb(remaining, get_window_overlap(viewport, remaining));
        plan.window_scroll = absorbed;
        remaining = left;
    }

    plan.manual_move = remaining;
    tracing::debug!(
        droppable = ?plan.droppable_id,
        droppable_y = plan.droppable_scroll.y,
        window_y = plan.window_scroll.y,
        manual_y = plan.manual_move.y,
        "distributed scroll jump"
    );
    plan
}
