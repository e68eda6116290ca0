//! Discrete keyboard moves: one step along a list, or across to the next
//! list.

mod cross_axis;
mod in_list;

pub use cross_axis::{move_cross_axis, MoveCrossAxisArgs};
pub use in_list::{move_in_list, MoveInListArgs};

use serde::{Deserialize, Serialize};
use shuffle_common::{InvariantError, Position};

use crate::center::{get_client_from_page_border_box_center, get_page_border_box_center};
use crate::dimension::{DimensionMap, DraggableDimension, DroppableDimension, Viewport};
use crate::impact::DragImpact;
use crate::lift::OnLift;
use crate::visibility::is_totally_visible_on_axis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardMoveResult {
    pub impact: DragImpact,
    /// Client position to render the dragged item at.
    pub client_selection: Position,
    /// Set when the new spot is out of view. The caller scrolls by this
    /// amount (see `distribute_jump`) instead of moving the item.
    pub scroll_jump_request: Option<Position>,
}

/// Tail of a move along a list: resolve where the item goes and whether it
/// can get there without scrolling.
pub(crate) struct Landing<'a> {
    pub impact: DragImpact,
    pub draggable: &'a DraggableDimension,
    pub destination: &'a DroppableDimension,
    pub dimensions: &'a DimensionMap,
    pub viewport: &'a Viewport,
    pub on_lift: &'a OnLift,
    pub previous_page_border_box_center: Position,
    pub previous_client_selection: Position,
}

pub(crate) fn land(landing: Landing<'_>) -> Result<KeyboardMoveResult, InvariantError> {
    let Landing {
        impact,
        draggable,
        destination,
        dimensions,
        viewport,
        on_lift,
        previous_page_border_box_center,
        previous_client_selection,
    } = landing;

    let page_center = get_page_border_box_center(&impact, draggable, dimensions, on_lift)?;
    let moved = draggable
        .page
        .border_box
        .offset(page_center - draggable.page.border_box.center());

    // the page center already includes the droppable scroll
    if is_totally_visible_on_axis(&moved, destination, viewport, false) {
        let client_selection =
            get_client_from_page_border_box_center(page_center, draggable, viewport);
        return Ok(KeyboardMoveResult {
            impact,
            client_selection,
            scroll_jump_request: None,
        });
    }

    let jump = page_center - previous_page_border_box_center;
    tracing::debug!(x = jump.x, y = jump.y, "keyboard move needs a scroll jump");
    Ok(KeyboardMoveResult {
        impact,
        client_selection: previous_client_selection,
        scroll_jump_request: Some(jump),
    })
}
