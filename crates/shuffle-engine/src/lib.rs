//! Drag geometry and impact engine.
//!
//! Pure functions over a snapshot of measured boxes. Given where the dragged
//! item is (or which way a keyboard step goes) they decide which siblings
//! move out of the way, where the item would land, where to render it, and
//! how far to auto-scroll. Nothing here keeps state between calls.

pub mod auto_scroll;
pub mod axis;
pub mod candidates;
pub mod center;
pub mod dimension;
pub mod impact;
pub mod keyboard;
pub mod lift;
pub mod move_relative_to;
pub mod placeholder;
pub mod scroll;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_support;

pub use auto_scroll::{distribute_jump, JumpScrollPlan};
pub use axis::Axis;
pub use center::{
    get_client_border_box_center, get_client_from_page_border_box_center,
    get_page_border_box_center,
};
pub use dimension::{
    DimensionMap, DraggableDescriptor, DraggableDimension, DroppableDescriptor,
    DroppableDimension, Scrollable, ScrollDetails, Viewport,
};
pub use impact::{get_drag_impact, DragImpact, DragImpactArgs, UserDirection};
pub use keyboard::{
    move_cross_axis, move_in_list, KeyboardMoveResult, MoveCrossAxisArgs, MoveInListArgs,
};
pub use lift::{get_lift_effect, OnLift};
