//! Scrolling on behalf of the dragged item: spreading a keyboard jump over
//! the containers that can take it, and edge-proximity scrolling during a
//! pointer drag.

pub mod can_scroll;
mod fluid;
mod jump;

pub use fluid::{get_droppable_scroll_change, get_scroll_change, get_window_scroll_change};
pub use jump::{distribute_jump, JumpScrollPlan};
