//! Where to put the border box center of a moving item so that it sits
//! flush against another box.

use shuffle_common::{patch, BoxModel, Position, Rect};

use crate::axis::Axis;

fn half_size(axis: Axis, is_moving: &BoxModel) -> f64 {
    axis.size(&is_moving.border_box) / 2.0
}

fn with_cross_axis_center(axis: Axis, main: f64, target: &Rect) -> Position {
    patch(axis.line(), main, target.center().get(axis.cross_axis_line()))
}

/// Trailing margin edge of `is_moving` touches the leading margin edge of
/// `move_relative_to`.
pub fn go_before(axis: Axis, move_relative_to: &BoxModel, is_moving: &BoxModel) -> Position {
    let main = axis.start(&move_relative_to.margin_box)
        - (axis.spacing_end(&is_moving.margin) + half_size(axis, is_moving));
    with_cross_axis_center(axis, main, &move_relative_to.margin_box)
}

/// Leading margin edge of `is_moving` touches the trailing margin edge of
/// `move_relative_to`.
pub fn go_after(axis: Axis, move_relative_to: &BoxModel, is_moving: &BoxModel) -> Position {
    let main = axis.end(&move_relative_to.margin_box)
        + (axis.spacing_start(&is_moving.margin) + half_size(axis, is_moving));
    with_cross_axis_center(axis, main, &move_relative_to.margin_box)
}

/// Leading margin edge of `is_moving` sits at the start of the content box
/// of `move_into`.
pub fn go_into_start(axis: Axis, move_into: &BoxModel, is_moving: &BoxModel) -> Position {
    let main = axis.start(&move_into.content_box)
        + (axis.spacing_start(&is_moving.margin) + half_size(axis, is_moving));
    with_cross_axis_center(axis, main, &move_into.content_box)
}
