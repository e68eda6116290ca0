//! Builders for dimension snapshots used across the engine tests.

use shuffle_common::{BoxModel, DraggableId, DroppableId, Position, Rect, TypeId, ORIGIN};

use crate::axis::Axis;
use crate::dimension::{
    DimensionMap, DraggableDescriptor, DraggableDimension, DroppableDescriptor,
    DroppableDimension, ScrollDetails, Scrollable, Viewport,
};

pub const TYPE: &str = "DEFAULT";

/// Cross-axis thickness of the generated lists.
pub const LIST_THICKNESS: f64 = 200.0;

pub fn draggable(
    id: &str,
    droppable_id: &str,
    index: usize,
    border_box: Rect,
) -> DraggableDimension {
    DraggableDimension::new(
        DraggableDescriptor {
            id: DraggableId::new(id),
            index,
            type_id: TypeId::new(TYPE),
            droppable_id: DroppableId::new(droppable_id),
        },
        BoxModel::from_border_box(border_box),
        ORIGIN,
    )
}

pub fn droppable(id: &str, axis: Axis, border_box: Rect) -> DroppableDimension {
    DroppableDimension::new(
        DroppableDescriptor {
            id: DroppableId::new(id),
            type_id: TypeId::new(TYPE),
        },
        axis,
        BoxModel::from_border_box(border_box),
        ORIGIN,
        None,
    )
}

/// A droppable that is its own scroll container.
///
/// `frame` is the visible box; the content is `max_scroll` larger.
pub fn scrollable_droppable(
    id: &str,
    axis: Axis,
    frame: Rect,
    max_scroll: Position,
) -> DroppableDimension {
    let content = Rect::from_xywh(
        frame.left,
        frame.top,
        frame.width() + max_scroll.x,
        frame.height() + max_scroll.y,
    );
    DroppableDimension::new(
        DroppableDescriptor {
            id: DroppableId::new(id),
            type_id: TypeId::new(TYPE),
        },
        axis,
        BoxModel::from_border_box(content),
        ORIGIN,
        Some(Scrollable {
            page_margin_box: frame,
            frame_client: BoxModel::from_border_box(frame),
            scroll: ScrollDetails::new(ORIGIN, max_scroll),
            should_clip_subject: true,
        }),
    )
}

pub fn viewport(frame: Rect) -> Viewport {
    Viewport::new(frame, ORIGIN)
}

/// A large viewport that shows everything the builders produce.
pub fn big_viewport() -> Viewport {
    viewport(Rect::from_xywh(0.0, 0.0, 2000.0, 2000.0))
}

pub fn item_id(list: &str, index: usize) -> String {
    format!("{list}-{index}")
}

/// `count` items of `size` stacked along `axis` starting at `origin`, inside
/// a droppable that exactly wraps them.
pub fn list_at(
    id: &str,
    axis: Axis,
    origin: Position,
    count: usize,
    size: f64,
) -> (DroppableDimension, Vec<DraggableDimension>) {
    let items = (0..count)
        .map(|index| {
            let start = index as f64 * size;
            let border_box = match axis {
                Axis::Vertical => {
                    Rect::from_xywh(origin.x, origin.y + start, LIST_THICKNESS, size)
                }
                Axis::Horizontal => {
                    Rect::from_xywh(origin.x + start, origin.y, size, LIST_THICKNESS)
                }
            };
            draggable(&item_id(id, index), id, index, border_box)
        })
        .collect();
    let length = count as f64 * size;
    let border_box = match axis {
        Axis::Vertical => Rect::from_xywh(origin.x, origin.y, LIST_THICKNESS, length),
        Axis::Horizontal => Rect::from_xywh(origin.x, origin.y, length, LIST_THICKNESS),
    };
    (droppable(id, axis, border_box), items)
}

pub fn vertical_list(
    id: &str,
    count: usize,
    size: f64,
) -> (DroppableDimension, Vec<DraggableDimension>) {
    list_at(id, Axis::Vertical, ORIGIN, count, size)
}

pub fn horizontal_list(
    id: &str,
    count: usize,
    size: f64,
) -> (DroppableDimension, Vec<DraggableDimension>) {
    list_at(id, Axis::Horizontal, ORIGIN, count, size)
}

pub fn dimension_map(
    droppables: Vec<DroppableDimension>,
    draggables: Vec<DraggableDimension>,
) -> DimensionMap {
    let mut map = DimensionMap::new();
    for droppable in droppables {
        map.insert_droppable(droppable);
    }
    for draggable in draggables {
        map.insert_draggable(draggable);
    }
    map
}
