//! Measured geometry of draggables, droppables and the viewport.

use serde::{Deserialize, Serialize};
use shuffle_common::{BoxModel, DraggableId, DroppableId, Position, Rect, TypeId, ORIGIN};

use super::subject::get_subject;
use crate::axis::Axis;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraggableDescriptor {
    pub id: DraggableId,
    pub index: usize,
    pub type_id: TypeId,
    pub droppable_id: DroppableId,
}

/// A draggable as measured at lift (or when it was published).
///
/// Re-measurement produces a new value; a dimension is never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDraggable", into = "RawDraggable")]
pub struct DraggableDimension {
    pub descriptor: DraggableDescriptor,
    pub client: BoxModel,
    pub page: BoxModel,
    /// How far a sibling has to move to make room for this item: the size
    /// of its client margin box.
    pub displace_by: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDraggable {
    descriptor: DraggableDescriptor,
    client: BoxModel,
    page: BoxModel,
}

impl From<RawDraggable> for DraggableDimension {
    fn from(raw: RawDraggable) -> Self {
        DraggableDimension {
            displace_by: margin_box_size(&raw.client),
            descriptor: raw.descriptor,
            client: raw.client,
            page: raw.page,
        }
    }
}

impl From<DraggableDimension> for RawDraggable {
    fn from(dimension: DraggableDimension) -> Self {
        RawDraggable {
            descriptor: dimension.descriptor,
            client: dimension.client,
            page: dimension.page,
        }
    }
}

fn margin_box_size(client: &BoxModel) -> Position {
    Position::new(client.margin_box.width(), client.margin_box.height())
}

impl DraggableDimension {
    /// Build from a client box and the window scroll at measurement time.
    pub fn new(descriptor: DraggableDescriptor, client: BoxModel, window_scroll: Position) -> Self {
        Self {
            page: client.with_scroll(window_scroll),
            displace_by: margin_box_size(&client),
            descriptor,
            client,
        }
    }

    pub fn id(&self) -> &DraggableId {
        &self.descriptor.id
    }

    pub fn is_inside(&self, droppable_id: &DroppableId) -> bool {
        &self.descriptor.droppable_id == droppable_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollDiff {
    pub value: Position,
    /// The visual shift caused by the scroll: `-(current - initial)`.
    pub displacement: Position,
}

/// Scroll state of the window or of a scroll container.
///
/// `max` is advisory: scroll may go past it when a placeholder has grown
/// the content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollDetails {
    pub initial: Position,
    pub current: Position,
    pub max: Position,
    pub diff: ScrollDiff,
}

impl ScrollDetails {
    pub fn new(initial: Position, max: Position) -> Self {
        Self {
            initial,
            current: initial,
            max,
            diff: ScrollDiff::default(),
        }
    }

    /// Fold a new scroll offset into the diff.
    pub fn scrolled_to(&self, current: Position) -> Self {
        let value = current - self.initial;
        Self {
            initial: self.initial,
            current,
            max: self.max,
            diff: ScrollDiff {
                value,
                displacement: value.negate(),
            },
        }
    }
}

/// The closest scrollable ancestor of a droppable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scrollable {
    /// Visible frame of the container in page coordinates.
    pub page_margin_box: Rect,
    pub frame_client: BoxModel,
    pub scroll: ScrollDetails,
    pub should_clip_subject: bool,
}

/// How a foreign droppable has grown to make room for the dragged item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderInSubject {
    /// Growth of the subject; `None` when the existing space was enough.
    pub increased_by: Option<Position>,
    pub placeholder_size: Position,
    /// Max scroll of the frame before the growth, restored on removal.
    pub old_frame_max_scroll: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppableSubject {
    pub page_margin_box: Rect,
    pub with_placeholder: Option<PlaceholderInSubject>,
    /// The visible part of the droppable: scrolled, grown and clipped.
    /// `None` when the frame clips it away entirely.
    pub active: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DroppableDescriptor {
    pub id: DroppableId,
    pub type_id: TypeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDroppable", into = "RawDroppable")]
pub struct DroppableDimension {
    pub descriptor: DroppableDescriptor,
    pub axis: Axis,
    pub is_enabled: bool,
    pub is_combine_enabled: bool,
    pub client: BoxModel,
    pub page: BoxModel,
    pub frame: Option<Scrollable>,
    pub subject: DroppableSubject,
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDroppable {
    descriptor: DroppableDescriptor,
    axis: Axis,
    #[serde(default = "enabled")]
    is_enabled: bool,
    #[serde(default)]
    is_combine_enabled: bool,
    client: BoxModel,
    page: BoxModel,
    #[serde(default)]
    frame: Option<Scrollable>,
    #[serde(default)]
    with_placeholder: Option<PlaceholderInSubject>,
}

impl From<RawDroppable> for DroppableDimension {
    fn from(raw: RawDroppable) -> Self {
        let subject = get_subject(
            raw.page.margin_box,
            raw.with_placeholder,
            raw.axis,
            raw.frame.as_ref(),
        );
        DroppableDimension {
            descriptor: raw.descriptor,
            axis: raw.axis,
            is_enabled: raw.is_enabled,
            is_combine_enabled: raw.is_combine_enabled,
            client: raw.client,
            page: raw.page,
            frame: raw.frame,
            subject,
        }
    }
}

impl From<DroppableDimension> for RawDroppable {
    fn from(dimension: DroppableDimension) -> Self {
        RawDroppable {
            descriptor: dimension.descriptor,
            axis: dimension.axis,
            is_enabled: dimension.is_enabled,
            is_combine_enabled: dimension.is_combine_enabled,
            client: dimension.client,
            page: dimension.page,
            frame: dimension.frame,
            with_placeholder: dimension.subject.with_placeholder,
        }
    }
}

impl DroppableDimension {
    pub fn new(
        descriptor: DroppableDescriptor,
        axis: Axis,
        client: BoxModel,
        window_scroll: Position,
        frame: Option<Scrollable>,
    ) -> Self {
        let page = client.with_scroll(window_scroll);
        let subject = get_subject(page.margin_box, None, axis, frame.as_ref());
        Self {
            descriptor,
            axis,
            is_enabled: true,
            is_combine_enabled: false,
            client,
            page,
            frame,
            subject,
        }
    }

    pub fn with_enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    pub fn with_combine_enabled(mut self, is_combine_enabled: bool) -> Self {
        self.is_combine_enabled = is_combine_enabled;
        self
    }

    pub fn id(&self) -> &DroppableId {
        &self.descriptor.id
    }

    pub fn is_home_of(&self, draggable: &DraggableDimension) -> bool {
        draggable.is_inside(self.id())
    }

    /// Current scroll of the frame, measured from the start of the drag.
    pub fn scroll_diff(&self) -> Position {
        self.frame
            .as_ref()
            .map_or(ORIGIN, |frame| frame.scroll.diff.value)
    }

    /// Visual shift caused by the frame having scrolled.
    pub fn scroll_displacement(&self) -> Position {
        self.frame
            .as_ref()
            .map_or(ORIGIN, |frame| frame.scroll.diff.displacement)
    }
}

/// The window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The visible part of the page, in page coordinates.
    pub frame: Rect,
    pub scroll: ScrollDetails,
}

impl Viewport {
    /// A viewport whose frame is scrolled to its top-left corner.
    pub fn new(frame: Rect, max_scroll: Position) -> Self {
        Self {
            scroll: ScrollDetails::new(Position::new(frame.left, frame.top), max_scroll),
            frame,
        }
    }
}
