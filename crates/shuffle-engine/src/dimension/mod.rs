//! Dimension snapshot: every measured draggable and droppable of a drag.

mod subject;
mod types;

pub use subject::get_subject;
pub(crate) use subject::refresh;
pub use types::{
    DraggableDescriptor, DraggableDimension, DroppableDescriptor, DroppableDimension,
    DroppableSubject, PlaceholderInSubject, ScrollDetails, ScrollDiff, Scrollable, Viewport,
};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shuffle_common::{DraggableId, DroppableId, InvariantError, Position};

/// All dimensions of the current drag, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDimensionMap", into = "RawDimensionMap")]
pub struct DimensionMap {
    pub draggables: HashMap<DraggableId, DraggableDimension>,
    pub droppables: HashMap<DroppableId, DroppableDimension>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawDimensionMap {
    #[serde(default)]
    draggables: Vec<DraggableDimension>,
    #[serde(default)]
    droppables: Vec<DroppableDimension>,
}

impl From<RawDimensionMap> for DimensionMap {
    fn from(raw: RawDimensionMap) -> Self {
        let mut map = DimensionMap::default();
        for draggable in raw.draggables {
            map.insert_draggable(draggable);
        }
        for droppable in raw.droppables {
            map.insert_droppable(droppable);
        }
        map
    }
}

impl From<DimensionMap> for RawDimensionMap {
    fn from(map: DimensionMap) -> Self {
        let mut draggables: Vec<_> = map.draggables.into_values().collect();
        draggables.sort_by(|a, b| a.descriptor.id.cmp(&b.descriptor.id));
        let mut droppables: Vec<_> = map.droppables.into_values().collect();
        droppables.sort_by(|a, b| a.descriptor.id.cmp(&b.descriptor.id));
        RawDimensionMap {
            draggables,
            droppables,
        }
    }
}

impl DimensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_draggable(&mut self, draggable: DraggableDimension) {
        self.draggables
            .insert(draggable.descriptor.id.clone(), draggable);
    }

    pub fn insert_droppable(&mut self, droppable: DroppableDimension) {
        self.droppables
            .insert(droppable.descriptor.id.clone(), droppable);
    }

    pub fn draggable(&self, id: &DraggableId) -> Result<&DraggableDimension, InvariantError> {
        self.draggables.get(id).ok_or_else(|| {
            tracing::error!(draggable = %id, "draggable missing from dimension map");
            InvariantError::DraggableNotFound(id.clone())
        })
    }

    pub fn droppable(&self, id: &DroppableId) -> Result<&DroppableDimension, InvariantError> {
        self.droppables.get(id).ok_or_else(|| {
            tracing::error!(droppable = %id, "droppable missing from dimension map");
            InvariantError::DroppableNotFound(id.clone())
        })
    }

    /// The draggables of a droppable ordered by their index.
    pub fn draggables_inside(&self, droppable_id: &DroppableId) -> Vec<&DraggableDimension> {
        let mut inside: Vec<_> = self
            .draggables
            .values()
            .filter(|draggable| draggable.is_inside(droppable_id))
            .collect();
        inside.sort_by_key(|draggable| draggable.descriptor.index);
        inside
    }

    /// Replace a droppable with an updated copy.
    pub fn with_droppable(mut self, droppable: DroppableDimension) -> Self {
        self.insert_droppable(droppable);
        self
    }
}

/// Move a page point into the coordinates the droppable had at lift, undoing
/// the scroll of its frame.
pub fn with_droppable_scroll(droppable: &DroppableDimension, point: Position) -> Position {
    point + droppable.scroll_diff()
}

/// Move a page point measured at lift to where it is now drawn inside a
/// scrolled droppable.
pub fn with_droppable_displacement(droppable: &DroppableDimension, point: Position) -> Position {
    point + droppable.scroll_displacement()
}
