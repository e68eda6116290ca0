use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shuffle_common::{patch, DraggableId, DroppableId, Position, ORIGIN};

use crate::axis::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalDirection {
    Up,
    #[default]
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalDirection {
    Left,
    #[default]
    Right,
}

/// Which way the user last moved on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UserDirection {
    pub vertical: VerticalDirection,
    pub horizontal: HorizontalDirection,
}

impl UserDirection {
    pub fn forward() -> Self {
        Self {
            vertical: VerticalDirection::Down,
            horizontal: HorizontalDirection::Right,
        }
    }

    pub fn backward() -> Self {
        Self {
            vertical: VerticalDirection::Up,
            horizontal: HorizontalDirection::Left,
        }
    }

    /// Fold a move from `previous` to `current` into the direction. An axis
    /// without movement keeps its last direction.
    pub fn update(self, previous: Position, current: Position) -> Self {
        let diff = current - previous;
        let vertical = if diff.y > 0.0 {
            VerticalDirection::Down
        } else if diff.y < 0.0 {
            VerticalDirection::Up
        } else {
            self.vertical
        };
        let horizontal = if diff.x > 0.0 {
            HorizontalDirection::Right
        } else if diff.x < 0.0 {
            HorizontalDirection::Left
        } else {
            self.horizontal
        };
        Self {
            vertical,
            horizontal,
        }
    }

    pub fn is_moving_forward(self, axis: Axis) -> bool {
        match axis {
            Axis::Vertical => self.vertical == VerticalDirection::Down,
            Axis::Horizontal => self.horizontal == HorizontalDirection::Right,
        }
    }
}

/// How far displaced siblings move, signed by direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplacedBy {
    pub value: f64,
    pub point: Position,
}

impl DisplacedBy {
    pub fn none() -> Self {
        Self {
            value: 0.0,
            point: ORIGIN,
        }
    }
}

pub fn get_displaced_by(
    axis: Axis,
    displace_by: Position,
    will_displace_forward: bool,
) -> DisplacedBy {
    let size = displace_by.get(axis.line());
    let value = if will_displace_forward { size } else { -size };
    DisplacedBy {
        value,
        point: patch(axis.line(), value, 0.0),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Displacement {
    pub draggable_id: DraggableId,
    pub is_visible: bool,
    pub should_animate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragMovement {
    /// Closest to the drag point first.
    pub displaced: Vec<Displacement>,
    pub map: BTreeMap<DraggableId, Displacement>,
    pub displaced_by: DisplacedBy,
    pub will_displace_forward: bool,
}

impl DragMovement {
    pub fn new(
        displaced: Vec<Displacement>,
        displaced_by: DisplacedBy,
        will_displace_forward: bool,
    ) -> Self {
        let map = displaced
            .iter()
            .map(|displacement| (displacement.draggable_id.clone(), displacement.clone()))
            .collect();
        Self {
            displaced,
            map,
            displaced_by,
            will_displace_forward,
        }
    }

    pub fn none() -> Self {
        Self::new(Vec::new(), DisplacedBy::none(), false)
    }

    pub fn is_displaced(&self, id: &DraggableId) -> bool {
        self.map.contains_key(id)
    }
}

impl Default for DragMovement {
    fn default() -> Self {
        Self::none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraggableLocation {
    pub droppable_id: DroppableId,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combine {
    pub draggable_id: DraggableId,
    pub droppable_id: DroppableId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombineImpact {
    pub when_entered: UserDirection,
    pub combine: Combine,
}

/// The consequence of the current drag position.
///
/// At most one of `destination` and `merge` is set; neither is set when
/// nothing is dragged over.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DragImpact {
    pub movement: DragMovement,
    pub destination: Option<DraggableLocation>,
    pub merge: Option<CombineImpact>,
}

impl DragImpact {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn reorder(movement: DragMovement, destination: DraggableLocation) -> Self {
        Self {
            movement,
            destination: Some(destination),
            merge: None,
        }
    }

    pub fn combine(movement: DragMovement, merge: CombineImpact) -> Self {
        Self {
            movement,
            destination: None,
            merge: Some(merge),
        }
    }

    /// The droppable the impact is in, through either a reorder or a combine.
    pub fn dragging_over(&self) -> Option<&DroppableId> {
        match (&self.destination, &self.merge) {
            (Some(location), _) => Some(&location.droppable_id),
            (None, Some(merge)) => Some(&merge.combine.droppable_id),
            (None, None) => None,
        }
    }
}
