use serde::{Deserialize, Serialize};
use shuffle_common::{DraggableId, DroppableId, Position, Rect};
use shuffle_engine::{DimensionMap, DragImpact, JumpScrollPlan, Viewport};

/// How the dragged item is being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementMode {
    #[default]
    Pointer,
    Keyboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAxis {
    /// Along the list the item is over.
    Main,
    /// To the neighbouring list.
    Cross,
}

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    PointerMove {
        /// Page position of the dragged item's border box center.
        page_center: Position,
        /// Time since the lift, used to dampen auto-scroll.
        #[serde(default)]
        elapsed_ms: Option<u64>,
    },
    Keyboard {
        direction: KeyDirection,
        axis: KeyAxis,
    },
    ScrollWindow {
        to: Position,
    },
    ScrollDroppable {
        id: DroppableId,
        to: Position,
    },
}

/// The window at lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Visible part of the page; its top-left corner is the initial scroll.
    pub frame: Rect,
    #[serde(default)]
    pub max_scroll: Position,
}

impl WindowSpec {
    pub fn to_viewport(&self) -> Viewport {
        Viewport::new(self.frame, self.max_scroll)
    }
}

/// A drag to replay: the snapshot taken at lift plus the inputs that follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub dimensions: DimensionMap,
    pub window: WindowSpec,
    pub dragging: DraggableId,
    #[serde(default)]
    pub mode: MovementMode,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Scroll the fluid auto-scroller asks for after a pointer move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum AutoScrollRequest {
    Window { change: Position },
    Droppable { id: DroppableId, change: Position },
}

/// What the engine decided after one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: usize,
    pub impact: DragImpact,
    /// Where the dragged item is rendered, in client coordinates.
    pub client_center: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_jump_plan: Option<JumpScrollPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scroll: Option<AutoScrollRequest>,
}
