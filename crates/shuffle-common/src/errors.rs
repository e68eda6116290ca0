use std::path::PathBuf;

use crate::id::{DraggableId, DroppableId};

/// A broken precondition inside the engine.
///
/// These are never expected during a healthy drag. The owner of the drag
/// session should abort it and return to idle instead of rendering a
/// position computed from inconsistent dimensions.
#[derive(Debug, thiserror::Error)]
pub enum InvariantError {
    #[error("draggable not found: {0}")]
    DraggableNotFound(DraggableId),

    #[error("droppable not found: {0}")]
    DroppableNotFound(DroppableId),

    #[error("droppable has no scroll frame: {0}")]
    MissingScrollFrame(DroppableId),

    #[error("draggable {draggable} is not inside droppable {droppable}")]
    NotInDroppable {
        draggable: DraggableId,
        droppable: DroppableId,
    },

    #[error("placeholder already added to droppable {0}")]
    PlaceholderAlreadyAdded(DroppableId),

    #[error("cannot add a placeholder to home droppable {0}")]
    PlaceholderInHome(DroppableId),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShuffleError {
    #[error(transparent)]
    Invariant(#[from] InvariantError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("scenario error: {0}")]
    Json(#[from] serde_json::Error),
}
