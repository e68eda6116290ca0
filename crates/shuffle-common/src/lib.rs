pub mod box_model;
pub mod errors;
pub mod id;
pub mod position;
pub mod rect;

pub use box_model::BoxModel;
pub use errors::{ConfigError, InvariantError, ShuffleError};
pub use id::{DraggableId, DroppableId, TypeId};
pub use position::{patch, Line, Position, ORIGIN};
pub use rect::{Rect, Spacing};

pub type Result<T> = std::result::Result<T, ShuffleError>;
