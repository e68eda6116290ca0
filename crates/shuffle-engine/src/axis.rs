//! Direction-agnostic accessors over rectangles.
//!
//! Everything downstream talks about "start", "end" and "cross axis" so the
//! same code handles vertical and horizontal lists.

use serde::{Deserialize, Serialize};
use shuffle_common::{Line, Rect, Spacing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn line(self) -> Line {
        match self {
            Axis::Vertical => Line::Y,
            Axis::Horizontal => Line::X,
        }
    }

    pub fn cross_axis_line(self) -> Line {
        self.line().other()
    }

    pub fn cross(self) -> Axis {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    pub fn start(self, rect: &Rect) -> f64 {
        match self {
            Axis::Vertical => rect.top,
            Axis::Horizontal => rect.left,
        }
    }

    pub fn end(self, rect: &Rect) -> f64 {
        match self {
            Axis::Vertical => rect.bottom,
            Axis::Horizontal => rect.right,
        }
    }

    pub fn size(self, rect: &Rect) -> f64 {
        match self {
            Axis::Vertical => rect.height(),
            Axis::Horizontal => rect.width(),
        }
    }

    pub fn cross_axis_start(self, rect: &Rect) -> f64 {
        self.cross().start(rect)
    }

    pub fn cross_axis_end(self, rect: &Rect) -> f64 {
        self.cross().end(rect)
    }

    pub fn cross_axis_size(self, rect: &Rect) -> f64 {
        self.cross().size(rect)
    }

    /// Leading edge size of a margin/border/padding on this axis.
    pub fn spacing_start(self, spacing: &Spacing) -> f64 {
        match self {
            Axis::Vertical => spacing.top,
            Axis::Horizontal => spacing.left,
        }
    }

    /// Trailing edge size of a margin/border/padding on this axis.
    pub fn spacing_end(self, spacing: &Spacing) -> f64 {
        match self {
            Axis::Vertical => spacing.bottom,
            Axis::Horizontal => spacing.right,
        }
    }

    /// Copy of `rect` with its end edge on this axis moved to `value`.
    pub fn with_end(self, rect: Rect, value: f64) -> Rect {
        match self {
            Axis::Vertical => Rect { bottom: value, ..rect },
            Axis::Horizontal => Rect { right: value, ..rect },
        }
    }
}
