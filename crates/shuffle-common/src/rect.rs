use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Edge sizes of a margin, border or padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Spacing {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(size: f64) -> Self {
        Self::new(size, size, size, size)
    }
}

/// An axis aligned rectangle described by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(y, x + width, y + height, x)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Position {
        Position::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn offset(&self, by: Position) -> Rect {
        Rect::new(
            self.top + by.y,
            self.right + by.x,
            self.bottom + by.y,
            self.left + by.x,
        )
    }

    pub fn expand(&self, spacing: Spacing) -> Rect {
        Rect::new(
            self.top - spacing.top,
            self.right + spacing.right,
            self.bottom + spacing.bottom,
            self.left - spacing.left,
        )
    }

    pub fn shrink(&self, spacing: Spacing) -> Rect {
        Rect::new(
            self.top + spacing.top,
            self.right - spacing.right,
            self.bottom - spacing.bottom,
            self.left + spacing.left,
        )
    }

    /// The overlapping region of two rectangles, or `None` when they do not
    /// overlap with a positive area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let clipped = Rect::new(
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
            self.left.max(other.left),
        );
        if clipped.width() <= 0.0 || clipped.height() <= 0.0 {
            return None;
        }
        Some(clipped)
    }

    /// Corners in clockwise order starting at the top left.
    pub fn corners(&self) -> [Position; 4] {
        [
            Position::new(self.left, self.top),
            Position::new(self.right, self.top),
            Position::new(self.right, self.bottom),
            Position::new(self.left, self.bottom),
        ]
    }

    /// Edge inclusive point containment.
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}
