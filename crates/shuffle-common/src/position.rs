//! Two dimensional vector arithmetic.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

/// One of the two coordinate lines a [`Position`] is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Line {
    X,
    Y,
}

impl Line {
    pub fn other(self) -> Line {
        match self {
            Line::X => Line::Y,
            Line::Y => Line::X,
        }
    }
}

// -0.0 == 0.0 holds for f64, but the sign leaks into serialized output and
// into `is_sign_negative`, so it is dropped here.
fn without_signed_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Position) -> Position {
        Position::new(self.x - other.x, self.y - other.y)
    }

    pub fn negate(self) -> Position {
        Position::new(without_signed_zero(-self.x), without_signed_zero(-self.y))
    }

    pub fn distance(self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Distance from `self` to the nearest of `points`. `f64::INFINITY` when empty.
    pub fn closest(self, points: &[Position]) -> f64 {
        points
            .iter()
            .map(|point| self.distance(*point))
            .fold(f64::INFINITY, f64::min)
    }

    /// Apply `f` to both coordinates.
    pub fn apply(self, f: impl Fn(f64) -> f64) -> Position {
        Position::new(f(self.x), f(self.y))
    }

    pub fn get(self, line: Line) -> f64 {
        match line {
            Line::X => self.x,
            Line::Y => self.y,
        }
    }

    /// Returns a copy with `line` replaced by `value`.
    pub fn with(self, line: Line, value: f64) -> Position {
        match line {
            Line::X => Position::new(value, self.y),
            Line::Y => Position::new(self.x, value),
        }
    }

    pub fn is_origin(self) -> bool {
        self == ORIGIN
    }
}

/// Build a position from a value on one line and (optionally) the other.
///
/// `patch(Line::Y, 10.0, 0.0)` is `{ x: 0, y: 10 }`.
pub fn patch(line: Line, value: f64, other: f64) -> Position {
    match line {
        Line::X => Position::new(value, other),
        Line::Y => Position::new(other, value),
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::add(self, rhs)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        self.subtract(rhs)
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Position {
        self.negate()
    }
}
