//! The four nested rectangles of a measured element.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::rect::{Rect, Spacing};

/// Margin, border, padding and content boxes of an element.
///
/// Only the border box and the three spacings are stored when serialized;
/// the other boxes are derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBoxModel", into = "RawBoxModel")]
pub struct BoxModel {
    pub margin_box: Rect,
    pub border_box: Rect,
    pub padding_box: Rect,
    pub content_box: Rect,
    pub margin: Spacing,
    pub border: Spacing,
    pub padding: Spacing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawBoxModel {
    border_box: Rect,
    #[serde(default)]
    margin: Spacing,
    #[serde(default)]
    border: Spacing,
    #[serde(default)]
    padding: Spacing,
}

impl From<RawBoxModel> for BoxModel {
    fn from(raw: RawBoxModel) -> Self {
        BoxModel::new(raw.border_box, raw.margin, raw.border, raw.padding)
    }
}

impl From<BoxModel> for RawBoxModel {
    fn from(model: BoxModel) -> Self {
        RawBoxModel {
            border_box: model.border_box,
            margin: model.margin,
            border: model.border,
            padding: model.padding,
        }
    }
}

impl BoxModel {
    pub fn new(border_box: Rect, margin: Spacing, border: Spacing, padding: Spacing) -> Self {
        let margin_box = border_box.expand(margin);
        let padding_box = border_box.shrink(border);
        let content_box = padding_box.shrink(padding);
        Self {
            margin_box,
            border_box,
            padding_box,
            content_box,
            margin,
            border,
            padding,
        }
    }

    /// A box with no margin, border or padding.
    pub fn from_border_box(border_box: Rect) -> Self {
        Self::new(
            border_box,
            Spacing::default(),
            Spacing::default(),
            Spacing::default(),
        )
    }

    pub fn offset(&self, by: Position) -> BoxModel {
        BoxModel::new(
            self.border_box.offset(by),
            self.margin,
            self.border,
            self.padding,
        )
    }

    /// Convert a client box into a page box given the window scroll at
    /// measurement time.
    pub fn with_scroll(&self, scroll: Position) -> BoxModel {
        self.offset(scroll)
    }
}
