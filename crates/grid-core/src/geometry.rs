// File: crates/grid-core/src/geometry.rs
// Summary: Plain geometry values exchanged between the grid and renderers.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle stored as origin corner plus extent.
/// Contract: `width` and `height` are non-negative when built through [`Rect::try_from_xywh`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Validating constructor: all values finite, extent non-negative.
    pub fn try_from_xywh(x: f64, y: f64, width: f64, height: f64) -> Result<Self, &'static str> {
        if !(x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite()) {
            return Err("rectangle values must be finite");
        }
        if width < 0.0 { return Err("width must be non-negative"); }
        if height < 0.0 { return Err("height must be non-negative"); }
        Ok(Self { x, y, width, height })
    }

    pub fn xmax(&self) -> f64 { self.x + self.width }
    pub fn ymax(&self) -> f64 { self.y + self.height }
}

/// Straight line from `(x1, y1)` to `(x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn to_array(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}
