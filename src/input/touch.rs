//! Touch-panel coordinates and rectangular hit regions.

use serde::{Deserialize, Serialize};

/// Stylus position in panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned rectangle in panel coordinates. Out-of-range or garbage
/// coordinates simply fail containment; there is no separate validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchRegion {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl TouchRegion {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: TouchPoint) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}
