// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
/// In screen space `min` is the top-left corner and `max` the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        // Ensure min coordinates are <= max coordinates
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Creates an AABB from a top-left corner and a size.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        AABB::new(Vec2::new(x, y), Vec2::new(x + width, y + height))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Checks if this AABB overlaps with another AABB.
    /// Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &AABB) -> bool {
        let x_overlap = self.max.x > other.min.x && self.min.x < other.max.x;
        let y_overlap = self.max.y > other.min.y && self.min.y < other.max.y;
        x_overlap && y_overlap
    }
}
