//! Collision shapes: the rendered outline tag plus the inset used to derive
//! an entity's collision box.

use crate::collision::AABB;
use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Outline of an entity. Collision always uses the bounding rectangle,
/// ellipses included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
}

/// Offsets applied to `position + size` to obtain the collision box.
/// `x`/`y` shift the top-left corner, `width`/`height` grow (or shrink, when
/// negative) the box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OffsetBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl OffsetBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A box inset by `margin` on every side.
    pub fn inset(margin: f64) -> Self {
        Self::new(margin, margin, -2.0 * margin, -2.0 * margin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub offset: OffsetBox,
}

impl Shape {
    pub fn new(kind: ShapeKind, offset: OffsetBox) -> Self {
        Self { kind, offset }
    }

    /// Derives the collision box for an entity at `position` with `size`.
    pub fn bounds(&self, position: Vec2, size: Vec2) -> AABB {
        AABB::from_rect(
            position.x + self.offset.x,
            position.y + self.offset.y,
            size.x + self.offset.width,
            size.y + self.offset.height,
        )
    }
}
