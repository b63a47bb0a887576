use crate::math::vec2::Vec2;
use crate::objects::entity::Entity;
use crate::objects::store::EntityId;

/// Viewport that eases toward a tracked entity after every engine pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub name: String,
    /// Top-left corner of the viewport in world coordinates.
    pub position: Vec2,
    pub viewport: Vec2,
    /// Fraction of the remaining distance covered per millisecond.
    pub tween: f64,
    pub target: Option<EntityId>,
}

impl Camera {
    // Longest step used for one easing update, in milliseconds.
    const MAX_STEP: f64 = 10.0;

    pub fn new(name: impl Into<String>, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            name: name.into(),
            position: Vec2::ZERO,
            viewport: Vec2::new(viewport_width, viewport_height),
            tween: 0.02,
            target: None,
        }
    }

    pub fn with_target(mut self, target: EntityId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_tween(mut self, tween: f64) -> Self {
        self.tween = tween;
        self
    }

    /// Moves the viewport so that `target`'s centre drifts toward the
    /// viewport centre.
    pub fn follow(&mut self, target: &Entity, elapsed: f64) {
        let centre = target.position + target.size * 0.5;
        let goal = centre - self.viewport * 0.5;
        let factor = (self.tween * elapsed.min(Self::MAX_STEP)).min(1.0);
        self.position += (goal - self.position) * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_follow_eases_toward_target() {
        let target = Entity::new("hero").with_position(500.0, 300.0).with_size(20.0, 20.0);
        let mut camera = Camera::new("main", 320.0, 200.0).with_tween(0.05);
        // goal = (510, 310) - (160, 100) = (350, 210); factor = 0.05 * 10 = 0.5
        camera.follow(&target, 16.0);
        assert!((camera.position.x - 175.0).abs() < EPSILON);
        assert!((camera.position.y - 105.0).abs() < EPSILON);
    }

    #[test]
    fn test_follow_never_overshoots() {
        let target = Entity::new("hero").with_position(100.0, 100.0);
        let mut camera = Camera::new("main", 0.0, 0.0).with_tween(5.0);
        camera.follow(&target, 16.0);
        assert!((camera.position.x - 100.5).abs() < EPSILON);
        assert!((camera.position.y - 100.5).abs() < EPSILON);
    }
}
