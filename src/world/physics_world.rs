use crate::collision::AABB;
use crate::common::Material;
use crate::config::PhysicConfig;
use crate::math::vec2::Vec2;
use std::sync::Arc;

/// The playfield: simulation bounds, global gravity and the default
/// material used where no influencer applies.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsWorld {
    pub area: AABB,
    /// +y up: `(0, -g)` pulls entities toward the bottom of the screen.
    pub gravity: Vec2,
    pub material: Arc<Material>,
}

impl PhysicsWorld {
    /// Creates a world covering `width x height` from the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            area: AABB::from_rect(0.0, 0.0, width, height),
            gravity: PhysicConfig::default().gravity,
            material: Arc::new(Material::world()),
        }
    }

    pub fn from_config(config: &PhysicConfig) -> Self {
        Self::new(config.world_width, config.world_height).with_gravity(config.gravity)
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_material(mut self, material: Arc<Material>) -> Self {
        self.material = material;
        self
    }

    pub fn with_area(mut self, area: AABB) -> Self {
        self.area = area;
        self
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::from_config(&PhysicConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_new() {
        let world = PhysicsWorld::new(320.0, 200.0);
        assert_eq!(world.area, AABB::from_rect(0.0, 0.0, 320.0, 200.0));
        assert_eq!(world.material.name, "world");
    }

    #[test]
    fn test_world_from_config() {
        let config = PhysicConfig {
            world_width: 100.0,
            world_height: 50.0,
            gravity: Vec2::new(0.1, -0.2),
            ..PhysicConfig::default()
        };
        let world = PhysicsWorld::from_config(&config);
        assert_eq!(world.area.width(), 100.0);
        assert_eq!(world.area.height(), 50.0);
        assert_eq!(world.gravity, Vec2::new(0.1, -0.2));
    }

    #[test]
    fn test_world_builders() {
        let world = PhysicsWorld::default()
            .with_gravity(Vec2::ZERO)
            .with_material(Arc::new(Material::ice()))
            .with_area(AABB::from_rect(-10.0, -10.0, 20.0, 20.0));
        assert_eq!(world.gravity, Vec2::ZERO);
        assert_eq!(world.material.name, "ice");
        assert_eq!(world.area.min, Vec2::new(-10.0, -10.0));
    }
}
