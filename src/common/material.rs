//! Defines physical material properties.

use serde::{Deserialize, Serialize};

/// Named physical properties of an entity or of the world.
///
/// Materials are shared across many entities through `Arc<Material>` and are
/// never mutated after construction. `elasticity` is not
/// clamped: values above 1 add energy on every bounce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Scales how strongly forces change velocity, and the weight used in impulses.
    pub density: f64,
    /// Coefficient of restitution (bounciness). 0 = no bounce.
    pub elasticity: f64,
    /// Multiplier applied to velocity changes while in contact.
    pub friction: f64,
}

impl Material {
    /// Creates a new material. Negative density or friction is raised to zero.
    pub fn new(name: impl Into<String>, density: f64, elasticity: f64, friction: f64) -> Self {
        Material {
            name: name.into(),
            density: density.max(0.0),
            elasticity,
            friction: friction.max(0.0),
        }
    }

    /// Material used for the world itself when nothing overrides it.
    pub fn world() -> Self {
        Material::new("world", 1.0, 0.0, 1.0)
    }

    pub fn rubber() -> Self {
        Material::new("rubber", 0.7, 0.8, 0.6)
    }

    pub fn wood() -> Self {
        Material::new("wood", 1.0, 0.3, 0.4)
    }

    pub fn steel() -> Self {
        Material::new("steel", 1.2, 0.1, 0.3)
    }

    pub fn ice() -> Self {
        Material::new("ice", 0.9, 0.05, 0.05)
    }
}

impl Default for Material {
    /// Default material properties (moderate elasticity, moderate friction).
    fn default() -> Self {
        Material::new("default", 1.0, 0.5, 0.5)
    }
}
