use crate::common::Material;
use crate::config::PhysicConfig;
use crate::math::vec2::Vec2;
use crate::objects::entity::{Entity, PhysicType};
use crate::objects::influencer::{active_zone, InfluenceZone};
use crate::world::PhysicsWorld;

/// Gravity, material and extra force acting on one entity for one tick.
#[derive(Debug, Clone, Copy)]
pub struct Environment<'a> {
    pub gravity: Vec2,
    pub material: &'a Material,
    pub force: Vec2,
}

impl<'a> Environment<'a> {
    /// The world's settings, overridden by the last influencer overlapping `entity`.
    pub fn resolve(world: &'a PhysicsWorld, zones: &'a [InfluenceZone], entity: &Entity) -> Self {
        match active_zone(zones, entity) {
            Some(zone) => Environment {
                gravity: zone.gravity.unwrap_or(world.gravity),
                material: &zone.material,
                force: zone.force,
            },
            None => Environment {
                gravity: world.gravity,
                material: &world.material,
                force: Vec2::ZERO,
            },
        }
    }
}

/// Advances a dynamic entity by one explicit Euler step.
///
/// `collider_friction` is the summed friction of the entities it touched on
/// the previous detection pass. Positions move by the velocity itself, not
/// by `velocity * dt`.
pub fn integrate(entity: &mut Entity, env: &Environment, config: &PhysicConfig, elapsed: f64, collider_friction: f64) {
    if entity.physic_type != PhysicType::Dynamic {
        return;
    }

    entity.old_position = entity.position;
    let dt = elapsed * config.frame_damping;

    if env.force != Vec2::ZERO {
        entity.apply_force(env.force);
    }
    // Gravity is +y up, the screen is +y down
    let weight = Vec2::new(entity.mass * env.gravity.x, -entity.mass * env.gravity.y);
    entity.apply_force(weight);

    let total: Vec2 = entity.pending_forces.iter().sum();
    entity.acceleration = total.clamp_band(config.acceleration_min, config.acceleration_max);

    let friction = if entity.collide {
        (entity.material.friction + collider_friction) * env.material.friction
    } else {
        env.material.friction
    };

    entity.velocity += entity.acceleration * (0.5 * dt * friction * env.material.density);
    entity.velocity = entity.velocity.clamp_band(config.speed_min, config.speed_max);
    entity.position += entity.velocity;

    entity.clear_forces();
    entity.collide = false;
}

/// Keeps a live (or persistent) entity's collision box inside the world.
/// Each edge is checked on its own; a hit reflects the matching velocity
/// component scaled by the entity's elasticity and zeroes that acceleration.
pub fn constrain_to_world(entity: &mut Entity, world: &PhysicsWorld) {
    if !(entity.is_alive() || entity.is_persistent()) {
        return;
    }
    entity.update_bounds();
    let bounds = entity.collision_box;
    let area = world.area;
    let elasticity = entity.material.elasticity;

    if bounds.min.x < area.min.x {
        entity.position.x += area.min.x - bounds.min.x;
        entity.velocity.x = -entity.velocity.x * elasticity;
        entity.acceleration.x = 0.0;
    }
    if bounds.min.y < area.min.y {
        entity.position.y += area.min.y - bounds.min.y;
        entity.velocity.y = -entity.velocity.y * elasticity;
        entity.acceleration.y = 0.0;
    }
    if bounds.max.x > area.max.x {
        entity.position.x -= bounds.max.x - area.max.x;
        entity.velocity.x = -entity.velocity.x * elasticity;
        entity.acceleration.x = 0.0;
    }
    if bounds.max.y > area.max.y {
        entity.position.y -= bounds.max.y - area.max.y;
        entity.velocity.y = -entity.velocity.y * elasticity;
        entity.acceleration.y = 0.0;
    }
    entity.update_bounds();
}
