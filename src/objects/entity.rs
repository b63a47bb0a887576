use crate::behaviors::{BehaviorRef, Behaviors, EventKind};
use crate::collision::AABB;
use crate::common::{AttributeValue, Attributes, Material, ENERGY};
use crate::math::vec2::Vec2;
use crate::objects::influencer::{Influencer, InfluencerBehavior};
use crate::objects::store::EntityId;
use crate::shapes::{OffsetBox, Shape, ShapeKind};
use std::sync::Arc;

/// Duration value of an entity that never expires.
pub const PERSISTENT: i32 = -1;

/// How the engine and the detector treat an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhysicType {
    /// Integrated, constrained to the world and resolved on collision.
    #[default]
    Dynamic,
    /// Never moved by the engine; blocks dynamic entities.
    Static,
    /// Never moved and never blocks; still sensed by the detector.
    None,
}

/// What an entity is, as far as presentation is concerned.
/// Only `Influencer` carries simulation data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EntityKind {
    #[default]
    Base,
    Text,
    Gauge,
    Value,
    Map,
    Influencer(Influencer),
    Light,
    TileMap,
    ParticleSystem,
}

#[derive(Debug, Clone)]
pub struct Entity {
    // Identity
    pub id: EntityId, // Issued by the store on registration
    pub name: String,
    pub kind: EntityKind,
    pub physic_type: PhysicType,

    // Physical state
    pub position: Vec2, // Top-left corner in screen space (+y down)
    pub old_position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub pending_forces: Vec<Vec2>,
    pub mass: f64,
    pub material: Arc<Material>,

    // Geometry
    pub size: Vec2, // (width, height)
    pub shape: Shape,
    pub collision_box: AABB,

    /// -1 = persistent, 0 = dead, >0 = remaining lifetime in milliseconds.
    pub duration: i32,

    // Collision bookkeeping, reset every tick
    pub collide: bool,
    pub colliders: Vec<EntityId>,

    pub attributes: Attributes,
    pub behaviors: Behaviors,

    // Ownership links maintained by the store
    pub parent: Option<EntityId>,
    pub children: Vec<EntityId>,
}

impl Entity {
    /// Creates a persistent, dynamic 1x1 entity at the origin with mass 1.
    pub fn new(name: impl Into<String>) -> Self {
        let mut entity = Self {
            id: EntityId::default(),
            name: name.into(),
            kind: EntityKind::Base,
            physic_type: PhysicType::Dynamic,
            position: Vec2::ZERO,
            old_position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            pending_forces: Vec::new(),
            mass: 1.0,
            material: Arc::new(Material::default()),
            size: Vec2::new(1.0, 1.0),
            shape: Shape::default(),
            collision_box: AABB::default(),
            duration: PERSISTENT,
            collide: false,
            colliders: Vec::new(),
            attributes: Attributes::new(),
            behaviors: Behaviors::default(),
            parent: None,
            children: Vec::new(),
        };
        entity.update_bounds();
        entity
    }

    /// Creates a zone that pushes overlapping dynamic entities with `force`
    /// and, when `gravity` is set, replaces the world gravity inside it.
    /// Zones do not block movement (`PhysicType::None`).
    pub fn influencer(name: impl Into<String>, force: Vec2, gravity: Option<Vec2>) -> Self {
        Entity::new(name)
            .with_kind(EntityKind::Influencer(Influencer { force, gravity }))
            .with_physic_type(PhysicType::None)
            .with_behavior(EventKind::OnCollision, Arc::new(InfluencerBehavior))
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Vec2::new(x, y);
        self.old_position = self.position;
        self.update_bounds();
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Vec2::new(width, height);
        self.update_bounds();
        self
    }

    pub fn with_velocity(mut self, x: f64, y: f64) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    /// Panics when `mass` is not strictly positive.
    pub fn with_mass(mut self, mass: f64) -> Self {
        assert!(mass > 0.0, "Entity mass must be strictly positive");
        self.mass = mass;
        self
    }

    pub fn with_material(mut self, material: Arc<Material>) -> Self {
        self.material = material;
        self
    }

    pub fn with_physic_type(mut self, physic_type: PhysicType) -> Self {
        self.physic_type = physic_type;
        self
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = kind;
        self
    }

    /// Panics when `duration` is below -1.
    pub fn with_duration(mut self, duration: i32) -> Self {
        assert!(duration >= PERSISTENT, "Entity duration cannot be below -1");
        self.duration = duration;
        self
    }

    pub fn with_shape(mut self, kind: ShapeKind) -> Self {
        self.shape.kind = kind;
        self
    }

    pub fn with_collision_offset(mut self, offset: OffsetBox) -> Self {
        self.shape.offset = offset;
        self.update_bounds();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.set(key, value);
        self
    }

    pub fn with_behavior(mut self, kind: EventKind, behavior: BehaviorRef) -> Self {
        self.behaviors.add(kind, behavior);
        self
    }

    pub fn add_behavior(&mut self, kind: EventKind, behavior: BehaviorRef) {
        self.behaviors.add(kind, behavior);
    }

    /// Alive while `duration > 0`. A numeric `"energy"` attribute takes over
    /// the check when present.
    pub fn is_alive(&self) -> bool {
        match self.attributes.get(ENERGY).and_then(AttributeValue::as_f64) {
            Some(energy) => energy > 0.0,
            None => self.duration > 0,
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.duration == PERSISTENT
    }

    /// Counts the lifetime down by `max(elapsed, 1)` milliseconds, truncating
    /// the remainder toward zero. Persistent and dead entities are left
    /// untouched.
    pub fn tick_lifetime(&mut self, elapsed: f64) {
        if self.duration > 0 {
            self.duration = (self.duration as f64 - elapsed.max(1.0)).max(0.0) as i32;
        }
    }

    /// Recomputes the collision box from position, size and shape offset.
    pub fn update_bounds(&mut self) {
        self.collision_box = self.shape.bounds(self.position, self.size);
    }

    pub fn influencer_data(&self) -> Option<&Influencer> {
        match &self.kind {
            EntityKind::Influencer(data) => Some(data),
            _ => None,
        }
    }

    /// Queues a force for the next integration step.
    pub fn apply_force(&mut self, force: Vec2) {
        self.pending_forces.push(force);
    }

    pub fn clear_forces(&mut self) {
        self.pending_forces.clear();
    }

    /// Records an overlap partner once per tick.
    pub fn add_collider(&mut self, other: EntityId) {
        if !self.colliders.contains(&other) {
            self.colliders.push(other);
        }
    }

    /// Forgets this tick's overlaps.
    pub fn clear_collisions(&mut self) {
        self.collide = false;
        self.colliders.clear();
    }
}
