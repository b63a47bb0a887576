//! Real-time 2D simulation core: force integration, all-pairs collision
//! resolution, influencer zones, entity lifetimes and pluggable behaviors.

pub mod behaviors;
pub mod collision;
pub mod common;
pub mod config;
pub mod engine;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod simulation;
pub mod world;

// Re-export key types for easier use
pub use behaviors::{Behavior, BehaviorRef, Commands, EventKind};
pub use collision::{CollisionDetector, Contact, ContactKind, AABB};
pub use common::{AttributeValue, Attributes, Material};
pub use config::PhysicConfig;
pub use engine::PhysicEngine;
pub use error::{AttributeError, ConfigError, StoreError};
pub use math::vec2::Vec2;
pub use objects::{Camera, Entity, EntityId, EntityKind, EntityStore, Influencer, PhysicType};
pub use shapes::{OffsetBox, ShapeKind};
pub use simulation::Simulation;
pub use world::PhysicsWorld;
