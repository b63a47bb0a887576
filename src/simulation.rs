//! Top-level driver owning the entity store and running whole ticks.

use crate::behaviors::{BehaviorRef, Commands, EventKind};
use crate::collision::{CollisionDetector, Contact};
use crate::config::PhysicConfig;
use crate::engine::PhysicEngine;
use crate::error::{ConfigError, StoreError};
use crate::objects::camera::Camera;
use crate::objects::entity::Entity;
use crate::objects::store::{EntityId, EntityStore};
use crate::world::PhysicsWorld;
use std::path::Path;

/// Owns the world, the entities and both per-tick passes.
///
/// `update` takes `&mut self`, so a tick always has exclusive access to the
/// store; readers such as a renderer borrow it between ticks.
#[derive(Debug)]
pub struct Simulation {
    world: PhysicsWorld,
    store: EntityStore,
    engine: PhysicEngine,
    detector: CollisionDetector,
    commands: Commands,
    ticks: u64,
}

impl Simulation {
    pub fn new(config: PhysicConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: PhysicsWorld::from_config(&config),
            store: EntityStore::new(),
            engine: PhysicEngine::new(config.clone()),
            detector: CollisionDetector::new(config),
            commands: Commands::new(),
            ticks: 0,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::new(PhysicConfig::from_file(path)?)
    }

    pub fn with_world(mut self, world: PhysicsWorld) -> Self {
        self.world = world;
        self
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    pub fn config(&self) -> &PhysicConfig {
        self.engine.config()
    }

    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        self.store.insert(entity)
    }

    pub fn add_child(&mut self, parent: EntityId, child: Entity) -> Result<EntityId, StoreError> {
        self.store.add_child(parent, child)
    }

    /// Removes an entity and its children right away.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        self.store.remove(id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.store.get(id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.store.get_mut(id)
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn find_by_name(&self, pattern: &str) -> Vec<EntityId> {
        self.store.find_by_name(pattern)
    }

    pub fn add_scene_behavior(&mut self, behavior: BehaviorRef) {
        self.engine.add_scene_behavior(behavior);
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.engine.set_camera(camera);
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.engine.camera()
    }

    /// Runs one tick: the engine pass, then the collision pass, then the
    /// spawns and removals queued by behaviors during both.
    pub fn update(&mut self, elapsed: f64) {
        self.engine.update(&mut self.store, &self.world, elapsed, &mut self.commands);
        self.detector.update(&mut self.store, elapsed, &mut self.commands);
        self.store.apply(&mut self.commands);
        self.ticks += 1;
    }

    /// Invokes every `Input` behavior once, in registration order.
    pub fn dispatch_input(&mut self) {
        for id in self.store.ids() {
            let Some(entity) = self.store.get_mut(id) else {
                continue;
            };
            for behavior in entity.behaviors.for_kind(EventKind::Input) {
                behavior.input(entity, &mut self.commands);
            }
        }
        self.store.apply(&mut self.commands);
    }

    /// Entities a renderer should draw: alive or persistent, in
    /// registration order.
    pub fn presentable(&self) -> impl Iterator<Item = &Entity> {
        self.store
            .iter()
            .filter(|entity| entity.is_alive() || entity.is_persistent())
    }

    /// Pairs resolved by the last collision pass.
    pub fn contacts(&self) -> &[Contact] {
        self.detector.contacts()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
