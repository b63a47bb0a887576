//! Pluggable logic invoked by the engine and the detector.
//!
//! A behavior is registered under one or more [`EventKind`]s, on an entity or
//! at scene scope. Dispatch follows registration order and runs synchronously
//! inside the tick.

use crate::objects::entity::Entity;
use crate::objects::store::{EntityId, EntityStore};
use crate::world::PhysicsWorld;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Once per tick for the owning entity.
    UpdateEntity,
    /// Once per tick, after every entity was updated.
    UpdateScene,
    /// Once per detected overlap, with the owner as the first entity.
    OnCollision,
    /// Once per input polling pass.
    Input,
}

/// External logic plugged into the simulation. Every hook is optional.
///
/// One instance may be shared by many entities (it is held in an `Arc`), so
/// hooks take `&self`; stateful behaviors use interior mutability.
pub trait Behavior: Send + Sync {
    fn update(&self, _entity: &mut Entity, _elapsed: f64, _commands: &mut Commands) {}

    fn update_scene(&self, _store: &mut EntityStore, _world: &PhysicsWorld, _elapsed: f64) {}

    fn on_collision(&self, _entity: &mut Entity, _other: &mut Entity, _commands: &mut Commands) {}

    fn input(&self, _entity: &mut Entity, _commands: &mut Commands) {}
}

pub type BehaviorRef = Arc<dyn Behavior>;

/// Behaviors registered on one entity, grouped by event kind.
#[derive(Clone, Default)]
pub struct Behaviors {
    by_kind: HashMap<EventKind, Vec<BehaviorRef>>,
}

impl Behaviors {
    pub fn add(&mut self, kind: EventKind, behavior: BehaviorRef) {
        self.by_kind.entry(kind).or_default().push(behavior);
    }

    /// Snapshot of the behaviors for `kind`, in registration order.
    /// Cloning the handles lets a behavior mutate its owner while it runs.
    pub fn for_kind(&self, kind: EventKind) -> Vec<BehaviorRef> {
        self.by_kind.get(&kind).cloned().unwrap_or_default()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }

    pub fn clear(&mut self, kind: EventKind) {
        self.by_kind.remove(&kind);
    }
}

impl fmt::Debug for Behaviors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, list) in &self.by_kind {
            map.entry(kind, &list.len());
        }
        map.finish()
    }
}

/// Structural changes requested while a tick is running.
///
/// The store is never resized mid-iteration; the driver applies the queue
/// once the engine and detector are done.
#[derive(Debug, Default)]
pub struct Commands {
    pub(crate) spawns: Vec<(Option<EntityId>, Entity)>,
    pub(crate) removals: Vec<EntityId>,
}

impl Commands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a new top-level entity.
    pub fn spawn(&mut self, entity: Entity) {
        self.spawns.push((None, entity));
    }

    /// Queues a new entity owned by `parent`.
    pub fn spawn_child(&mut self, parent: EntityId, entity: Entity) {
        self.spawns.push((Some(parent), entity));
    }

    pub fn remove(&mut self, id: EntityId) {
        self.removals.push(id);
    }

    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty() && self.removals.is_empty()
    }
}
